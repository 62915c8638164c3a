// Graph construction from influence-chain records.
//
// Repeated mentions of the same entity collapse into one node via
// normalized, content-derived ids; edges deduplicate per ordered
// endpoint pair. All dedup state is owned by a per-call builder, so
// builds for different reports never share anything.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]

use std::collections::HashMap;
use std::collections::HashSet;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tracing::debug;

use crate::report::{AnalysisReport, ChainRecord};
use crate::{Edge, EdgeData, Graph, MarketSnapshot, Node, NodeData};

/// Sentinel policy value reports use when no specific policy ties the
/// subject to a sector.
pub const NO_DIRECT_LINK: &str = "None directly linked";

/// Display label substituted for [`NO_DIRECT_LINK`].
pub const INDIRECT_INFLUENCE_LABEL: &str = "간접 영향";

/// Fixed input-node id and label used when the subject query is empty.
const SUBJECT_FALLBACK_ID: &str = "input-subject";
const SUBJECT_FALLBACK_LABEL: &str = "분석 대상";

/// Placeholder listing symbol for companies without a known one.
const UNKNOWN_SYMBOL: &str = "000000";

/// Normalize an entity name into a prefixed node id: case-folded, runs
/// of whitespace collapsed to a single `-`.
///
/// Two names produce the same id iff they are equal after this
/// normalization, so `"KEPCO"`, `"kepco"`, and `"KEPCO "` all resolve to
/// one node. That silent merging is intentional dedup behavior.
pub fn slug(prefix: &str, raw: &str) -> String {
    let norm = raw
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    format!("{prefix}-{norm}")
}

fn edge_id(source: &str, target: &str) -> String {
    format!("{source}->{target}")
}

/// Deterministic placeholder market data for an enterprise node.
///
/// Values derive from a stable hash of the company name, so rebuilding
/// the same report always yields an identical snapshot. The price lands
/// in a 10,000–400,000 KRW band and the daily change within ±5%.
pub fn simulated_snapshot(company: &str, symbol: Option<&str>) -> MarketSnapshot {
    let mut hasher = DefaultHasher::new();
    company.hash(&mut hasher);
    let hash = hasher.finish();

    let price = 10_000 + (hash % 390_000) as i64;
    let change_percent = ((hash >> 32) % 10_001) as f64 / 1_000.0 - 5.0;
    let change = (price as f64 * change_percent / 100.0).round() as i64;

    MarketSnapshot {
        symbol: symbol.unwrap_or(UNKNOWN_SYMBOL).to_string(),
        price,
        change,
        change_percent,
        simulated: true,
    }
}

/// Build the influence graph for a report. See [`build_graph_with_symbols`].
pub fn build_graph(report: &AnalysisReport, subject: &str) -> Graph {
    build_graph_with_symbols(report, subject, &HashMap::new())
}

/// Build the influence graph for a report, resolving company listing
/// symbols through `symbols` (company name → symbol).
///
/// The single input node is created first; chain records then produce
/// policy, sector, and enterprise nodes with input→policy,
/// policy→sector, and sector→enterprise edges, in record order.
/// Node and edge creation is first-mention-wins: later mentions of an
/// already-known id neither duplicate the node nor replace its metadata.
pub fn build_graph_with_symbols(
    report: &AnalysisReport,
    subject: &str,
    symbols: &HashMap<String, String>,
) -> Graph {
    let mut builder = GraphBuilder::default();

    let subject = subject.trim();
    let (input_id, input_label) = if subject.is_empty() {
        (SUBJECT_FALLBACK_ID.to_string(), SUBJECT_FALLBACK_LABEL)
    } else {
        (slug("input", subject), subject)
    };
    builder.insert_node(&input_id, input_label, NodeData::Input);

    for (index, chain) in report.influence_chains.iter().enumerate() {
        debug!(
            chain = index,
            policy = %chain.policy,
            sector = %chain.industry_or_sector,
            companies = chain.companies.len(),
            "processing influence chain"
        );
        builder.add_chain(&input_id, chain, symbols);
    }

    debug!(
        nodes = builder.nodes.len(),
        edges = builder.edges.len(),
        "graph built"
    );

    Graph {
        nodes: builder.nodes,
        edges: builder.edges,
    }
}

/// Per-call accumulator. Owns the name→node and edge-pair dedup state
/// for exactly one build.
#[derive(Debug, Default)]
struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    seen_nodes: HashSet<String>,
    seen_edges: HashSet<(String, String)>,
}

impl GraphBuilder {
    /// Insert a node unless its id already exists. First mention wins.
    fn insert_node(&mut self, id: &str, label: &str, data: NodeData) {
        if self.seen_nodes.insert(id.to_string()) {
            self.nodes.push(Node {
                id: id.to_string(),
                label: label.to_string(),
                data,
            });
        }
    }

    /// Insert an edge unless the (source, target) pair already exists.
    fn insert_edge(&mut self, source: &str, target: &str, data: EdgeData) {
        let key = (source.to_string(), target.to_string());
        if self.seen_edges.insert(key) {
            self.edges.push(Edge {
                id: edge_id(source, target),
                source: source.to_string(),
                target: target.to_string(),
                data,
            });
        }
    }

    fn add_chain(&mut self, input_id: &str, chain: &ChainRecord, symbols: &HashMap<String, String>) {
        let edge_data = EdgeData {
            description: if chain.impact_description.is_empty() {
                None
            } else {
                Some(chain.impact_description.clone())
            },
            evidence: chain.evidence.clone(),
        };

        // Policy tier. The sentinel is replaced before id derivation so
        // all indirect-influence chains share one policy node.
        let policy_label = if chain.policy == NO_DIRECT_LINK {
            INDIRECT_INFLUENCE_LABEL
        } else {
            chain.policy.as_str()
        };
        let policy_id = slug("policy", policy_label);
        self.insert_node(
            &policy_id,
            policy_label,
            NodeData::Policy {
                description: chain.impact_description.clone(),
                evidence: chain.evidence.clone(),
            },
        );
        self.insert_edge(input_id, &policy_id, edge_data.clone());

        // Sector tier.
        let sector_id = slug("sector", &chain.industry_or_sector);
        self.insert_node(
            &sector_id,
            &chain.industry_or_sector,
            NodeData::Sector {
                description: chain.impact_description.clone(),
                evidence: chain.evidence.clone(),
            },
        );
        self.insert_edge(&policy_id, &sector_id, edge_data.clone());

        // Enterprise tier.
        for company in &chain.companies {
            let company_id = slug("comp", company);
            let symbol = symbols.get(company.as_str()).map(String::as_str);
            self.insert_node(
                &company_id,
                company,
                NodeData::Enterprise {
                    description: chain.impact_description.clone(),
                    evidence: chain.evidence.clone(),
                    market: simulated_snapshot(company, symbol),
                },
            );
            self.insert_edge(&sector_id, &company_id, edge_data.clone());
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Evidence, NodeKind};

    fn chain(policy: &str, sector: &str, companies: &[&str]) -> ChainRecord {
        ChainRecord {
            politician: "이재명".to_string(),
            policy: policy.to_string(),
            industry_or_sector: sector.to_string(),
            companies: companies.iter().map(ToString::to_string).collect(),
            impact_description: "impact".to_string(),
            evidence: vec![Evidence {
                source_title: "2023 재산공개 보고서".to_string(),
                url: "https://example.com/report.pdf".to_string(),
            }],
        }
    }

    fn report(chains: Vec<ChainRecord>) -> AnalysisReport {
        AnalysisReport {
            report_title: "test".to_string(),
            time_range: "2018–2025".to_string(),
            influence_chains: chains,
            notes: String::new(),
        }
    }

    #[test]
    fn single_chain_scenario() {
        let report = report(vec![chain(
            "재생에너지 정책",
            "에너지/철강",
            &["KEPCO", "POSCO"],
        )]);
        let graph = build_graph(&report, "이재명");

        assert_eq!(graph.count_of_kind(NodeKind::Input), 1);
        assert_eq!(graph.count_of_kind(NodeKind::Policy), 1);
        assert_eq!(graph.count_of_kind(NodeKind::Sector), 1);
        assert_eq!(graph.count_of_kind(NodeKind::Enterprise), 2);
        assert_eq!(graph.edges.len(), 4);

        // input→policy, policy→sector, sector→each company
        let pairs: Vec<(&str, &str)> = graph
            .edges
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str()))
            .collect();
        assert!(pairs.contains(&("input-이재명", "policy-재생에너지-정책")));
        assert!(pairs.contains(&("policy-재생에너지-정책", "sector-에너지/철강")));
        assert!(pairs.contains(&("sector-에너지/철강", "comp-kepco")));
        assert!(pairs.contains(&("sector-에너지/철강", "comp-posco")));
    }

    #[test]
    fn dedup_is_case_and_whitespace_insensitive() {
        let report = report(vec![
            chain("Green  Energy", "Energy", &["KEPCO"]),
            chain("green energy ", "Energy", &["kepco"]),
        ]);
        let graph = build_graph(&report, "이재명");

        assert_eq!(graph.count_of_kind(NodeKind::Policy), 1);
        assert_eq!(graph.count_of_kind(NodeKind::Sector), 1);
        assert_eq!(graph.count_of_kind(NodeKind::Enterprise), 1);
        // input→policy, policy→sector, sector→comp — each exactly once
        assert_eq!(graph.edges.len(), 3);
    }

    #[test]
    fn repeated_policy_produces_one_edge_from_input() {
        let report = report(vec![
            chain("지역 개발 프로젝트", "건설", &["동신건설"]),
            chain("지역 개발 프로젝트", "건설/컨설팅", &["SK Group"]),
        ]);
        let graph = build_graph(&report, "이재명");

        assert_eq!(graph.count_of_kind(NodeKind::Policy), 1);
        assert_eq!(graph.count_of_kind(NodeKind::Sector), 2);
        let from_input = graph
            .edges
            .iter()
            .filter(|e| e.source == "input-이재명")
            .count();
        assert_eq!(from_input, 1);
    }

    #[test]
    fn first_mention_metadata_wins() {
        let mut second = chain("Policy", "Energy", &["KEPCO"]);
        second.impact_description = "other impact".to_string();
        let report = report(vec![chain("Policy", "Energy", &["KEPCO"]), second]);
        let graph = build_graph(&report, "이재명");

        let policy = graph.node("policy-policy").unwrap();
        let NodeData::Policy { description, .. } = &policy.data else {
            panic!("expected policy node");
        };
        assert_eq!(description, "impact");
    }

    #[test]
    fn sentinel_policy_becomes_indirect_influence() {
        let report = report(vec![chain(NO_DIRECT_LINK, "건설", &[])]);
        let graph = build_graph(&report, "이재명");

        let policy_ids = graph.ids_of_kind(NodeKind::Policy);
        assert_eq!(policy_ids.len(), 1);
        let node = graph.node(policy_ids[0]).unwrap();
        assert_eq!(node.label, INDIRECT_INFLUENCE_LABEL);
        assert_ne!(node.label, NO_DIRECT_LINK);
    }

    #[test]
    fn empty_report_still_has_input_node() {
        let graph = build_graph(&AnalysisReport::default(), "이재명");
        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.count_of_kind(NodeKind::Input), 1);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn empty_subject_falls_back_to_sentinel_input() {
        let graph = build_graph(&AnalysisReport::default(), "   ");
        let input = graph.input_node().unwrap();
        assert_eq!(input.id, SUBJECT_FALLBACK_ID);
        assert_eq!(input.label, SUBJECT_FALLBACK_LABEL);
    }

    #[test]
    fn empty_company_list_produces_no_enterprise_nodes() {
        let report = report(vec![chain("정책", "건설", &[])]);
        let graph = build_graph(&report, "이재명");
        assert_eq!(graph.count_of_kind(NodeKind::Enterprise), 0);
        assert_eq!(graph.edges.len(), 2);
    }

    #[test]
    fn edges_carry_description_and_evidence() {
        let report = report(vec![chain("정책", "건설", &["동신건설"])]);
        let graph = build_graph(&report, "이재명");
        for edge in &graph.edges {
            assert_eq!(edge.data.description.as_deref(), Some("impact"));
            assert_eq!(edge.data.evidence.len(), 1);
        }
    }

    #[test]
    fn known_symbol_is_used_for_snapshot() {
        let symbols =
            HashMap::from([("KEPCO".to_string(), "015760".to_string())]);
        let report = report(vec![chain("정책", "에너지", &["KEPCO", "Unknown Co"])]);
        let graph = build_graph_with_symbols(&report, "이재명", &symbols);

        let market = |id: &str| -> MarketSnapshot {
            let NodeData::Enterprise { market, .. } = &graph.node(id).unwrap().data else {
                panic!("expected enterprise node");
            };
            market.clone()
        };
        assert_eq!(market("comp-kepco").symbol, "015760");
        assert_eq!(market("comp-unknown-co").symbol, UNKNOWN_SYMBOL);
        assert!(market("comp-kepco").simulated);
    }

    #[test]
    fn snapshots_are_deterministic_across_builds() {
        let report = report(vec![chain("정책", "에너지", &["KEPCO"])]);
        let a = build_graph(&report, "이재명");
        let b = build_graph(&report, "이재명");
        assert_eq!(a, b);
    }

    // ── Property tests ────────────────────────────────────────────────

    mod properties {
        use proptest::prelude::*;

        use super::*;
        use crate::layout::{Orientation, Viewport, compute_layout};

        fn arb_name() -> impl Strategy<Value = String> {
            prop_oneof![
                Just("Green Energy".to_string()),
                Just("green  energy".to_string()),
                Just(NO_DIRECT_LINK.to_string()),
                Just("에너지/철강".to_string()),
                "[A-Za-z가-힣]{1,12}( [A-Za-z가-힣]{1,8})?",
            ]
        }

        fn arb_chain() -> impl Strategy<Value = ChainRecord> {
            (
                arb_name(),
                arb_name(),
                prop::collection::vec(arb_name(), 0..4),
                ".{0,40}",
            )
                .prop_map(|(policy, sector, companies, impact)| ChainRecord {
                    politician: "이재명".to_string(),
                    policy,
                    industry_or_sector: sector,
                    companies,
                    impact_description: impact,
                    evidence: Vec::new(),
                })
        }

        fn arb_report() -> impl Strategy<Value = AnalysisReport> {
            prop::collection::vec(arb_chain(), 0..8).prop_map(|chains| AnalysisReport {
                influence_chains: chains,
                ..AnalysisReport::default()
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            #[test]
            fn exactly_one_input_node(report in arb_report()) {
                let graph = build_graph(&report, "이재명");
                prop_assert_eq!(graph.count_of_kind(NodeKind::Input), 1);
            }

            #[test]
            fn node_ids_are_unique(report in arb_report()) {
                let graph = build_graph(&report, "이재명");
                let mut ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
                ids.sort_unstable();
                let before = ids.len();
                ids.dedup();
                prop_assert_eq!(before, ids.len());
            }

            #[test]
            fn edge_pairs_are_unique_and_endpoints_exist(report in arb_report()) {
                let graph = build_graph(&report, "이재명");
                let mut pairs: Vec<(&str, &str)> = graph
                    .edges
                    .iter()
                    .map(|e| (e.source.as_str(), e.target.as_str()))
                    .collect();
                pairs.sort_unstable();
                let before = pairs.len();
                pairs.dedup();
                prop_assert_eq!(before, pairs.len());

                for edge in &graph.edges {
                    prop_assert!(graph.node(&edge.source).is_some());
                    prop_assert!(graph.node(&edge.target).is_some());
                }
            }

            #[test]
            fn edges_step_exactly_one_tier_down(report in arb_report()) {
                let graph = build_graph(&report, "이재명");
                for edge in &graph.edges {
                    let src = graph.node(&edge.source).unwrap().kind().tier();
                    let dst = graph.node(&edge.target).unwrap().kind().tier();
                    prop_assert_eq!(src + 1, dst);
                }
            }

            #[test]
            fn layout_covers_every_node(report in arb_report()) {
                let graph = build_graph(&report, "이재명");
                let viewport = Viewport { width: 1000.0, height: 600.0 };
                for orientation in [Orientation::SideBySide, Orientation::Stacked] {
                    let positions = compute_layout(&graph, viewport, orientation);
                    prop_assert_eq!(positions.len(), graph.nodes.len());
                    for node in &graph.nodes {
                        prop_assert!(positions.contains_key(&node.id));
                    }
                }
            }

            #[test]
            fn layout_is_deterministic(report in arb_report()) {
                let graph = build_graph(&report, "이재명");
                let viewport = Viewport { width: 1280.0, height: 720.0 };
                let a = compute_layout(&graph, viewport, Orientation::SideBySide);
                let b = compute_layout(&graph, viewport, Orientation::SideBySide);
                prop_assert_eq!(a, b);
            }
        }
    }
}
