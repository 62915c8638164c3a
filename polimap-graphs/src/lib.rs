//! Polimap graph engine — influence-chain graph construction and layout.
//!
//! [`build::build_graph`] turns an analysis report (an ordered list of
//! influence-chain records) into a deduplicated, typed [`Graph`];
//! [`layout::compute_layout`] places every node of that graph into a
//! four-tier layered diagram for a given viewport and orientation.

pub mod build;
pub mod layout;
pub mod report;

use serde::{Deserialize, Serialize};

// ── Node kinds and tiers ───────────────────────────────────────────

/// The four node categories, in tier order.
///
/// Edges only ever connect a tier to the next one down:
/// input → policy → sector → enterprise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// The subject under analysis. Exactly one per graph.
    Input,
    Policy,
    Sector,
    Enterprise,
}

impl NodeKind {
    /// All kinds in tier order.
    pub const ALL: [NodeKind; 4] = [
        NodeKind::Input,
        NodeKind::Policy,
        NodeKind::Sector,
        NodeKind::Enterprise,
    ];

    /// Layer index of this kind: input = 0 through enterprise = 3.
    pub fn tier(self) -> usize {
        match self {
            Self::Input => 0,
            Self::Policy => 1,
            Self::Sector => 2,
            Self::Enterprise => 3,
        }
    }

    /// Human-readable category name, used for tier labels and tooltips.
    pub fn category_label(self) -> &'static str {
        match self {
            Self::Input => "검색 입력",
            Self::Policy => "관련 정책",
            Self::Sector => "산업 분야",
            Self::Enterprise => "관련 기업",
        }
    }
}

// ── Supporting records ─────────────────────────────────────────────

/// A citation attached to a node or edge. Carried verbatim from the
/// source record; never deduplicated or validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    #[serde(default)]
    pub source_title: String,
    #[serde(default)]
    pub url: String,
}

/// Market data attached to an enterprise node.
///
/// `simulated` is `true` for placeholder values derived from the company
/// name rather than a market feed. A real market-data integration would
/// populate the same shape with `simulated: false`; nothing in the graph
/// or layout contracts changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Listing symbol, or `"000000"` when unknown.
    pub symbol: String,
    pub price: i64,
    pub change: i64,
    pub change_percent: f64,
    pub simulated: bool,
}

// ── Nodes ──────────────────────────────────────────────────────────

/// Per-kind node payload. The variant doubles as the node's type tag on
/// the wire (`"type": "policy"` and so on).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeData {
    Input,
    Policy {
        description: String,
        evidence: Vec<Evidence>,
    },
    Sector {
        description: String,
        evidence: Vec<Evidence>,
    },
    Enterprise {
        description: String,
        evidence: Vec<Evidence>,
        market: MarketSnapshot,
    },
}

impl NodeData {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Input => NodeKind::Input,
            Self::Policy { .. } => NodeKind::Policy,
            Self::Sector { .. } => NodeKind::Sector,
            Self::Enterprise { .. } => NodeKind::Enterprise,
        }
    }

    /// Evidence attached to this node, if its kind carries any.
    pub fn evidence(&self) -> &[Evidence] {
        match self {
            Self::Input => &[],
            Self::Policy { evidence, .. }
            | Self::Sector { evidence, .. }
            | Self::Enterprise { evidence, .. } => evidence,
        }
    }
}

/// A typed graph vertex with a stable, content-derived id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    #[serde(flatten)]
    pub data: NodeData,
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        self.data.kind()
    }
}

// ── Edges ──────────────────────────────────────────────────────────

/// Metadata shared from the chain record that produced an edge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub evidence: Vec<Evidence>,
}

/// A directed connector between two node ids, always from a tier to the
/// adjacent downstream tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Derived from the ordered endpoint pair; unique per (source, target).
    pub id: String,
    pub source: String,
    pub target: String,
    pub data: EdgeData,
}

// ── Graph ──────────────────────────────────────────────────────────

/// A built influence graph. Node and edge order is insertion order from
/// the source report; the graph is immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// The single subject node.
    pub fn input_node(&self) -> Option<&Node> {
        self.nodes.iter().find(|n| n.kind() == NodeKind::Input)
    }

    /// Ids of all nodes of one kind, in insertion order.
    pub fn ids_of_kind(&self, kind: NodeKind) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|n| n.kind() == kind)
            .map(|n| n.id.as_str())
            .collect()
    }

    pub fn count_of_kind(&self, kind: NodeKind) -> usize {
        self.nodes.iter().filter(|n| n.kind() == kind).count()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────
