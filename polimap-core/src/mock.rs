// Built-in fixture report, used when no analysis service is configured
// and by the test suite. The dataset mirrors a real generated report:
// four influence chains for one subject across energy/steel, biopharma,
// and construction, each with a citation.

use std::collections::HashMap;

use polimap_graphs::report::{AnalysisReport, ChainRecord};
use polimap_graphs::Evidence;

/// Subject the fixture report was generated for.
pub const MOCK_SUBJECT: &str = "이재명";

/// Listing symbols for companies known to the fixture. Enterprise nodes
/// for other companies get the placeholder symbol.
pub fn known_symbols() -> HashMap<String, String> {
    [
        ("KEPCO", "015760"),
        ("POSCO", "005490"),
        ("Celltrion Healthcare", "091990"),
        ("동신건설", "025950"),
        ("SK Group", "034730"),
    ]
    .into_iter()
    .map(|(name, symbol)| (name.to_string(), symbol.to_string()))
    .collect()
}

/// The canonical fixture report.
pub fn mock_report() -> AnalysisReport {
    AnalysisReport {
        report_title: "이재명의 정치·경제·기업 연결성 분석".to_string(),
        time_range: "2018–2025".to_string(),
        influence_chains: vec![
            chain(
                "재생에너지 정책",
                "에너지/철강",
                &["KEPCO", "POSCO"],
                "이재명 배우자가 KEPCO와 POSCO 주식을 보유하고 있어 에너지 및 철강 부문과 간접적인 재정적 연결고리를 나타냅니다.",
                "이재명 2023 재산공개 보고서",
                "https://www.ethics.go.kr/disclosure/2023/lee_jae_myung.pdf",
            ),
            chain(
                "바이오테크 R&D 보조금",
                "바이오제약",
                &["Celltrion Healthcare"],
                "이재명의 캠페인은 셀트리온과 연결된 로비스트와 간접적인 관계가 있으며, R&D 보조금 옹호 이후 바이오테크 주식 급등과 시기가 일치합니다.",
                "뉴스타파: 이재명의 바이오제약 관계",
                "https://www.newstapa.org/article/lee-celltrion",
            ),
            chain(
                "지역 개발 프로젝트",
                "건설",
                &["동신건설"],
                "이재명의 지역 개발 정책은 건설 회사인 동신건설의 주가 상승과 연결되어 있습니다.",
                "이재명 관련주, 이재명 테마주 한 장으로 알아보기",
                "https://jjeongddol.tistory.com/54",
            ),
            chain(
                "지역 개발 프로젝트",
                "건설/컨설팅",
                &["SK Group"],
                "이재명의 전 보좌관이 경기도 프로젝트에 대해 SK그룹에 자문하는 컨설팅 회사를 설립했습니다.",
                "KBS 특별 보고서: PolicyLink와 SK그룹",
                "https://news.kbs.co.kr/politics/policylink_2023",
            ),
        ],
        notes: "일부 연결은 간접적이거나 추측적입니다(예: 셀트리온 주가 급등 시기). 정책 대가성의 직접적인 증거는 없습니다.".to_string(),
    }
}

fn chain(
    policy: &str,
    sector: &str,
    companies: &[&str],
    impact: &str,
    source_title: &str,
    url: &str,
) -> ChainRecord {
    ChainRecord {
        politician: MOCK_SUBJECT.to_string(),
        policy: policy.to_string(),
        industry_or_sector: sector.to_string(),
        companies: companies.iter().map(ToString::to_string).collect(),
        impact_description: impact.to_string(),
        evidence: vec![Evidence {
            source_title: source_title.to_string(),
            url: url.to_string(),
        }],
    }
}

// ── Tests ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_has_four_chains_with_evidence() {
        let report = mock_report();
        assert_eq!(report.influence_chains.len(), 4);
        for chain in &report.influence_chains {
            assert!(!chain.evidence.is_empty());
            assert!(!chain.companies.is_empty());
        }
    }

    #[test]
    fn every_fixture_company_has_a_symbol() {
        let symbols = known_symbols();
        for chain in mock_report().influence_chains {
            for company in chain.companies {
                assert!(symbols.contains_key(&company), "missing symbol: {company}");
            }
        }
    }
}
