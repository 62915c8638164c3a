// Integration fixtures for Polimap.

use polimap_core::AnalysisReport;

/// A raw wire-format report, as the analysis service returns it.
/// Exercises the full deserialization path and includes the cases the
/// graph builder must handle: a repeated policy across two chains, a
/// sentinel "None directly linked" policy, duplicate company mentions
/// with different casing, and a chain with no companies.
pub const WIRE_REPORT: &str = r#"{
  "report_title": "테스트 연결성 분석",
  "time_range": "2020-2025",
  "influence_chains": [
    {
      "politician": "이재명",
      "policy": "재생에너지 정책",
      "industry_or_sector": "에너지/철강",
      "companies": ["KEPCO", "POSCO"],
      "impact_description": "배우자 주식 보유를 통한 간접적 연결",
      "evidence": [
        { "source_title": "2023 재산공개 보고서", "url": "https://example.org/disclosure.pdf" }
      ]
    },
    {
      "politician": "이재명",
      "policy": "재생에너지 정책",
      "industry_or_sector": "에너지/철강",
      "companies": ["kepco "],
      "impact_description": "중복 언급",
      "evidence": []
    },
    {
      "politician": "이재명",
      "policy": "None directly linked",
      "industry_or_sector": "건설",
      "companies": ["동신건설"],
      "impact_description": "정책 연결 없음, 테마주 분류",
      "evidence": [
        { "source_title": "테마주 정리", "url": "https://example.org/theme" }
      ]
    },
    {
      "politician": "이재명",
      "policy": "바이오테크 R&D 보조금",
      "industry_or_sector": "바이오제약",
      "companies": [],
      "impact_description": "기업 미특정",
      "evidence": []
    }
  ],
  "notes": "통합 테스트 전용 데이터입니다."
}"#;

/// Parse [`WIRE_REPORT`].
pub fn wire_report() -> AnalysisReport {
    serde_json::from_str(WIRE_REPORT).expect("wire fixture parses")
}

/// The canonical mock report shipped with `polimap-core`.
pub fn fixture_report() -> AnalysisReport {
    polimap_core::mock::mock_report()
}
