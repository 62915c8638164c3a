// Raw report wire model, as returned by the analysis service.
//
// A malformed or partial report deserializes to empty fields instead of
// failing, and the builder degrades to a graph containing only the
// input node: every field defaults when missing, and `influence_chains`
// additionally tolerates a wrong-typed value.

use serde::{Deserialize, Deserializer, Serialize};

use crate::Evidence;

/// A generated analysis report for one subject.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(default)]
    pub report_title: String,
    /// Period the analysis covers, e.g. `"2018–2025"`. Opaque display text.
    #[serde(default)]
    pub time_range: String,
    /// Missing or non-array values both degrade to an empty list.
    #[serde(default, deserialize_with = "lenient_chains")]
    pub influence_chains: Vec<ChainRecord>,
    #[serde(default)]
    pub notes: String,
}

/// Accept anything where the chain list should be: a non-array value
/// (or an array whose records do not fit the chain shape) yields an
/// empty list rather than failing the whole report.
fn lenient_chains<'de, D>(deserializer: D) -> Result<Vec<ChainRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Chains(Vec<ChainRecord>),
        Invalid(serde::de::IgnoredAny),
    }

    Ok(match Lenient::deserialize(deserializer)? {
        Lenient::Chains(chains) => chains,
        Lenient::Invalid(_) => Vec::new(),
    })
}

/// One influence chain: subject → policy → sector → companies, with
/// supporting evidence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainRecord {
    #[serde(default)]
    pub politician: String,
    #[serde(default)]
    pub policy: String,
    #[serde(default)]
    pub industry_or_sector: String,
    #[serde(default)]
    pub companies: Vec<String>,
    #[serde(default)]
    pub impact_description: String,
    #[serde(default)]
    pub evidence: Vec<Evidence>,
}

// ── Tests ─────────────────────────────────────────────────────────────
