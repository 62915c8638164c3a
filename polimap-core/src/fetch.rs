// Report fetch client for the analysis service.
//
// The service generates a report per subject query; generation is slow,
// so a user can issue a new query while an older one is in flight. The
// client carries a request-generation counter and discards responses
// that were superseded before they arrived — stale data never reaches
// the pipeline.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::Client;
use serde_json::json;
use tracing::{debug, info, warn};

use polimap_graphs::report::AnalysisReport;

use crate::config::FetchSection;
use crate::error::FetchError;

/// Monotonic request-generation guard. A response is current only if no
/// newer request was begun while it was in flight.
#[derive(Debug, Default)]
struct RequestGuard {
    generation: AtomicU64,
}

impl RequestGuard {
    fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}

/// HTTP client for the report-generation endpoint.
#[derive(Debug)]
pub struct ReportClient {
    endpoint: String,
    client: Client,
    guard: RequestGuard,
}

impl ReportClient {
    pub fn new(fetch: &FetchSection) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(fetch.timeout_secs))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            endpoint: fetch.endpoint.clone(),
            client,
            guard: RequestGuard::default(),
        })
    }

    /// Fetch the report for a subject query.
    ///
    /// Returns `Ok(None)` when a newer request was issued through this
    /// client while this one was in flight; the superseded response is
    /// discarded, never surfaced as data.
    pub async fn fetch_latest(&self, query: &str) -> Result<Option<AnalysisReport>, FetchError> {
        let generation = self.guard.begin();
        info!(query, generation, endpoint = %self.endpoint, "fetching report");

        let report = self.fetch(query).await?;

        if !self.guard.is_current(generation) {
            warn!(query, generation, "discarding superseded report response");
            return Ok(None);
        }

        info!(
            query,
            chains = report.influence_chains.len(),
            "report received"
        );
        Ok(Some(report))
    }

    async fn fetch(&self, query: &str) -> Result<AnalysisReport, FetchError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "query": query }))
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        debug!(query, status = status.as_u16(), "report response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<AnalysisReport>()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────
