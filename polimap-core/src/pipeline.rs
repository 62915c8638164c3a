// Analysis pipeline: report → graph → layout, composed into the view
// handed to a renderer. Both stages are pure and synchronous; the view
// is recomputed in full whenever the report, subject, or viewport
// changes.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::info;

use polimap_graphs::Graph;
use polimap_graphs::build::build_graph_with_symbols;
use polimap_graphs::layout::{LayoutParams, Orientation, Point, Viewport, compute_layout_with};
use polimap_graphs::report::AnalysisReport;

use crate::mock;

/// Everything a renderer needs to draw one analysis: the report header,
/// the built graph, and a position for every node.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisView {
    pub subject: String,
    pub report_title: String,
    pub time_range: String,
    pub notes: String,
    pub viewport: Viewport,
    pub orientation: Orientation,
    pub graph: Graph,
    pub positions: BTreeMap<String, Point>,
}

/// Build the graph and layout for a report.
///
/// Orientation is derived from the viewport width and the configured
/// breakpoint; company listing symbols resolve through the known-symbol
/// table.
pub fn analyze_report(
    report: &AnalysisReport,
    subject: &str,
    viewport: Viewport,
    params: &LayoutParams,
) -> AnalysisView {
    let orientation = Orientation::for_width(viewport.width, params.breakpoint);
    let graph = build_graph_with_symbols(report, subject, &mock::known_symbols());
    let positions = compute_layout_with(&graph, viewport, orientation, params);

    info!(
        subject,
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        ?orientation,
        "analysis view composed"
    );

    AnalysisView {
        subject: subject.to_string(),
        report_title: report.report_title.clone(),
        time_range: report.time_range.clone(),
        notes: report.notes.clone(),
        viewport,
        orientation,
        graph,
        positions,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────
