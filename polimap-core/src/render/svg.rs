// Static SVG renderer for an analysis view.
//
// Draws the diagram the interactive front-end would: tier labels, edge
// lines with an evidence marker at each midpoint, and per-kind node
// shapes with centered, truncated labels. Shape geometry matches the
// interactive renderer so the two stay visually interchangeable.

use std::fmt::Write;

use polimap_graphs::layout::{LayoutParams, Orientation, Point, tier_axis_center};
use polimap_graphs::{Node, NodeKind};

use super::style::{NodeShape, node_color, node_shape};
use crate::pipeline::AnalysisView;

const EDGE_STROKE: &str = "#d1d5db";
const MARKER_FILL: &str = "#e5e7eb";
const NODE_STROKE: &str = "#ffffff";
const TIER_LABEL_FILL: &str = "#6b7280";

/// Maximum label characters before truncation, per orientation.
fn label_limit(orientation: Orientation) -> usize {
    match orientation {
        Orientation::SideBySide => 12,
        Orientation::Stacked => 8,
    }
}

/// Node shapes shrink in stacked mode to fit narrow rows.
fn shape_scale(orientation: Orientation) -> f64 {
    match orientation {
        Orientation::SideBySide => 1.0,
        Orientation::Stacked => 0.7,
    }
}

/// Render the view as a standalone SVG document.
pub fn render_svg(view: &AnalysisView, params: &LayoutParams) -> String {
    let mut out = String::new();
    let (w, h) = (view.viewport.width, view.viewport.height);

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.0} {h:.0}">"#
    )
    .unwrap();
    writeln!(
        out,
        r##"  <rect width="{w:.0}" height="{h:.0}" fill="#ffffff"/>"##
    )
    .unwrap();

    write_tier_labels(&mut out, view, params);
    write_edges(&mut out, view);
    write_nodes(&mut out, view);

    writeln!(out, "</svg>").unwrap();
    out
}

fn write_tier_labels(out: &mut String, view: &AnalysisView, params: &LayoutParams) {
    writeln!(out, r#"  <g class="tier-labels">"#).unwrap();
    for kind in NodeKind::ALL {
        if view.graph.count_of_kind(kind) == 0 {
            continue;
        }
        let along = tier_axis_center(kind, view.viewport, view.orientation, params);
        let (x, y) = match view.orientation {
            Orientation::SideBySide => (along, 24.0),
            Orientation::Stacked => (view.viewport.width / 2.0, along - 60.0),
        };
        writeln!(
            out,
            r#"    <text x="{x:.1}" y="{y:.1}" text-anchor="middle" font-size="13" fill="{TIER_LABEL_FILL}">{}</text>"#,
            xml_escape(kind.category_label())
        )
        .unwrap();
    }
    writeln!(out, "  </g>").unwrap();
}

fn write_edges(out: &mut String, view: &AnalysisView) {
    writeln!(out, r#"  <g class="edges">"#).unwrap();
    for edge in &view.graph.edges {
        let (Some(source), Some(target)) = (
            view.positions.get(&edge.source),
            view.positions.get(&edge.target),
        ) else {
            continue;
        };

        writeln!(
            out,
            r#"    <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{EDGE_STROKE}" stroke-width="2"/>"#,
            source.x, source.y, target.x, target.y
        )
        .unwrap();

        // Evidence marker at the edge midpoint, with citation titles as
        // hover text.
        if !edge.data.evidence.is_empty() {
            let mx = (source.x + target.x) / 2.0;
            let my = (source.y + target.y) / 2.0;
            let titles: Vec<&str> = edge
                .data
                .evidence
                .iter()
                .map(|e| e.source_title.as_str())
                .collect();
            writeln!(
                out,
                r#"    <circle cx="{mx:.1}" cy="{my:.1}" r="8" fill="{MARKER_FILL}" stroke="{EDGE_STROKE}" stroke-width="2"><title>{}</title></circle>"#,
                xml_escape(&titles.join(", "))
            )
            .unwrap();
        }
    }
    writeln!(out, "  </g>").unwrap();
}

fn write_nodes(out: &mut String, view: &AnalysisView) {
    let scale = shape_scale(view.orientation);
    let limit = label_limit(view.orientation);

    writeln!(out, r#"  <g class="nodes">"#).unwrap();
    for node in &view.graph.nodes {
        let Some(pos) = view.positions.get(&node.id) else {
            continue;
        };

        writeln!(out, r#"    <g class="node">"#).unwrap();
        write_shape(out, node, *pos, scale);
        writeln!(
            out,
            r##"      <text x="{:.1}" y="{:.1}" text-anchor="middle" dominant-baseline="middle" font-size="12" fill="#ffffff">{}</text>"##,
            pos.x,
            pos.y,
            xml_escape(&truncate_label(&node.label, limit))
        )
        .unwrap();
        writeln!(out, "    </g>").unwrap();
    }
    writeln!(out, "  </g>").unwrap();
}

fn write_shape(out: &mut String, node: &Node, pos: Point, scale: f64) {
    let color = node_color(node.kind());
    let (x, y) = (pos.x, pos.y);

    match node_shape(node.kind()) {
        NodeShape::Ellipse => {
            writeln!(
                out,
                r#"      <ellipse cx="{x:.1}" cy="{y:.1}" rx="{:.1}" ry="{:.1}" fill="{color}" stroke="{NODE_STROKE}" stroke-width="2"/>"#,
                60.0 * scale,
                40.0 * scale
            )
            .unwrap();
        }
        NodeShape::Rect => {
            writeln!(
                out,
                r#"      <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{color}" stroke="{NODE_STROKE}" stroke-width="2"/>"#,
                x - 60.0 * scale,
                y - 35.0 * scale,
                120.0 * scale,
                70.0 * scale
            )
            .unwrap();
        }
        NodeShape::RoundedRect => {
            writeln!(
                out,
                r#"      <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" rx="{:.1}" fill="{color}" stroke="{NODE_STROKE}" stroke-width="2"/>"#,
                x - 60.0 * scale,
                y - 35.0 * scale,
                120.0 * scale,
                70.0 * scale,
                12.0 * scale
            )
            .unwrap();
        }
        NodeShape::Pentagon => {
            let points = [
                (x, y - 40.0 * scale),
                (x + 50.0 * scale, y - 15.0 * scale),
                (x + 35.0 * scale, y + 35.0 * scale),
                (x - 35.0 * scale, y + 35.0 * scale),
                (x - 50.0 * scale, y - 15.0 * scale),
            ]
            .iter()
            .map(|(px, py)| format!("{px:.1},{py:.1}"))
            .collect::<Vec<_>>()
            .join(" ");
            writeln!(
                out,
                r#"      <polygon points="{points}" fill="{color}" stroke="{NODE_STROKE}" stroke-width="2"/>"#
            )
            .unwrap();
        }
    }
}

fn truncate_label(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max).collect();
        format!("{head}...")
    }
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ── Tests ─────────────────────────────────────────────────────────────
