// Closed-set presentation lookup tables: node kind → color and shape.
// These are part of the output contract so any renderer draws the four
// tiers consistently.

use polimap_graphs::NodeKind;

/// Shape drawn for a node, by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    Ellipse,
    Rect,
    RoundedRect,
    Pentagon,
}

pub fn node_color(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Input => "#6366f1",
        NodeKind::Policy => "#0ea5e9",
        NodeKind::Sector => "#10b981",
        NodeKind::Enterprise => "#f59e0b",
    }
}

pub fn node_shape(kind: NodeKind) -> NodeShape {
    match kind {
        NodeKind::Input => NodeShape::Ellipse,
        NodeKind::Policy => NodeShape::Rect,
        NodeKind::Sector => NodeShape::RoundedRect,
        NodeKind::Enterprise => NodeShape::Pentagon,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────
