// Layered layout for built influence graphs.
//
// The four tiers become four columns (side-by-side) or four rows
// (stacked, for narrow viewports). Layout is a pure function of
// (graph, viewport, params, orientation): no randomness, no persisted
// state, recomputed in full on every call. Callers re-invoke it when
// the graph, viewport, or orientation changes.
#![allow(clippy::cast_precision_loss)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Graph, NodeKind};

/// Drawing surface dimensions, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Tier arrangement, selected by viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    /// Four vertical columns spanning the viewport width.
    SideBySide,
    /// Four horizontal rows, for narrow viewports.
    Stacked,
}

impl Orientation {
    /// Pick the orientation for a viewport width: below the breakpoint
    /// tiers stack into rows.
    pub fn for_width(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            Self::Stacked
        } else {
            Self::SideBySide
        }
    }
}

/// Tunable layout constants. The stacked padding is smaller because
/// row labels need less room than column labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutParams {
    /// Width below which the stacked orientation is used.
    pub breakpoint: f64,
    pub padding_side_by_side: f64,
    pub padding_stacked: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            breakpoint: 768.0,
            padding_side_by_side: 80.0,
            padding_stacked: 40.0,
        }
    }
}

impl LayoutParams {
    pub fn padding(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::SideBySide => self.padding_side_by_side,
            Orientation::Stacked => self.padding_stacked,
        }
    }
}

/// A node position on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Center of a tier's band along the tier axis: the column center x in
/// side-by-side, the row center y in stacked. Used for tier labels.
pub fn tier_axis_center(
    kind: NodeKind,
    viewport: Viewport,
    orientation: Orientation,
    params: &LayoutParams,
) -> f64 {
    let padding = params.padding(orientation);
    let extent = match orientation {
        Orientation::SideBySide => viewport.width,
        Orientation::Stacked => viewport.height,
    };
    let band = (extent - padding * 2.0) / NodeKind::ALL.len() as f64;
    padding + band * (kind.tier() as f64 + 0.5)
}

/// Compute positions for every node of `graph` with default parameters.
pub fn compute_layout(
    graph: &Graph,
    viewport: Viewport,
    orientation: Orientation,
) -> BTreeMap<String, Point> {
    compute_layout_with(graph, viewport, orientation, &LayoutParams::default())
}

/// Compute positions for every node of `graph`.
///
/// Each tier occupies its band center along the tier axis; within a
/// tier, the `k` nodes are spread along the full cross axis at the
/// fractional offsets `(i + 1) / (k + 1)`. A tier of one node therefore
/// sits at the exact cross-axis midpoint — the input tier always has
/// exactly one node, so the subject lands at center. Empty tiers
/// contribute nothing and do not affect other tiers.
pub fn compute_layout_with(
    graph: &Graph,
    viewport: Viewport,
    orientation: Orientation,
    params: &LayoutParams,
) -> BTreeMap<String, Point> {
    let mut positions = BTreeMap::new();

    for kind in NodeKind::ALL {
        let ids = graph.ids_of_kind(kind);
        if ids.is_empty() {
            continue;
        }

        let along = tier_axis_center(kind, viewport, orientation, params);
        let cross_extent = match orientation {
            Orientation::SideBySide => viewport.height,
            Orientation::Stacked => viewport.width,
        };
        let spacing = cross_extent / (ids.len() + 1) as f64;

        debug!(
            kind = ?kind,
            nodes = ids.len(),
            ?orientation,
            "placing tier"
        );

        for (i, id) in ids.iter().enumerate() {
            let cross = spacing * (i + 1) as f64;
            let point = match orientation {
                Orientation::SideBySide => Point { x: along, y: cross },
                Orientation::Stacked => Point { x: cross, y: along },
            };
            positions.insert((*id).to_string(), point);
        }
    }

    positions
}

// ── Tests ─────────────────────────────────────────────────────────────
