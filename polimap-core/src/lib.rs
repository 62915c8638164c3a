//! Polimap core library — report fetching, analysis pipeline, and
//! rendering contracts.
//!
//! The main entry point is [`pipeline::analyze_report`], which composes
//! the graph builder and layout engine from `polimap-graphs` into an
//! [`pipeline::AnalysisView`] ready for a renderer. [`fetch::ReportClient`]
//! obtains reports from the analysis service; [`mock`] supplies the
//! built-in fixture report for offline use.

pub mod config;
pub mod error;
pub mod fetch;
pub mod mock;
pub mod pipeline;
pub mod render;

pub use error::{PolimapError, Result};
pub use polimap_graphs::layout::{LayoutParams, Orientation, Point, Viewport};
pub use polimap_graphs::report::{AnalysisReport, ChainRecord};
pub use polimap_graphs::{Edge, Evidence, Graph, Node, NodeData, NodeKind};
