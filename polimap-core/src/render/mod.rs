//! Rendering contracts: per-kind presentation tables and the static
//! SVG renderer.

pub mod style;
pub mod svg;
