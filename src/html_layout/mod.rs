//! HTML Layout Engine
//!
//! This module measures the rendered token rows, computes the ribbon curves
//! between them and composes a DisplayList with everything JavaScript needs
//! to draw the current state.

pub mod geometry;
pub mod dom_geometry;
pub mod curves;
pub mod display_list;
pub mod composer;

pub use geometry::{GeometryProvider, GeometrySnapshot, MeasuredToken, PositionMap, Rect, StaticGeometry, TokenPosition};
pub use dom_geometry::DomGeometry;
pub use curves::{CurveCache, CurveRenderer, RenderRibbon, RibbonStyle};
pub use display_list::{DisplayList, RenderLabel, RenderSentence, RenderToken};
pub use composer::AlignmentView;
