//! User interaction state
//!
//! Pure state transitions driven by hover/focus events and layer navigation.

pub mod highlight;
pub mod layer_selector;

pub use highlight::{compute_highlight, HighlightState};
pub use layer_selector::{layer_tabs, CycleDirection, LayerNavigation, LayerSelector, LayerTab};
