//! Models module for the alignment visualizer
//!
//! This module contains the sentence pair data delivered by the backend
//! and the closed set of analysis layers.

pub mod alignment;
pub mod layer;

// Re-export commonly used types
pub use alignment::*;
pub use layer::{LayerConfig, LayerType, LAYER_CONFIGS};
