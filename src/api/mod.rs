//! Alignment Visualizer WASM API
//!
//! This module provides the JavaScript-facing API for the alignment visualizer.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, validation, error handling, and logging
//! - `resize`: Window resize subscription with deterministic teardown
//! - `visualizer`: The `AlignmentVisualizer` class and stateless helpers

pub mod helpers;
pub mod resize;
pub mod visualizer;

pub use visualizer::{build_ribbon, compute_highlight, layer_tabs, AlignmentVisualizer};
