//! Visualizer configuration
//!
//! Every field has a default so JavaScript may pass a partial object (or
//! nothing at all).

use serde::{Deserialize, Serialize};

use crate::models::LayerType;

/// Ribbon geometry and styling knobs
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct VisualizerConfig {
    /// Vertical distance of both Bézier control points from their endpoint (pixels)
    pub control_offset: f32,

    /// Ribbon stroke width (pixels)
    pub stroke_width: f32,

    /// Opacity of a ribbon touching the hovered token
    pub highlighted_opacity: f32,

    /// Opacity of the other ribbons while something is hovered
    pub dimmed_opacity: f32,

    /// Opacity of every ribbon while nothing is hovered
    pub normal_opacity: f32,

    /// Fraction of the path drawn for a highlighted ribbon
    pub highlighted_path_length: f32,

    /// Fraction of the path drawn for every other ribbon
    pub partial_path_length: f32,

    /// Layer shown when a visualizer is created
    pub default_layer: LayerType,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            control_offset: 60.0,
            stroke_width: 3.0,
            highlighted_opacity: 1.0,
            dimmed_opacity: 0.15,
            normal_opacity: 0.3,
            highlighted_path_length: 1.0,
            partial_path_length: 0.8,
            default_layer: LayerType::default(),
        }
    }
}
