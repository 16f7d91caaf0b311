//! Display List for alignment rendering
//!
//! This module defines the output structure returned from the composer to JavaScript.
//! The DisplayList contains the token rows with their classes and data attributes,
//! the pre-computed ribbons and the label panel, so JavaScript only has to map
//! it onto DOM/SVG elements.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::curves::RenderRibbon;
use crate::interaction::LayerTab;
use crate::models::{LayerType, TokenSide};

/// Everything needed to draw one sentence pair in its current state
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayList {
    pub sentence_pair_id: String,

    pub active_layer: LayerType,

    /// Layer tab list, in declared order
    pub layers: Vec<LayerTab>,

    pub source: RenderSentence,
    pub target: RenderSentence,

    /// One ribbon per renderable alignment of the active layer
    pub ribbons: Vec<RenderRibbon>,

    /// Number of alignments in the active layer (renderable or not)
    pub alignment_count: usize,

    /// Labels of the highlighted alignments; empty while nothing is hovered
    #[serde(default)]
    pub labels: Vec<RenderLabel>,
}

/// One token row with its header
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderSentence {
    pub side: TokenSide,

    /// Upper-cased language code shown above the row ("EU", "EN")
    pub language_label: String,

    /// Full sentence text
    pub text: String,

    pub tokens: Vec<RenderToken>,
}

/// A single token with all rendering information
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderToken {
    pub id: String,

    /// Surface form to display
    pub form: String,

    pub side: TokenSide,

    pub highlighted: bool,
    pub dimmed: bool,

    /// CSS class names to apply
    pub classes: Vec<String>,

    /// Data attributes (data-* attributes)
    pub dataset: HashMap<String, String>,
}

/// An entry of the alignment label panel
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderLabel {
    pub alignment_index: usize,
    pub label: String,

    /// Active layer colour, used for the marker and border
    pub color: String,
}
