//! Analysis layers and their presentation
//!
//! The layer set is closed: every layer identifier the renderer can hold is
//! one of the variants below, in declared order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::VisualizerError;

/// One analysis dimension over which alignments are defined
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LayerType {
    Lexical,
    GrammaticalRelations,
    Features,
}

impl LayerType {
    /// All layers in declared (tab) order
    pub const ALL: [LayerType; 3] = [
        LayerType::Lexical,
        LayerType::GrammaticalRelations,
        LayerType::Features,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayerType::Lexical => "lexical",
            LayerType::GrammaticalRelations => "grammatical_relations",
            LayerType::Features => "features",
        }
    }

    /// Position in declared order
    pub fn index(&self) -> usize {
        match self {
            LayerType::Lexical => 0,
            LayerType::GrammaticalRelations => 1,
            LayerType::Features => 2,
        }
    }

    pub fn config(&self) -> &'static LayerConfig {
        &LAYER_CONFIGS[self.index()]
    }
}

impl Default for LayerType {
    fn default() -> Self {
        LayerType::ALL[0]
    }
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayerType {
    type Err = VisualizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LayerType::ALL
            .iter()
            .copied()
            .find(|layer| layer.as_str() == s)
            .ok_or_else(|| VisualizerError::UnknownLayer(s.to_string()))
    }
}

/// Colours and translation keys for a layer tab and its ribbons
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LayerConfig {
    pub layer: LayerType,

    /// Translation key of the tab caption
    pub display_name: &'static str,

    /// Translation key of the one-line layer description
    pub tooltip: &'static str,

    /// Ribbon stroke and active tab background
    pub color: &'static str,

    /// `color` at ~12% opacity composited over the page background
    pub color_light: &'static str,
}

pub static LAYER_CONFIGS: [LayerConfig; 3] = [
    LayerConfig {
        layer: LayerType::Lexical,
        display_name: "layer.lexical",
        tooltip: "layer.lexical_tooltip",
        color: "#3a634b",
        color_light: "#e5e5de",
    },
    LayerConfig {
        layer: LayerType::GrammaticalRelations,
        display_name: "layer.grammatical_relations",
        tooltip: "layer.grammatical_relations_tooltip",
        color: "#7b4fa5",
        color_light: "#ede3e9",
    },
    LayerConfig {
        layer: LayerType::Features,
        display_name: "layer.features",
        tooltip: "layer.features_tooltip",
        color: "#92400e",
        color_light: "#f0e1d6",
    },
];
