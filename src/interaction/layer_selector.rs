//! Layer selection and keyboard navigation
//!
//! The selector is a pure state machine over the closed layer set. Key
//! handling only translates key names into navigation requests; the
//! transition itself is independent of any input device.

use serde::{Deserialize, Serialize};

use crate::models::LayerType;

/// Direction for cyclic navigation through the declared layer order
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CycleDirection {
    Next,
    Previous,
}

/// A layer change request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerNavigation {
    Select(LayerType),
    Cycle(CycleDirection),
    First,
    Last,
}

impl LayerNavigation {
    /// Map a `KeyboardEvent.key` value onto a navigation request
    ///
    /// Returns `None` for keys the tab list does not handle, in which case the
    /// host should let the event propagate.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" | "ArrowDown" => Some(LayerNavigation::Cycle(CycleDirection::Next)),
            "ArrowLeft" | "ArrowUp" => Some(LayerNavigation::Cycle(CycleDirection::Previous)),
            "Home" => Some(LayerNavigation::First),
            "End" => Some(LayerNavigation::Last),
            _ => None,
        }
    }
}

/// Currently active layer
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayerSelector {
    active: LayerType,
}

impl LayerSelector {
    pub fn new(default_layer: LayerType) -> Self {
        Self { active: default_layer }
    }

    pub fn active(&self) -> LayerType {
        self.active
    }

    pub fn select(&mut self, layer: LayerType) -> LayerType {
        self.active = layer;
        self.active
    }

    /// Move to the next/previous layer, wrapping at both ends
    pub fn cycle(&mut self, direction: CycleDirection) -> LayerType {
        let count = LayerType::ALL.len();
        let current = self.active.index();
        let next = match direction {
            CycleDirection::Next => (current + 1) % count,
            CycleDirection::Previous => (current + count - 1) % count,
        };
        self.select(LayerType::ALL[next])
    }

    pub fn jump_to_first(&mut self) -> LayerType {
        self.select(LayerType::ALL[0])
    }

    pub fn jump_to_last(&mut self) -> LayerType {
        self.select(LayerType::ALL[LayerType::ALL.len() - 1])
    }

    pub fn navigate(&mut self, navigation: LayerNavigation) -> LayerType {
        match navigation {
            LayerNavigation::Select(layer) => self.select(layer),
            LayerNavigation::Cycle(direction) => self.cycle(direction),
            LayerNavigation::First => self.jump_to_first(),
            LayerNavigation::Last => self.jump_to_last(),
        }
    }
}

/// One entry of the layer tab list
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LayerTab {
    pub layer: LayerType,
    pub display_name: String,
    pub tooltip: String,
    pub color: String,
    pub color_light: String,
    pub active: bool,

    /// Roving tabindex: only the active tab is reachable with Tab
    pub tab_index: i32,
}

/// Tab descriptors for every layer, in declared order
pub fn layer_tabs(active: LayerType) -> Vec<LayerTab> {
    LayerType::ALL
        .iter()
        .map(|layer| {
            let config = layer.config();
            let is_active = *layer == active;
            LayerTab {
                layer: *layer,
                display_name: config.display_name.to_string(),
                tooltip: config.tooltip.to_string(),
                color: config.color.to_string(),
                color_light: config.color_light.to_string(),
                active: is_active,
                tab_index: if is_active { 0 } else { -1 },
            }
        })
        .collect()
}
