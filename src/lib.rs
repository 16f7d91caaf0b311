//! Translation Alignment Visualizer WASM Module
//!
//! Renders token-level alignments between a sentence and its translation as
//! ribbons between two token rows, with hover highlighting and switchable
//! analysis layers.

pub mod models;
pub mod config;
pub mod error;
pub mod interaction;
pub mod html_layout;
pub mod api;

// Re-export commonly used types
pub use config::VisualizerConfig;
pub use error::VisualizerError;
pub use models::*;
pub use interaction::{compute_highlight, HighlightState, LayerNavigation, LayerSelector};
pub use html_layout::{AlignmentView, DisplayList, GeometryProvider, GeometrySnapshot, TokenPosition};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::warn_1(&format!("Logger already initialized: {}", e).into());
        }
    }

    log::info!("Alignment visualizer WASM module initialized");
}
