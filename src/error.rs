//! Error types for the WASM boundary
//!
//! The rendering core itself never fails: missing geometry and dangling token
//! references degrade silently. These errors only cover data crossing the
//! JavaScript boundary.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Error)]
pub enum VisualizerError {
    /// A value coming from JavaScript did not match the expected shape
    #[error("Failed to deserialize {context}: {message}")]
    Deserialize { context: String, message: String },

    /// A result could not be converted back into a JavaScript value
    #[error("Failed to serialize {context}: {message}")]
    Serialize { context: String, message: String },

    /// Layer name outside the closed layer set
    #[error("Unknown alignment layer: {0}")]
    UnknownLayer(String),

    /// Token side other than "source" or "target"
    #[error("Unknown token side: {0}")]
    UnknownSide(String),

    /// The browser environment is missing something we need
    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<VisualizerError> for JsValue {
    fn from(err: VisualizerError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
