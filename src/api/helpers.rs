//! Shared helpers for WASM API operations
//!
//! This module contains common patterns for console logging, serialization and
//! deserialization across all API operations.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::VisualizerError;
use crate::models::TokenSide;

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error logging
pub fn deserialize<T: DeserializeOwned>(value: JsValue, context: &str) -> Result<T, VisualizerError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let err = VisualizerError::Deserialize {
            context: context.to_string(),
            message: e.to_string(),
        };
        log_error(&err.to_string());
        err
    })
}

/// Like [`deserialize`], but `undefined`/`null` yield the type's default
pub fn deserialize_or_default<T: DeserializeOwned + Default>(
    value: JsValue,
    context: &str,
) -> Result<T, VisualizerError> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    deserialize(value, context)
}

/// Serialize a value to JavaScript with automatic error logging
///
/// Maps become plain objects rather than `Map` instances so the display list
/// can be spread straight into element attributes.
pub fn serialize<T: Serialize>(value: &T, context: &str) -> Result<JsValue, VisualizerError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| {
            let err = VisualizerError::Serialize {
                context: context.to_string(),
                message: e.to_string(),
            };
            log_error(&err.to_string());
            err
        })
}

// ============================================================================
// Validation Helpers
// ============================================================================

/// Parse a token side coming from JavaScript
pub fn parse_side(value: &str) -> Result<TokenSide, VisualizerError> {
    TokenSide::parse(value).ok_or_else(|| {
        let err = VisualizerError::UnknownSide(value.to_string());
        log_error(&err.to_string());
        err
    })
}
