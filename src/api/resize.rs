//! Window resize subscription
//!
//! The listener lives exactly as long as the subscription value: dropping it
//! removes the listener and frees the closure.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::VisualizerError;

pub struct ResizeSubscription {
    window: Window,
    closure: Closure<dyn FnMut()>,
}

impl ResizeSubscription {
    pub fn subscribe<F: FnMut() + 'static>(callback: F) -> Result<Self, VisualizerError> {
        let window = web_sys::window().ok_or_else(|| VisualizerError::Dom("no global window".to_string()))?;
        let closure = Closure::<dyn FnMut()>::new(callback);

        window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .map_err(|e| VisualizerError::Dom(format!("failed to add resize listener: {:?}", e)))?;

        Ok(Self { window, closure })
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("resize", self.closure.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove resize listener: {:?}", e);
        }
    }
}
