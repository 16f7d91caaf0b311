//! JavaScript-facing alignment visualizer
//!
//! Wraps an [`AlignmentView`] bound to a DOM container. JavaScript renders the
//! token rows from `displayList()`, calls `measure()` once the rows are laid
//! out, and forwards hover/focus and layer events.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::helpers::{deserialize, deserialize_or_default, parse_side, serialize};
use super::resize::ResizeSubscription;
use crate::config::VisualizerConfig;
use crate::error::VisualizerError;
use crate::html_layout::{AlignmentView, DomGeometry, StaticGeometry};
use crate::interaction::LayerNavigation;
use crate::models::{LayerType, SentencePair};
use crate::{wasm_error, wasm_info, wasm_log, wasm_warn};

struct VisualizerState {
    view: AlignmentView,
    geometry: DomGeometry,
}

#[wasm_bindgen]
pub struct AlignmentVisualizer {
    state: Rc<RefCell<VisualizerState>>,
    resize: Option<ResizeSubscription>,
}

#[wasm_bindgen]
impl AlignmentVisualizer {
    /// Create a visualizer for `container`
    ///
    /// `config` may be omitted; missing fields take their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(container: Element, sentence_pair: JsValue, config: JsValue) -> Result<AlignmentVisualizer, JsValue> {
        let pair: SentencePair = deserialize(sentence_pair, "sentence pair")?;
        let config: VisualizerConfig = deserialize_or_default(config, "visualizer config")?;

        wasm_info!(
            "AlignmentVisualizer created: pair={}, default layer={}",
            pair.id,
            config.default_layer
        );

        Ok(AlignmentVisualizer {
            state: Rc::new(RefCell::new(VisualizerState {
                view: AlignmentView::new(pair, config),
                geometry: DomGeometry::new(container),
            })),
            resize: None,
        })
    }

    #[wasm_bindgen(js_name = setSentencePair)]
    pub fn set_sentence_pair(&self, sentence_pair: JsValue) -> Result<(), JsValue> {
        let pair: SentencePair = deserialize(sentence_pair, "sentence pair")?;
        self.state.borrow_mut().view.set_sentence_pair(pair);
        Ok(())
    }

    /// Re-read token positions from the DOM; call after the rows are laid out
    pub fn measure(&self) {
        let mut state = self.state.borrow_mut();
        let VisualizerState { view, geometry } = &mut *state;
        view.remeasure(&*geometry);
    }

    /// Use host-supplied rectangles instead of reading the DOM
    #[wasm_bindgen(js_name = measureWith)]
    pub fn measure_with(&self, snapshot: JsValue) -> Result<(), JsValue> {
        let geometry: StaticGeometry = deserialize(snapshot, "token measurements")?;
        self.state.borrow_mut().view.remeasure(&geometry);
        Ok(())
    }

    #[wasm_bindgen(js_name = hoverToken)]
    pub fn hover_token(&self, token_id: &str, side: &str) -> Result<(), JsValue> {
        let side = parse_side(side)?;
        self.state.borrow_mut().view.hover(token_id, side);
        Ok(())
    }

    /// Keyboard focus highlights exactly like hover
    #[wasm_bindgen(js_name = focusToken)]
    pub fn focus_token(&self, token_id: &str, side: &str) -> Result<(), JsValue> {
        self.hover_token(token_id, side)
    }

    #[wasm_bindgen(js_name = leaveToken)]
    pub fn leave_token(&self) {
        self.state.borrow_mut().view.leave();
    }

    /// Activate a layer by name; unknown names are rejected
    #[wasm_bindgen(js_name = selectLayer)]
    pub fn select_layer(&self, name: &str) -> Result<String, JsValue> {
        let layer: LayerType = name.parse().map_err(|e: VisualizerError| {
            wasm_error!("{}", e);
            JsValue::from(e)
        })?;
        Ok(self.state.borrow_mut().view.select_layer(layer).to_string())
    }

    /// Handle a key press on the layer tab list
    ///
    /// Returns true when the key was consumed (the host should call
    /// `preventDefault`).
    #[wasm_bindgen(js_name = handleLayerKey)]
    pub fn handle_layer_key(&self, key: &str) -> bool {
        match LayerNavigation::from_key(key) {
            Some(navigation) => {
                let layer = self.state.borrow_mut().view.navigate_layer(navigation);
                wasm_log!("Layer key {} -> {}", key, layer);
                true
            }
            None => false,
        }
    }

    #[wasm_bindgen(js_name = activeLayer)]
    pub fn active_layer(&self) -> String {
        self.state.borrow().view.active_layer().to_string()
    }

    pub fn highlight(&self) -> Result<JsValue, JsValue> {
        Ok(serialize(self.state.borrow().view.highlight(), "highlight state")?)
    }

    #[wasm_bindgen(js_name = displayList)]
    pub fn display_list(&self) -> Result<JsValue, JsValue> {
        let display_list = self.state.borrow_mut().view.display_list();
        Ok(serialize(&display_list, "display list")?)
    }

    /// Re-measure on every window resize until unsubscribed or freed
    ///
    /// `on_change` is invoked after each re-measurement so the host can redraw.
    #[wasm_bindgen(js_name = subscribeResize)]
    pub fn subscribe_resize(&mut self, on_change: Option<Function>) -> Result<(), JsValue> {
        // Replacing drops (and detaches) any previous listener
        self.resize = None;

        let state = Rc::clone(&self.state);
        let subscription = ResizeSubscription::subscribe(move || {
            let Ok(mut guard) = state.try_borrow_mut() else {
                wasm_warn!("Resize while visualizer busy; skipping measurement");
                return;
            };
            let VisualizerState { view, geometry } = &mut *guard;
            view.remeasure(&*geometry);
            drop(guard);

            if let Some(callback) = &on_change {
                if let Err(e) = callback.call0(&JsValue::NULL) {
                    wasm_error!("Resize callback failed: {:?}", e);
                }
            }
        })?;

        self.resize = Some(subscription);
        Ok(())
    }

    #[wasm_bindgen(js_name = unsubscribeResize)]
    pub fn unsubscribe_resize(&mut self) {
        self.resize = None;
    }
}

/// Stateless highlight computation over one layer's alignments
#[wasm_bindgen(js_name = computeHighlight)]
pub fn compute_highlight(alignments: JsValue, token_id: &str, side: &str) -> Result<JsValue, JsValue> {
    let alignments: Vec<crate::models::Alignment> = deserialize(alignments, "alignments")?;
    let side = parse_side(side)?;
    let state = crate::interaction::compute_highlight(&alignments, token_id, side);
    Ok(serialize(&state, "highlight state")?)
}

/// Stateless ribbon construction; returns `undefined` when unrenderable
///
/// `config` follows the same shape as the visualizer constructor; `undefined`
/// or `null` selects the defaults.
#[wasm_bindgen(js_name = buildRibbon)]
pub fn build_ribbon(
    alignment: JsValue,
    source_positions: JsValue,
    target_positions: JsValue,
    is_highlighted: bool,
    is_dimmed: bool,
    layer: &str,
    config: JsValue,
) -> Result<JsValue, JsValue> {
    let alignment: crate::models::Alignment = deserialize(alignment, "alignment")?;
    let source: crate::html_layout::PositionMap = deserialize(source_positions, "source positions")?;
    let target: crate::html_layout::PositionMap = deserialize(target_positions, "target positions")?;
    let layer: LayerType = layer.parse()?;
    let config: VisualizerConfig = deserialize_or_default(config, "visualizer config")?;

    let renderer = crate::html_layout::CurveRenderer::new(config);
    match renderer.build_curve(0, &alignment, &source, &target, is_highlighted, is_dimmed, layer.config().color) {
        Some(ribbon) => Ok(serialize(&ribbon, "ribbon")?),
        None => Ok(JsValue::UNDEFINED),
    }
}

/// Tab descriptors for a layer picker with `active` selected
#[wasm_bindgen(js_name = layerTabs)]
pub fn layer_tabs(active: &str) -> Result<JsValue, JsValue> {
    let active: LayerType = active.parse()?;
    Ok(serialize(&crate::interaction::layer_tabs(active), "layer tabs")?)
}
