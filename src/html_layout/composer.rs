//! Render composer
//!
//! Owns everything derived from the sentence pair on display: the active
//! layer, the hover highlight, the latest geometry snapshot and the ribbon
//! cache. Nothing outside this struct is mutated.

use super::curves::{CurveCache, CurveRenderer, RenderRibbon};
use super::display_list::{DisplayList, RenderLabel, RenderSentence, RenderToken};
use super::geometry::{GeometryProvider, GeometrySnapshot};
use crate::config::VisualizerConfig;
use crate::interaction::{compute_highlight, layer_tabs, HighlightState, LayerNavigation, LayerSelector};
use crate::models::{Alignment, LayerType, SentencePair, TokenSide};
use std::collections::HashMap;

pub struct AlignmentView {
    sentence_pair: SentencePair,
    selector: LayerSelector,
    highlight: HighlightState,
    geometry: GeometrySnapshot,
    renderer: CurveRenderer,
    cache: CurveCache,
}

impl AlignmentView {
    pub fn new(sentence_pair: SentencePair, config: VisualizerConfig) -> Self {
        Self {
            sentence_pair,
            selector: LayerSelector::new(config.default_layer),
            highlight: HighlightState::new(),
            geometry: GeometrySnapshot::default(),
            renderer: CurveRenderer::new(config),
            cache: CurveCache::new(),
        }
    }

    pub fn sentence_pair(&self) -> &SentencePair {
        &self.sentence_pair
    }

    pub fn active_layer(&self) -> LayerType {
        self.selector.active()
    }

    pub fn highlight(&self) -> &HighlightState {
        &self.highlight
    }

    pub fn geometry(&self) -> &GeometrySnapshot {
        &self.geometry
    }

    /// Alignments of the active layer
    pub fn active_alignments(&self) -> &[Alignment] {
        self.sentence_pair.alignments(self.selector.active())
    }

    /// Show a different sentence pair
    ///
    /// Geometry of the previous pair is meaningless for the new rows, so it is
    /// dropped until the host measures again. The active layer is kept.
    pub fn set_sentence_pair(&mut self, sentence_pair: SentencePair) {
        log::info!("Displaying sentence pair {}", sentence_pair.id);
        self.sentence_pair = sentence_pair;
        self.highlight.clear();
        self.geometry = GeometrySnapshot::default();
        self.cache.clear();
    }

    /// Replace the geometry with a fresh measurement
    ///
    /// Cached ribbons are keyed by anchor, so entries from the old geometry
    /// can never be hit again and are dropped.
    pub fn remeasure<P: GeometryProvider + ?Sized>(&mut self, provider: &P) {
        self.geometry = provider.measure(&self.sentence_pair.id);
        self.cache.clear();
    }

    /// Hover or focus on a token; replaces any previous highlight
    pub fn hover(&mut self, token_id: &str, side: TokenSide) {
        if token_id.is_empty() {
            self.leave();
            return;
        }

        self.highlight = compute_highlight(self.active_alignments(), token_id, side);
        log::debug!(
            "Hover {} ({}): {} tokens, {} alignments",
            token_id,
            side.as_str(),
            self.highlight.highlighted_token_ids.len(),
            self.highlight.highlighted_alignment_indices.len()
        );
    }

    pub fn leave(&mut self) {
        self.highlight.clear();
    }

    pub fn select_layer(&mut self, layer: LayerType) -> LayerType {
        self.navigate_layer(LayerNavigation::Select(layer))
    }

    /// Apply a layer transition; highlight indices belong to the old layer
    /// and are always discarded
    pub fn navigate_layer(&mut self, navigation: LayerNavigation) -> LayerType {
        let layer = self.selector.navigate(navigation);
        self.highlight.clear();
        self.cache.clear();
        log::debug!("Active layer: {}", layer);
        layer
    }

    /// Ribbons for every renderable alignment of the active layer
    pub fn ribbons(&mut self) -> Vec<RenderRibbon> {
        let layer = self.selector.active();
        let color = layer.config().color;
        let alignments = self.sentence_pair.alignments(layer);
        let mut ribbons = Vec::with_capacity(alignments.len());

        for (index, alignment) in alignments.iter().enumerate() {
            let ribbon = self.cache.get_or_build(
                &self.renderer,
                index,
                alignment,
                self.geometry.positions(TokenSide::Source),
                self.geometry.positions(TokenSide::Target),
                self.highlight.is_alignment_highlighted(index),
                self.highlight.is_alignment_dimmed(index),
                color,
            );

            match ribbon {
                Some(ribbon) => ribbons.push(ribbon),
                None if !self.sentence_pair.is_fully_referenced(alignment) => {
                    log::debug!("Skipping {} alignment {} with dangling token ids", layer, index);
                }
                None => {}
            }
        }

        ribbons
    }

    fn render_sentence(&self, side: TokenSide) -> RenderSentence {
        let sentence = self.sentence_pair.sentence(side);

        let tokens = sentence
            .tokens
            .iter()
            .map(|token| {
                let highlighted = self.highlight.is_token_highlighted(&token.id);
                let dimmed = self.highlight.is_token_dimmed(&token.id);

                let mut classes = vec!["token".to_string()];
                if highlighted {
                    classes.push("token--highlighted".to_string());
                }
                if dimmed {
                    classes.push("token--dimmed".to_string());
                }

                let mut dataset = HashMap::new();
                dataset.insert("data-token-id".to_string(), token.id.clone());
                dataset.insert("data-token-type".to_string(), side.as_str().to_string());

                RenderToken {
                    id: token.id.clone(),
                    form: token.form.clone(),
                    side,
                    highlighted,
                    dimmed,
                    classes,
                    dataset,
                }
            })
            .collect();

        RenderSentence {
            side,
            language_label: sentence.language.as_str().to_uppercase(),
            text: sentence.text.clone(),
            tokens,
        }
    }

    fn labels(&self) -> Vec<RenderLabel> {
        let layer = self.selector.active();
        let alignments = self.sentence_pair.alignments(layer);

        self.highlight
            .highlighted_alignment_indices
            .iter()
            .filter_map(|&index| {
                alignments.get(index).map(|alignment| RenderLabel {
                    alignment_index: index,
                    label: alignment.label.clone(),
                    color: layer.config().color.to_string(),
                })
            })
            .collect()
    }

    /// Compose the full view for the current state
    pub fn display_list(&mut self) -> DisplayList {
        let ribbons = self.ribbons();
        let layer = self.selector.active();

        DisplayList {
            sentence_pair_id: self.sentence_pair.id.clone(),
            active_layer: layer,
            layers: layer_tabs(layer),
            source: self.render_sentence(TokenSide::Source),
            target: self.render_sentence(TokenSide::Target),
            ribbons,
            alignment_count: self.sentence_pair.alignments(layer).len(),
            labels: self.labels(),
        }
    }
}
