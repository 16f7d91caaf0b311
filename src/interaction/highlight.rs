//! Hover/focus highlighting
//!
//! Highlighting is one hop over the bipartite token↔alignment graph: the
//! hovered token, every alignment of the active layer that touches it on the
//! hovered side, and every token on both sides of those alignments. Partner
//! tokens' other alignments are not followed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::{Alignment, TokenSide};

/// Tokens and alignments to emphasize; everything else is dimmed
///
/// Alignment indices refer to the active layer only, so the state must be
/// cleared on every layer or sentence pair change.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct HighlightState {
    pub highlighted_token_ids: BTreeSet<String>,
    pub highlighted_alignment_indices: BTreeSet<usize>,
}

impl HighlightState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.highlighted_token_ids.clear();
        self.highlighted_alignment_indices.clear();
    }

    /// Nothing is hovered
    pub fn is_empty(&self) -> bool {
        self.highlighted_token_ids.is_empty()
    }

    pub fn is_token_highlighted(&self, token_id: &str) -> bool {
        self.highlighted_token_ids.contains(token_id)
    }

    /// Something else is hovered and this token is not part of it
    pub fn is_token_dimmed(&self, token_id: &str) -> bool {
        !self.is_empty() && !self.is_token_highlighted(token_id)
    }

    pub fn is_alignment_highlighted(&self, index: usize) -> bool {
        self.highlighted_alignment_indices.contains(&index)
    }

    /// Some alignment is highlighted and this one is not
    pub fn is_alignment_dimmed(&self, index: usize) -> bool {
        !self.highlighted_alignment_indices.is_empty() && !self.is_alignment_highlighted(index)
    }
}

/// Compute the highlight for `token_id` hovered on `side`
///
/// The hovered token is always included, even when it takes part in no
/// alignment of the layer.
pub fn compute_highlight(layer_alignments: &[Alignment], token_id: &str, side: TokenSide) -> HighlightState {
    let mut state = HighlightState::new();
    state.highlighted_token_ids.insert(token_id.to_string());

    for (index, alignment) in layer_alignments.iter().enumerate() {
        if !alignment.touches(token_id, side) {
            continue;
        }

        state.highlighted_alignment_indices.insert(index);
        state
            .highlighted_token_ids
            .extend(alignment.source_token_ids.iter().chain(&alignment.target_token_ids).cloned());
    }

    state
}
