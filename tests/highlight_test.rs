// Hover highlighting through the composer and the pure highlight function

mod common;

use xingolak_wasm::{compute_highlight, AlignmentView, LayerType, TokenSide, VisualizerConfig};

fn sorted_ids(view: &AlignmentView) -> Vec<String> {
    view.highlight().highlighted_token_ids.iter().cloned().collect()
}

#[test]
fn test_hover_aligned_token_lights_partner() {
    let mut view = AlignmentView::new(common::pair("cat"), VisualizerConfig::default());
    view.hover("s2", TokenSide::Source);

    assert_eq!(sorted_ids(&view), vec!["s2", "t1"]);
    assert_eq!(view.highlight().highlighted_alignment_indices.iter().copied().collect::<Vec<_>>(), vec![0]);
}

#[test]
fn test_hover_unaligned_token_lights_only_itself() {
    let mut view = AlignmentView::new(common::pair("cat"), VisualizerConfig::default());
    view.hover("s1", TokenSide::Source);

    assert_eq!(sorted_ids(&view), vec!["s1"]);
    assert!(view.highlight().highlighted_alignment_indices.is_empty());
}

#[test]
fn test_single_partner_alignment_sizes() {
    let pair = common::pair("cat");
    let state = compute_highlight(pair.alignments(LayerType::Lexical), "t1", TokenSide::Target);
    assert_eq!(state.highlighted_token_ids.len(), 2);
    assert_eq!(state.highlighted_alignment_indices.len(), 1);
}

#[test]
fn test_fan_out_to_three_targets() {
    let pair = common::pair("house");
    let state = compute_highlight(pair.alignments(LayerType::Lexical), "s1", TokenSide::Source);
    for id in ["t3", "t4", "t5"] {
        assert!(state.is_token_highlighted(id), "{} should be highlighted", id);
    }
    assert!(!state.is_token_highlighted("t2"));
}

#[test]
fn test_hovered_token_always_included() {
    for pair in common::fixture().sentences {
        for layer in LayerType::ALL {
            for side in [TokenSide::Source, TokenSide::Target] {
                for token in &pair.sentence(side).tokens {
                    let state = compute_highlight(pair.alignments(layer), &token.id, side);
                    assert!(state.is_token_highlighted(&token.id));
                }
            }
        }
    }
}

#[test]
fn test_highlight_never_crosses_layers() {
    let pair = common::pair("house");
    for layer in LayerType::ALL {
        let alignments = pair.alignments(layer);
        let state = compute_highlight(alignments, "s3", TokenSide::Source);
        assert!(state.highlighted_alignment_indices.iter().all(|&i| i < alignments.len()));
    }
}

#[test]
fn test_latest_hover_wins() {
    let mut view = AlignmentView::new(common::pair("house"), VisualizerConfig::default());
    view.hover("s1", TokenSide::Source);
    view.hover("t2", TokenSide::Target);

    assert_eq!(sorted_ids(&view), vec!["s2", "s3", "t2"]);
    assert!(!view.highlight().is_token_highlighted("t5"));
}

#[test]
fn test_leave_clears() {
    let mut view = AlignmentView::new(common::pair("house"), VisualizerConfig::default());
    view.hover("s1", TokenSide::Source);
    view.leave();
    assert!(view.highlight().is_empty());
    assert!(view.highlight().highlighted_alignment_indices.is_empty());
}

#[test]
fn test_new_sentence_pair_clears_highlight() {
    let mut view = AlignmentView::new(common::pair("house"), VisualizerConfig::default());
    view.hover("s1", TokenSide::Source);
    view.set_sentence_pair(common::pair("cat"));
    assert!(view.highlight().is_empty());
    assert_eq!(view.sentence_pair().id, "cat");
}
