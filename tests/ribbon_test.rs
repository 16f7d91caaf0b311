// Geometry and ribbon generation through the composer

mod common;

use xingolak_wasm::html_layout::{CurveRenderer, GeometryProvider, Rect, StaticGeometry};
use xingolak_wasm::{Alignment, AlignmentView, LayerType, TokenSide, VisualizerConfig};

fn measured_view(id: &str) -> AlignmentView {
    let pair = common::pair(id);
    let geometry = common::row_layout(&pair);
    let mut view = AlignmentView::new(pair, VisualizerConfig::default());
    view.remeasure(&geometry);
    view
}

#[test]
fn test_ribbon_endpoints_inside_container() {
    let mut view = measured_view("house");
    let bounds = view.geometry().container;

    for layer in LayerType::ALL {
        view.select_layer(layer);
        for ribbon in view.ribbons() {
            assert!(bounds.contains_point(ribbon.start_x, ribbon.start_y), "{:?}", ribbon);
            assert!(bounds.contains_point(ribbon.end_x, ribbon.end_y), "{:?}", ribbon);
        }
    }
}

#[test]
fn test_dangling_alignment_is_omitted() {
    let mut view = measured_view("house");
    let ribbons = view.ribbons();

    // Third lexical alignment points at t9, which does not exist
    assert_eq!(view.active_alignments().len(), 3);
    assert_eq!(ribbons.len(), 2);
    assert_eq!(ribbons.iter().map(|r| r.alignment_index).collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(view.display_list().alignment_count, 3);
}

#[test]
fn test_dangling_alignment_stays_unrenderable() {
    let pair = common::pair("house");
    let snapshot = common::row_layout(&pair).measure(&pair.id);
    let renderer = CurveRenderer::new(VisualizerConfig::default());
    let dangling = Alignment::new(&["s3"], &["t9"], "dangling");

    for _ in 0..3 {
        let ribbon = renderer.build_curve(2, &dangling, &snapshot.source, &snapshot.target, false, false, "#000");
        assert!(ribbon.is_none());
    }
}

#[test]
fn test_fan_out_anchor_is_mean_of_targets() {
    let mut view = measured_view("house");
    let ribbon = view.ribbons().into_iter().find(|r| r.alignment_index == 0).unwrap();

    // t3, t4, t5 centres sit at 20 + 30 + 80 * {2, 3, 4}
    assert_eq!(ribbon.end_x, 290.0);
    assert_eq!(ribbon.end_y, 240.0);
    assert_eq!(ribbon.start_x, 50.0);
    assert_eq!(ribbon.start_y, 64.0);
    assert_eq!(ribbon.cp1_y, 124.0);
    assert_eq!(ribbon.cp2_y, 180.0);
}

#[test]
fn test_missing_geometry_recovers_on_next_measurement() {
    let pair = common::pair("cat");
    let partial = StaticGeometry::new(common::CONTAINER)
        .with_token("s2", TokenSide::Source, Rect::new(100.0, 140.0, 60.0, 24.0));
    let mut view = AlignmentView::new(pair.clone(), VisualizerConfig::default());

    view.remeasure(&partial);
    assert!(view.ribbons().is_empty());

    view.remeasure(&common::row_layout(&pair));
    assert_eq!(view.ribbons().len(), 1);
}

#[test]
fn test_remeasure_is_idempotent() {
    let pair = common::pair("house");
    let geometry = common::row_layout(&pair);
    let mut view = AlignmentView::new(pair, VisualizerConfig::default());
    view.hover("s1", TokenSide::Source);

    view.remeasure(&geometry);
    let first = view.display_list();
    view.remeasure(&geometry);
    view.remeasure(&geometry);
    assert_eq!(first, view.display_list());
}

#[test]
fn test_resize_moves_ribbons() {
    let pair = common::pair("cat");
    let mut view = AlignmentView::new(pair.clone(), VisualizerConfig::default());
    view.remeasure(&common::row_layout(&pair));
    let before = view.ribbons()[0].start_x;

    // Narrower viewport wraps the target row further right
    let resized = StaticGeometry::new(common::CONTAINER)
        .with_token("s2", TokenSide::Source, Rect::new(200.0, 140.0, 60.0, 24.0))
        .with_token("t1", TokenSide::Target, Rect::new(300.0, 340.0, 60.0, 24.0));
    view.remeasure(&resized);

    let ribbon = &view.ribbons()[0];
    assert_ne!(ribbon.start_x, before);
    assert_eq!(ribbon.start_x, 222.0);
    assert_eq!(ribbon.end_x, 322.0);
}

#[test]
fn test_ribbon_styles_follow_highlight() {
    let mut view = measured_view("house");
    view.hover("s1", TokenSide::Source);
    let ribbons = view.ribbons();

    let highlighted = &ribbons[0];
    assert_eq!(highlighted.opacity, 1.0);
    assert_eq!(highlighted.path_length, 1.0);

    let dimmed = &ribbons[1];
    assert_eq!(dimmed.opacity, 0.15);
    assert!(dimmed.classes.contains(&"ribbon--dimmed".to_string()));

    view.leave();
    assert!(view.ribbons().iter().all(|r| r.opacity == 0.3 && r.path_length == 0.8));
}

#[test]
fn test_hovering_unaligned_token_dims_tokens_not_ribbons() {
    let mut view = measured_view("cat");
    view.hover("s1", TokenSide::Source);
    let list = view.display_list();

    assert!(list.target.tokens.iter().all(|t| t.dimmed));
    assert!(list.ribbons.iter().all(|r| r.opacity == 0.3));
}

#[test]
fn test_fixture_alignments_are_well_formed() {
    for pair in common::fixture().sentences {
        for token in &pair.source.tokens {
            assert!(!pair.target.contains_token(&token.id), "{} is on both sides", token.id);
        }
        for layer in LayerType::ALL {
            for alignment in pair.alignments(layer) {
                assert!(!alignment.source_token_ids.is_empty(), "{}", alignment.label);
                assert!(!alignment.target_token_ids.is_empty(), "{}", alignment.label);
            }
        }
    }
}
