// Shared fixtures for the integration tests
#![allow(dead_code)]

use xingolak_wasm::html_layout::{Rect, StaticGeometry};
use xingolak_wasm::{AlignmentData, SentencePair, TokenSide};

pub const CONTAINER: Rect = Rect { left: 8.0, top: 100.0, width: 600.0, height: 300.0 };

pub fn fixture() -> AlignmentData {
    AlignmentData::from_json(include_str!("../fixtures/alignment_data.json")).expect("fixture should parse")
}

pub fn pair(id: &str) -> SentencePair {
    fixture().sentence(id).cloned().expect("fixture sentence should exist")
}

/// Lay both rows out left to right, 80px per token, source row on top
pub fn row_layout(pair: &SentencePair) -> StaticGeometry {
    let mut geometry = StaticGeometry::new(CONTAINER);
    for (i, token) in pair.source.tokens.iter().enumerate() {
        let rect = Rect::new(CONTAINER.left + 20.0 + 80.0 * i as f32, CONTAINER.top + 40.0, 60.0, 24.0);
        geometry = geometry.with_token(&token.id, TokenSide::Source, rect);
    }
    for (i, token) in pair.target.tokens.iter().enumerate() {
        let rect = Rect::new(CONTAINER.left + 20.0 + 80.0 * i as f32, CONTAINER.top + 240.0, 60.0, 24.0);
        geometry = geometry.with_token(&token.id, TokenSide::Target, rect);
    }
    geometry
}
