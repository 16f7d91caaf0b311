//! Token geometry
//!
//! A measurement is a snapshot of where every token currently sits inside
//! the visualization container. Snapshots are never diffed or reused: every
//! layout-affecting event produces a fresh one.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::TokenSide;

/// Axis-aligned box in some coordinate space (viewport or container)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}

/// Where a ribbon attaches to a token, relative to the container
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TokenPosition {
    pub token_id: String,

    /// Horizontal centre of the token box
    pub anchor_x: f32,

    /// Bottom edge for source tokens, top edge for target tokens
    pub anchor_y: f32,

    pub width: f32,
    pub height: f32,
}

impl TokenPosition {
    /// Derive the anchor from a token box and its container box, both in
    /// viewport coordinates
    ///
    /// Source tokens sit above the ribbon space, so ribbons leave from their
    /// bottom-centre; target tokens sit below it and are entered at top-centre.
    pub fn from_rects(token_id: &str, side: TokenSide, token: Rect, container: Rect) -> Self {
        let anchor_y = match side {
            TokenSide::Source => token.bottom() - container.top,
            TokenSide::Target => token.top - container.top,
        };

        Self {
            token_id: token_id.to_string(),
            anchor_x: token.left - container.left + token.width / 2.0,
            anchor_y,
            width: token.width,
            height: token.height,
        }
    }
}

/// Token id -> position for one row
pub type PositionMap = HashMap<String, TokenPosition>;

/// One measurement pass over both token rows
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct GeometrySnapshot {
    pub source: PositionMap,
    pub target: PositionMap,

    /// Container size; origin is always (0, 0)
    pub container: Rect,
}

impl GeometrySnapshot {
    pub fn positions(&self, side: TokenSide) -> &PositionMap {
        match side {
            TokenSide::Source => &self.source,
            TokenSide::Target => &self.target,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty() && self.target.is_empty()
    }
}

/// Anything able to report where the tokens of the current sentence pair are
///
/// Implementations must only be asked after the token rows have been laid
/// out for `sentence_pair_id`. Tokens without a rendered element are left out
/// of the snapshot rather than reported as errors.
pub trait GeometryProvider {
    fn measure(&self, sentence_pair_id: &str) -> GeometrySnapshot;
}

/// Measured token box as reported by the host page
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MeasuredToken {
    pub id: String,
    pub side: TokenSide,
    pub rect: Rect,
}

/// Geometry supplied as plain rectangles instead of read from the DOM
///
/// Used when the host measures the rows itself (canvas renderers, tests).
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct StaticGeometry {
    pub container: Rect,
    pub tokens: Vec<MeasuredToken>,
}

impl StaticGeometry {
    pub fn new(container: Rect) -> Self {
        Self { container, tokens: Vec::new() }
    }

    pub fn with_token(mut self, id: &str, side: TokenSide, rect: Rect) -> Self {
        self.tokens.push(MeasuredToken { id: id.to_string(), side, rect });
        self
    }
}

impl GeometryProvider for StaticGeometry {
    fn measure(&self, _sentence_pair_id: &str) -> GeometrySnapshot {
        let mut snapshot = GeometrySnapshot {
            container: Rect::new(0.0, 0.0, self.container.width, self.container.height),
            ..Default::default()
        };

        for token in &self.tokens {
            let position = TokenPosition::from_rects(&token.id, token.side, token.rect, self.container);
            match token.side {
                TokenSide::Source => snapshot.source.insert(token.id.clone(), position),
                TokenSide::Target => snapshot.target.insert(token.id.clone(), position),
            };
        }

        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_anchor_is_bottom_centre() {
        let container = Rect::new(10.0, 100.0, 500.0, 300.0);
        let token = Rect::new(50.0, 120.0, 40.0, 20.0);
        let pos = TokenPosition::from_rects("s1", TokenSide::Source, token, container);
        assert_eq!(pos.anchor_x, 60.0);
        assert_eq!(pos.anchor_y, 40.0);
        assert_eq!(pos.width, 40.0);
        assert_eq!(pos.height, 20.0);
    }

    #[test]
    fn test_target_anchor_is_top_centre() {
        let container = Rect::new(10.0, 100.0, 500.0, 300.0);
        let token = Rect::new(50.0, 320.0, 40.0, 20.0);
        let pos = TokenPosition::from_rects("t1", TokenSide::Target, token, container);
        assert_eq!(pos.anchor_x, 60.0);
        assert_eq!(pos.anchor_y, 220.0);
    }

    #[test]
    fn test_static_geometry_splits_rows() {
        let geometry = StaticGeometry::new(Rect::new(0.0, 0.0, 400.0, 300.0))
            .with_token("s1", TokenSide::Source, Rect::new(0.0, 0.0, 20.0, 20.0))
            .with_token("t1", TokenSide::Target, Rect::new(0.0, 250.0, 20.0, 20.0));
        let snapshot = geometry.measure("p1");
        assert!(snapshot.source.contains_key("s1"));
        assert!(snapshot.target.contains_key("t1"));
        assert!(!snapshot.source.contains_key("t1"));
        assert_eq!(snapshot.container, Rect::new(0.0, 0.0, 400.0, 300.0));
    }

    #[test]
    fn test_repeated_measurement_is_identical() {
        let geometry = StaticGeometry::new(Rect::new(5.0, 5.0, 400.0, 300.0))
            .with_token("s1", TokenSide::Source, Rect::new(30.0, 10.0, 20.0, 20.0));
        assert_eq!(geometry.measure("p1"), geometry.measure("p1"));
    }
}
