//! DOM-backed geometry provider
//!
//! Reads the rendered token elements (`data-token-type` / `data-token-id`)
//! inside the visualization container and converts their client rects into
//! container-relative anchors.

use wasm_bindgen::JsCast;
use web_sys::{DomRect, Element};

use super::geometry::{GeometryProvider, GeometrySnapshot, PositionMap, Rect, TokenPosition};
use crate::models::TokenSide;

/// Attribute holding the token id on every rendered token element
pub const TOKEN_ID_ATTRIBUTE: &str = "data-token-id";

/// Attribute holding "source" or "target" on every rendered token element
pub const TOKEN_TYPE_ATTRIBUTE: &str = "data-token-type";

pub struct DomGeometry {
    container: Element,
}

impl DomGeometry {
    pub fn new(container: Element) -> Self {
        Self { container }
    }

    fn measure_row(&self, side: TokenSide, container_rect: Rect) -> PositionMap {
        let mut positions = PositionMap::new();
        let selector = format!("[{}=\"{}\"]", TOKEN_TYPE_ATTRIBUTE, side.as_str());

        let nodes = match self.container.query_selector_all(&selector) {
            Ok(nodes) => nodes,
            Err(e) => {
                log::warn!("Token query failed for {} row: {:?}", side.as_str(), e);
                return positions;
            }
        };

        for i in 0..nodes.length() {
            let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
                continue;
            };
            // Elements without an id are decoration, not tokens
            let Some(id) = element.get_attribute(TOKEN_ID_ATTRIBUTE) else {
                continue;
            };

            let rect = to_rect(&element.get_bounding_client_rect());
            positions.insert(id.clone(), TokenPosition::from_rects(&id, side, rect, container_rect));
        }

        positions
    }
}

impl GeometryProvider for DomGeometry {
    fn measure(&self, sentence_pair_id: &str) -> GeometrySnapshot {
        let container_rect = to_rect(&self.container.get_bounding_client_rect());

        let snapshot = GeometrySnapshot {
            source: self.measure_row(TokenSide::Source, container_rect),
            target: self.measure_row(TokenSide::Target, container_rect),
            container: Rect::new(0.0, 0.0, container_rect.width, container_rect.height),
        };

        log::debug!(
            "Measured sentence pair {}: {} source, {} target tokens",
            sentence_pair_id,
            snapshot.source.len(),
            snapshot.target.len()
        );

        snapshot
    }
}

fn to_rect(rect: &DomRect) -> Rect {
    Rect::new(rect.left() as f32, rect.top() as f32, rect.width() as f32, rect.height() as f32)
}
