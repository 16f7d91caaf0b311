//! Ribbon rendering (Bézier curves)
//!
//! Each alignment becomes one cubic Bézier from the aggregate anchor of its
//! source tokens down to the aggregate anchor of its target tokens. Both
//! control points are pushed vertically by the same offset, which gives a
//! symmetric S-curve whatever the horizontal distance.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::geometry::PositionMap;
use crate::config::VisualizerConfig;
use crate::models::Alignment;

/// A connector between the two token rows, ready for SVG rendering
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderRibbon {
    /// Unique identifier for this ribbon ("ribbon-<index>")
    pub id: String,

    /// Index of the alignment within the active layer
    pub alignment_index: usize,

    /// Start X (mean x of the resolved source anchors)
    pub start_x: f32,

    /// Start Y (first resolved source anchor)
    pub start_y: f32,

    pub end_x: f32,
    pub end_y: f32,

    pub cp1_x: f32,
    pub cp1_y: f32,
    pub cp2_x: f32,
    pub cp2_y: f32,

    /// SVG path data
    pub path: String,

    /// Stroke colour (hex string)
    pub color: String,

    pub stroke_width: f32,

    pub opacity: f32,

    /// Fraction of the path to draw (0..=1)
    pub path_length: f32,

    /// CSS class names to apply
    pub classes: Vec<String>,

    pub label: String,
}

/// Opacity, draw fraction and classes for one highlight state
#[derive(Clone, Debug, PartialEq)]
pub struct RibbonStyle {
    pub opacity: f32,
    pub path_length: f32,
    pub classes: Vec<String>,
}

impl RibbonStyle {
    /// Highlighted always wins over dimmed
    pub fn from_flags(is_highlighted: bool, is_dimmed: bool, config: &VisualizerConfig) -> Self {
        let mut classes = vec!["ribbon".to_string()];

        if is_highlighted {
            classes.push("ribbon--highlighted".to_string());
            return Self {
                opacity: config.highlighted_opacity,
                path_length: config.highlighted_path_length,
                classes,
            };
        }

        if is_dimmed {
            classes.push("ribbon--dimmed".to_string());
            return Self {
                opacity: config.dimmed_opacity,
                path_length: config.partial_path_length,
                classes,
            };
        }

        Self {
            opacity: config.normal_opacity,
            path_length: config.partial_path_length,
            classes,
        }
    }
}

/// Anchor shared by every token on one side of an alignment
///
/// Returns `None` when no id of the side has geometry (unmeasured tokens or
/// dangling ids).
pub fn aggregate_anchor(token_ids: &[String], positions: &PositionMap) -> Option<(f32, f32)> {
    let resolved: Vec<_> = token_ids.iter().filter_map(|id| positions.get(id)).collect();
    let first = resolved.first()?;

    // Rows are flat, so the first y stands for the whole side
    let mean_x = resolved.iter().map(|pos| pos.anchor_x).sum::<f32>() / resolved.len() as f32;
    Some((mean_x, first.anchor_y))
}

/// Curve renderer for alignment ribbons
pub struct CurveRenderer {
    config: VisualizerConfig,
}

impl CurveRenderer {
    pub fn new(config: VisualizerConfig) -> Self {
        Self { config }
    }

    /// Calculate cubic Bézier control points between two anchors
    pub fn control_points(&self, start: (f32, f32), end: (f32, f32)) -> [(f32, f32); 2] {
        [
            (start.0, start.1 + self.config.control_offset),
            (end.0, end.1 - self.config.control_offset),
        ]
    }

    /// Generate SVG path for a ribbon
    pub fn generate_ribbon_path(&self, start: (f32, f32), end: (f32, f32)) -> String {
        let [cp1, cp2] = self.control_points(start, end);
        format!(
            "M {} {} C {} {}, {} {}, {} {}",
            start.0, start.1, cp1.0, cp1.1, cp2.0, cp2.1, end.0, end.1
        )
    }

    /// Build the ribbon for one alignment, or `None` if either side has no
    /// measured token yet
    pub fn build_curve(
        &self,
        alignment_index: usize,
        alignment: &Alignment,
        source_positions: &PositionMap,
        target_positions: &PositionMap,
        is_highlighted: bool,
        is_dimmed: bool,
        color: &str,
    ) -> Option<RenderRibbon> {
        let start = aggregate_anchor(&alignment.source_token_ids, source_positions)?;
        let end = aggregate_anchor(&alignment.target_token_ids, target_positions)?;
        Some(self.ribbon_between(alignment_index, alignment, start, end, is_highlighted, is_dimmed, color))
    }

    fn ribbon_between(
        &self,
        alignment_index: usize,
        alignment: &Alignment,
        start: (f32, f32),
        end: (f32, f32),
        is_highlighted: bool,
        is_dimmed: bool,
        color: &str,
    ) -> RenderRibbon {
        let [cp1, cp2] = self.control_points(start, end);
        let style = RibbonStyle::from_flags(is_highlighted, is_dimmed, &self.config);

        RenderRibbon {
            id: format!("ribbon-{}", alignment_index),
            alignment_index,
            start_x: start.0,
            start_y: start.1,
            end_x: end.0,
            end_y: end.1,
            cp1_x: cp1.0,
            cp1_y: cp1.1,
            cp2_x: cp2.0,
            cp2_y: cp2.1,
            path: self.generate_ribbon_path(start, end),
            color: color.to_string(),
            stroke_width: self.config.stroke_width,
            opacity: style.opacity,
            path_length: style.path_length,
            classes: style.classes,
            label: alignment.label.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct RibbonKey {
    alignment_index: usize,
    start: (u32, u32),
    end: (u32, u32),
    is_highlighted: bool,
    is_dimmed: bool,
}

/// Memoized ribbons for the current sentence pair and layer
///
/// Keys include the anchors, so a new measurement never serves stale paths.
/// Must be cleared whenever the alignment list changes (new pair or layer).
#[derive(Default)]
pub struct CurveCache {
    ribbons: HashMap<RibbonKey, RenderRibbon>,
}

impl CurveCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ribbons.clear();
    }

    pub fn len(&self) -> usize {
        self.ribbons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ribbons.is_empty()
    }

    /// Same contract as [`CurveRenderer::build_curve`], reusing earlier output
    pub fn get_or_build(
        &mut self,
        renderer: &CurveRenderer,
        alignment_index: usize,
        alignment: &Alignment,
        source_positions: &PositionMap,
        target_positions: &PositionMap,
        is_highlighted: bool,
        is_dimmed: bool,
        color: &str,
    ) -> Option<RenderRibbon> {
        let start = aggregate_anchor(&alignment.source_token_ids, source_positions)?;
        let end = aggregate_anchor(&alignment.target_token_ids, target_positions)?;

        let key = RibbonKey {
            alignment_index,
            start: (start.0.to_bits(), start.1.to_bits()),
            end: (end.0.to_bits(), end.1.to_bits()),
            is_highlighted,
            is_dimmed,
        };

        let ribbon = self.ribbons.entry(key).or_insert_with(|| {
            renderer.ribbon_between(alignment_index, alignment, start, end, is_highlighted, is_dimmed, color)
        });
        Some(ribbon.clone())
    }
}
