//! Layer displacement derived from the pointer offset.
//!
//! Every visual layer moves by `offset * weight`. The hero moves with the full
//! offset; section `i` moves with `(i + 1) / 8` of it, which gives the stacked
//! cards their depth.

use crate::constants::{HERO_WEIGHT, PARALLAX_RANGE, SECTION_WEIGHT_DIVISOR};
use crate::pointer::PointerOffset;

/// Tuning for the offset range and per-section weights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxParams {
    /// Span of the offset across the viewport; components live in `±range / 2`.
    pub range: f32,
    pub hero_weight: f32,
    pub section_weight_divisor: f32,
}

impl Default for ParallaxParams {
    fn default() -> Self {
        Self {
            range: PARALLAX_RANGE,
            hero_weight: HERO_WEIGHT,
            section_weight_divisor: SECTION_WEIGHT_DIVISOR,
        }
    }
}

impl ParallaxParams {
    #[inline]
    pub fn half_range(&self) -> f32 {
        self.range * 0.5
    }

    #[inline]
    pub fn section_weight(&self, index: usize) -> f32 {
        (index + 1) as f32 / self.section_weight_divisor
    }
}

/// Translation applied to one rendered layer, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayerTransform {
    pub dx: f32,
    pub dy: f32,
}

impl LayerTransform {
    pub const IDENTITY: Self = Self { dx: 0.0, dy: 0.0 };

    pub fn to_css(&self) -> String {
        format!("translate({}px, {}px)", self.dx, self.dy)
    }
}

#[inline]
pub fn layer_transform(offset: PointerOffset, weight: f32) -> LayerTransform {
    let d = offset.as_vec2() * weight;
    LayerTransform { dx: d.x, dy: d.y }
}

#[inline]
pub fn hero_weight() -> f32 {
    ParallaxParams::default().hero_weight
}

#[inline]
pub fn section_weight(index: usize) -> f32 {
    ParallaxParams::default().section_weight(index)
}
