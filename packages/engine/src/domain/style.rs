//! Age -> look mapping for smoke puffs.
//!
//! Puffs grow linearly with age and fade as `1 / (epsilon + age)`.

use serde::{Deserialize, Serialize};

use crate::pool::Particle;

pub const DEFAULT_RADIUS_SCALE: f32 = 2.0;
pub const DEFAULT_OPACITY_EPSILON: f32 = 0.01;
pub const DEFAULT_SMOKE_COLOR: [u8; 3] = [60, 60, 60];

/// Floats per puff in the packed transfer buffer: x, y, radius, opacity
pub const PUFF_STRIDE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmokeStyle {
    /// Radius per unit of age
    pub radius_scale: f32,
    /// Keeps opacity finite at age 0
    pub epsilon: f32,
    pub color: [u8; 3],
}

impl Default for SmokeStyle {
    fn default() -> Self {
        SmokeStyle {
            radius_scale: DEFAULT_RADIUS_SCALE,
            epsilon: DEFAULT_OPACITY_EPSILON,
            color: DEFAULT_SMOKE_COLOR,
        }
    }
}

/// What actually gets drawn for one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Puff {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub opacity: f32,
}

impl SmokeStyle {
    #[inline]
    pub fn radius(&self, age: f32) -> f32 {
        (self.radius_scale * age).max(0.0)
    }

    /// Clamped to `[0, 1]`; young puffs saturate at fully opaque.
    #[inline]
    pub fn opacity(&self, age: f32) -> f32 {
        (1.0 / (self.epsilon + age)).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn puff(&self, particle: Particle) -> Puff {
        Puff {
            x: particle.x,
            y: particle.y,
            radius: self.radius(particle.age),
            opacity: self.opacity(particle.age),
        }
    }

    /// CSS colour for a canvas `fillStyle`
    pub fn fill_style(&self, opacity: f32) -> String {
        let [r, g, b] = self.color;
        format!("rgba({r},{g},{b},{opacity})")
    }
}

impl Puff {
    #[inline]
    pub fn to_array(self) -> [f32; PUFF_STRIDE] {
        [self.x, self.y, self.radius, self.opacity]
    }
}
