//! Numeric tuning for the particle field

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Closed `[min, max]` range used for sizes and speeds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Degenerate range holding a single value
    pub const fn fixed(value: f32) -> Self {
        Self { min: value, max: value }
    }

    /// Finite and not inverted
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// Simulation parameters (everything except glyph content and seed)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldParams {
    /// Particles to place per session
    pub target_count: usize,
    /// Display size range sampled per particle
    pub size_range: Span,
    /// Speed range sampled per particle (units/s)
    pub speed_range: Span,
    /// Hit radius = size * radius_factor
    pub radius_factor: f32,
    /// Minimum edge gap between particles at placement
    pub spacing: f32,
    /// Random positions tried per placement pass
    pub max_attempts: u32,
    /// Size multiplier for the fallback placement pass
    pub shrink_factor: f32,
    /// Extra push on pairwise separation
    pub separation_padding: f32,
    /// Fixed step used by `ParticleField::step`
    pub tick_interval: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            target_count: TARGET_COUNT,
            size_range: Span::new(MIN_SIZE, MAX_SIZE),
            speed_range: Span::new(MIN_SPEED, MAX_SPEED),
            radius_factor: RADIUS_FACTOR,
            spacing: SPACING,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
            shrink_factor: SHRINK_FACTOR,
            separation_padding: SEPARATION_PADDING,
            tick_interval: TICK_INTERVAL,
        }
    }
}

impl FieldParams {
    /// Hit radius for a display size
    #[inline]
    pub fn hit_radius(&self, size: f32) -> f32 {
        size * self.radius_factor
    }
}
