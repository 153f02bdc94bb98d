//! Glyph Drift - bouncing glyph wallpaper simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (placement, motion, collisions)
//! - `host`: Frame driver standing in for the UI render loop
//! - `settings`: Data-driven tuning loaded from JSON

pub mod host;
pub mod settings;
pub mod sim;

pub use host::{FrameInput, FrameReport, Wallpaper};
pub use settings::{FieldSettings, SettingsError};
pub use sim::{FieldParams, FieldPhase, ParticleField, ParticleView, Span, TickReport};

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep (seconds, ~16 fps nominal cadence)
    pub const TICK_INTERVAL: f32 = 0.06;

    /// Particles per session
    pub const TARGET_COUNT: usize = 30;

    /// Display size range (font points)
    pub const MIN_SIZE: f32 = 50.0;
    pub const MAX_SIZE: f32 = 80.0;

    /// Speed range (units per second)
    pub const MIN_SPEED: f32 = 20.0;
    pub const MAX_SPEED: f32 = 50.0;

    /// Hit radius as a fraction of display size
    pub const RADIUS_FACTOR: f32 = 0.6;

    /// Minimum gap between particle edges at placement
    pub const SPACING: f32 = 10.0;
    /// Random positions tried per placement pass
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 50;
    /// Size multiplier for the single retry after a failed placement pass
    pub const SHRINK_FACTOR: f32 = 0.8;

    /// Extra push applied on pairwise separation (avoids jitter)
    pub const SEPARATION_PADDING: f32 = 1.0;

    /// Default glyph palette (autumn set)
    pub const AUTUMN_PALETTE: [&str; 5] = ["🍂", "🎃", "🦃", "☕️", "🧣"];
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Finite canvas with positive width and height
#[inline]
pub fn is_usable_canvas(canvas: Vec2) -> bool {
    canvas.is_finite() && canvas.x > 0.0 && canvas.y > 0.0
}

/// True if a circle of `radius` fits inside `canvas` on both axes
#[inline]
pub fn fits_canvas(canvas: Vec2, radius: f32) -> bool {
    canvas.x - radius >= radius && canvas.y - radius >= radius
}
