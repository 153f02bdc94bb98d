//! Particle entity and its read-only render view

use glam::Vec2;
use serde::Serialize;

/// A circular glyph drifting across the canvas
///
/// `size` and `radius` are fixed at creation; only `pos` and `vel` change.
#[derive(Debug, Clone)]
pub struct Particle<G> {
    pub(crate) glyph: G,
    pub(crate) pos: Vec2,
    pub(crate) size: f32,
    pub(crate) radius: f32,
    pub(crate) vel: Vec2,
}

impl<G> Particle<G> {
    pub(crate) fn new(glyph: G, pos: Vec2, size: f32, radius: f32, vel: Vec2) -> Self {
        Self {
            glyph,
            pos,
            size,
            radius,
            vel,
        }
    }

    pub fn glyph(&self) -> &G {
        &self.glyph
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Display size (font points) the radius was derived from
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn view(&self) -> ParticleView<'_, G> {
        ParticleView {
            glyph: &self.glyph,
            position: self.pos,
            radius: self.radius,
            size: self.size,
        }
    }
}

/// Snapshot record handed to the renderer (no velocity)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParticleView<'a, G> {
    pub glyph: &'a G,
    pub position: Vec2,
    pub radius: f32,
    pub size: f32,
}
