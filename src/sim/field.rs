//! Particle field state and lifecycle
//!
//! The field is either `Empty` or `Populated`. `initialize` is the only way in,
//! `reset` the only way out. The RNG lives for the whole field, so sessions
//! after a reset differ from each other while a run stays reproducible from
//! its seed.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::params::{FieldParams, Span};
use super::particle::{Particle, ParticleView};
use super::placement::place_particle;
use super::tick::{TickReport, tick};
use crate::is_usable_canvas;

/// Lifecycle phase of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPhase {
    /// No particles (initial, after reset, or nothing could be placed)
    Empty,
    /// Particles present and advancing
    Populated,
}

/// Bouncing, non-overlapping glyph particles in a rectangular canvas
#[derive(Debug, Clone)]
pub struct ParticleField<G> {
    params: FieldParams,
    palette: Vec<G>,
    seed: u64,
    rng: Pcg32,
    canvas: Vec2,
    particles: Vec<Particle<G>>,
    /// Ticks advanced in the current session
    ticks: u64,
}

impl<G: Clone> ParticleField<G> {
    /// Create an empty field; `palette` supplies the glyph payloads
    pub fn new(params: FieldParams, palette: Vec<G>, seed: u64) -> Self {
        Self {
            params,
            palette,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            canvas: Vec2::ZERO,
            particles: Vec::new(),
            ticks: 0,
        }
    }

    /// Seed the field with up to `target_count` non-overlapping particles
    ///
    /// Returns how many were placed, which may be fewer than requested on a
    /// crowded canvas. Does nothing if the field is already populated.
    pub fn initialize(
        &mut self,
        canvas: Vec2,
        target_count: usize,
        sizes: Span,
        speeds: Span,
    ) -> usize {
        if !self.particles.is_empty() {
            log::debug!("initialize ignored: field already populated");
            return 0;
        }
        if !is_usable_canvas(canvas) {
            log::warn!("initialize ignored: degenerate canvas {canvas:?}");
            return 0;
        }
        if !(sizes.is_valid() && sizes.min > 0.0) {
            log::warn!("initialize ignored: bad size range {sizes:?}");
            return 0;
        }
        if !(speeds.is_valid() && speeds.min >= 0.0) {
            log::warn!("initialize ignored: bad speed range {speeds:?}");
            return 0;
        }
        if self.palette.is_empty() {
            log::warn!("initialize ignored: empty glyph palette");
            return 0;
        }

        self.canvas = canvas;
        self.ticks = 0;
        self.particles.reserve(target_count);

        for _ in 0..target_count {
            if let Some(p) = place_particle(
                &mut self.rng,
                canvas,
                &self.palette,
                &self.particles,
                sizes,
                speeds,
                &self.params,
            ) {
                self.particles.push(p);
            }
        }

        let placed = self.particles.len();
        if placed < target_count {
            log::debug!(
                "placed {placed}/{target_count} particles on {}x{} canvas",
                canvas.x,
                canvas.y
            );
        } else {
            log::debug!("placed {placed} particles on {}x{} canvas", canvas.x, canvas.y);
        }
        placed
    }

    /// `initialize` with the configured count, sizes and speeds
    pub fn populate(&mut self, canvas: Vec2) -> usize {
        let FieldParams {
            target_count,
            size_range,
            speed_range,
            ..
        } = self.params;
        self.initialize(canvas, target_count, size_range, speed_range)
    }
}

impl<G> ParticleField<G> {
    /// Advance by `dt`; no-op when empty
    pub fn advance(&mut self, dt: f32) -> TickReport {
        if self.particles.is_empty() {
            return TickReport::default();
        }
        self.ticks += 1;
        tick(&mut self.particles, self.canvas, self.params.separation_padding, dt)
    }

    /// Advance by the configured fixed interval
    pub fn step(&mut self) -> TickReport {
        self.advance(self.params.tick_interval)
    }

    /// Drop every particle; the next `initialize` starts a fresh session
    pub fn reset(&mut self) {
        self.particles.clear();
        self.ticks = 0;
    }

    /// Update the walls; particles outside are clamped on the next tick
    ///
    /// A zero, negative or non-finite size is ignored and the old walls stay.
    pub fn resize(&mut self, canvas: Vec2) {
        if !is_usable_canvas(canvas) {
            log::warn!("resize ignored: degenerate canvas {canvas:?}");
            return;
        }
        self.canvas = canvas;
    }

    /// Read-only view of every particle, in placement order
    pub fn snapshot(&self) -> Vec<ParticleView<'_, G>> {
        self.particles.iter().map(Particle::view).collect()
    }

    pub fn phase(&self) -> FieldPhase {
        if self.particles.is_empty() {
            FieldPhase::Empty
        } else {
            FieldPhase::Populated
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn canvas(&self) -> Vec2 {
        self.canvas
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[cfg(test)]
    pub(crate) fn with_particles(
        params: FieldParams,
        canvas: Vec2,
        particles: Vec<Particle<G>>,
    ) -> Self {
        Self {
            params,
            palette: Vec::new(),
            seed: 0,
            rng: Pcg32::seed_from_u64(0),
            canvas,
            particles,
            ticks: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn particles(&self) -> &[Particle<G>] {
        &self.particles
    }
}
