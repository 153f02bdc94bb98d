//! Frame driver
//!
//! Plays the part of the wallpaper view: it learns the canvas size from
//! layout, reseeds the field after a tap, and advances exactly one fixed
//! step per delivered frame regardless of how late the frame arrives.

use glam::Vec2;

use crate::is_usable_canvas;
use crate::sim::{FieldPhase, ParticleField, ParticleView, TickReport};

/// Host input for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Canvas size from layout, if known this frame
    pub canvas: Option<Vec2>,
    /// One-shot reseed request (tap)
    pub reset: bool,
}

/// What happened during a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub frame: u64,
    /// Particles alive after the frame
    pub particles: usize,
    /// The field was (re)populated this frame
    pub seeded: bool,
    pub tick: TickReport,
}

/// Owns a field and drives it one frame at a time
#[derive(Debug, Clone)]
pub struct Wallpaper<G> {
    field: ParticleField<G>,
    canvas: Option<Vec2>,
    frame: u64,
    sessions: u64,
}

impl<G: Clone> Wallpaper<G> {
    pub fn new(field: ParticleField<G>) -> Self {
        Self {
            field,
            canvas: None,
            frame: 0,
            sessions: 0,
        }
    }

    /// Run one frame: track size, honour reset, seed lazily, then step
    pub fn frame(&mut self, input: &FrameInput) -> FrameReport {
        self.frame += 1;

        // Zero-sized layout passes (e.g. before first layout) are skipped
        if let Some(canvas) = input.canvas.filter(|c| is_usable_canvas(*c)) {
            if self.canvas != Some(canvas) {
                log::debug!("canvas resized to {}x{}", canvas.x, canvas.y);
                self.canvas = Some(canvas);
                self.field.resize(canvas);
            }
        }

        if input.reset && self.field.phase() == FieldPhase::Populated {
            log::info!("Reset requested, clearing {} particles", self.field.len());
            self.field.reset();
        }

        let mut seeded = false;
        if self.field.is_empty() {
            if let Some(canvas) = self.canvas {
                if self.field.populate(canvas) > 0 {
                    self.sessions += 1;
                    seeded = true;
                    log::info!(
                        "Session {} seeded with {} particles",
                        self.sessions,
                        self.field.len()
                    );
                }
            }
        }

        let tick = self.field.step();

        FrameReport {
            frame: self.frame,
            particles: self.field.len(),
            seeded,
            tick,
        }
    }
}

impl<G> Wallpaper<G> {
    /// Current particles for drawing
    pub fn snapshot(&self) -> Vec<ParticleView<'_, G>> {
        self.field.snapshot()
    }

    pub fn field(&self) -> &ParticleField<G> {
        &self.field
    }

    pub fn canvas(&self) -> Option<Vec2> {
        self.canvas
    }

    /// Sessions started so far (initial seeding counts as one)
    pub fn sessions(&self) -> u64 {
        self.sessions
    }

    pub fn frames(&self) -> u64 {
        self.frame
    }
}
