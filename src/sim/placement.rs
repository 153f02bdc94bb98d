//! Non-overlapping initial placement
//!
//! Rejection sampling: each candidate position must keep `spacing` clear of
//! every particle already placed. A particle that cannot be placed is shrunk
//! once and retried; if that also fails it is skipped, so a crowded canvas
//! yields fewer particles rather than an error.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::params::{FieldParams, Span};
use super::particle::Particle;
use crate::{fits_canvas, polar_to_cartesian};

/// Try up to `max_attempts` random positions for a circle of `radius`
///
/// Returns `None` if every attempt overlaps an existing particle (plus
/// `spacing`), or if the circle cannot fit the canvas at all.
pub fn find_spot<G, R: Rng + ?Sized>(
    rng: &mut R,
    canvas: Vec2,
    radius: f32,
    existing: &[Particle<G>],
    spacing: f32,
    max_attempts: u32,
) -> Option<Vec2> {
    if !fits_canvas(canvas, radius) {
        return None;
    }

    for _ in 0..max_attempts {
        let candidate = Vec2::new(
            rng.random_range(radius..=canvas.x - radius),
            rng.random_range(radius..=canvas.y - radius),
        );
        let clear = existing
            .iter()
            .all(|other| candidate.distance(other.pos) >= radius + other.radius + spacing);
        if clear {
            return Some(candidate);
        }
    }

    None
}

/// Random direction in `[0, 2π)`, random speed in `speeds` (inclusive)
pub fn random_velocity<R: Rng + ?Sized>(rng: &mut R, speeds: Span) -> Vec2 {
    let angle = rng.random_range(0.0..TAU);
    let speed = rng.random_range(speeds.min..=speeds.max);
    polar_to_cartesian(speed, angle)
}

/// Place one particle among `existing`, or `None` if no room was found
pub fn place_particle<G: Clone, R: Rng + ?Sized>(
    rng: &mut R,
    canvas: Vec2,
    palette: &[G],
    existing: &[Particle<G>],
    sizes: Span,
    speeds: Span,
    params: &FieldParams,
) -> Option<Particle<G>> {
    let glyph = palette.choose(rng)?.clone();
    let mut size = rng.random_range(sizes.min..=sizes.max);
    let mut radius = params.hit_radius(size);

    let FieldParams {
        spacing,
        max_attempts,
        ..
    } = *params;

    let spot = match find_spot(rng, canvas, radius, existing, spacing, max_attempts) {
        Some(pos) => Some(pos),
        None => {
            // Shrink once and retry
            size = (size * params.shrink_factor).max(sizes.min);
            radius = params.hit_radius(size);
            find_spot(rng, canvas, radius, existing, spacing, max_attempts)
        }
    }?;

    let vel = random_velocity(rng, speeds);
    Some(Particle::new(glyph, spot, size, radius, vel))
}
