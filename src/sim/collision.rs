//! Collision detection and response
//!
//! Walls: hard clamp plus velocity sign correction, no restitution.
//! Pairs: circles pushed apart along the center normal, and both velocities
//! are negated outright (no impulse exchange along the normal).

use glam::Vec2;

use super::particle::Particle;

/// Overlap between two particles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairContact {
    /// Unit normal pointing from the first particle to the second
    pub normal: Vec2,
    /// Sum of radii minus center distance (always > 0)
    pub overlap: f32,
}

/// Clamp a particle inside the canvas and point its velocity back inward
///
/// Returns the number of wall contacts (0-2 in practice).
pub fn resolve_walls<G>(p: &mut Particle<G>, canvas: Vec2) -> u32 {
    let mut hits = 0;
    let r = p.radius;

    if p.pos.x < r {
        p.pos.x = r;
        p.vel.x = p.vel.x.abs();
        hits += 1;
    }
    if p.pos.x > canvas.x - r {
        p.pos.x = canvas.x - r;
        p.vel.x = -p.vel.x.abs();
        hits += 1;
    }
    if p.pos.y < r {
        p.pos.y = r;
        p.vel.y = p.vel.y.abs();
        hits += 1;
    }
    if p.pos.y > canvas.y - r {
        p.pos.y = canvas.y - r;
        p.vel.y = -p.vel.y.abs();
        hits += 1;
    }

    hits
}

/// Position-only clamp, applied after pairwise separation
pub fn contain<G>(p: &mut Particle<G>, canvas: Vec2) {
    let r = p.radius;
    p.pos.x = p.pos.x.max(r).min(canvas.x - r);
    p.pos.y = p.pos.y.max(r).min(canvas.y - r);
}

/// Check whether two particles overlap
///
/// Coincident centers get the normal `(1, 0)`.
pub fn pair_contact<G>(a: &Particle<G>, b: &Particle<G>) -> Option<PairContact> {
    let delta = b.pos - a.pos;
    let dist = delta.length();
    let min_dist = a.radius + b.radius;

    if dist >= min_dist {
        return None;
    }

    let normal = if dist > 0.0 { delta / dist } else { Vec2::X };
    Some(PairContact {
        normal,
        overlap: min_dist - dist,
    })
}

/// Push both particles apart by `overlap / 2 + padding` and negate both velocities
pub fn separate_pair<G>(
    a: &mut Particle<G>,
    b: &mut Particle<G>,
    contact: PairContact,
    padding: f32,
) {
    let push = contact.normal * (contact.overlap / 2.0 + padding);
    a.pos -= push;
    b.pos += push;

    a.vel = -a.vel;
    b.vel = -b.vel;
}
