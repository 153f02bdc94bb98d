//! Fixed timestep simulation tick
//!
//! One pass each: integrate, walls, pairs, containment. Pairs are resolved
//! once per tick in index order without iterating to a fixed point, so a
//! tight cluster of three or more can keep some overlap into the next tick,
//! and fast particles can tunnel through each other between ticks.

use glam::Vec2;

use super::collision::{contain, pair_contact, resolve_walls, separate_pair};
use super::particle::Particle;

/// Events observed during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Wall contacts (one per clamped axis side)
    pub wall_hits: u32,
    /// Overlapping pairs that were separated
    pub pair_collisions: u32,
}

impl TickReport {
    pub fn merge(&mut self, other: TickReport) {
        self.wall_hits += other.wall_hits;
        self.pair_collisions += other.pair_collisions;
    }
}

/// Advance all particles by exactly `dt`
pub fn tick<G>(particles: &mut [Particle<G>], canvas: Vec2, padding: f32, dt: f32) -> TickReport {
    let mut report = TickReport::default();

    for p in particles.iter_mut() {
        p.pos += p.vel * dt;
        report.wall_hits += resolve_walls(p, canvas);
    }

    for i in 0..particles.len() {
        let (head, tail) = particles.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if let Some(contact) = pair_contact(a, b) {
                separate_pair(a, b, contact, padding);
                report.pair_collisions += 1;
            }
        }
    }

    for p in particles.iter_mut() {
        contain(p, canvas);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{SEPARATION_PADDING, TICK_INTERVAL};

    fn particle(x: f32, y: f32, radius: f32, vx: f32, vy: f32) -> Particle<&'static str> {
        Particle::new("o", Vec2::new(x, y), radius / 0.6, radius, Vec2::new(vx, vy))
    }

    #[test]
    fn test_integration_fixed_step() {
        let mut ps = vec![particle(100.0, 100.0, 10.0, 10.0, -5.0)];
        let report = tick(&mut ps, Vec2::new(400.0, 400.0), SEPARATION_PADDING, 0.5);
        assert_eq!(report, TickReport::default());
        assert!((ps[0].pos - Vec2::new(105.0, 97.5)).length() < 0.0001);
    }

    #[test]
    fn test_head_on_collision() {
        let canvas = Vec2::new(400.0, 400.0);
        let mut ps = vec![
            particle(100.0, 200.0, 36.0, 50.0, 0.0),
            particle(175.0, 200.0, 36.0, -50.0, 0.0),
        ];
        let before: Vec<Vec2> = ps.iter().map(|p| p.vel).collect();

        let report = tick(&mut ps, canvas, SEPARATION_PADDING, TICK_INTERVAL);
        assert_eq!(report.pair_collisions, 1);
        assert_eq!(ps[0].vel, -before[0]);
        assert_eq!(ps[1].vel, -before[1]);
        assert!(ps[0].pos.distance(ps[1].pos) >= 72.0);
    }

    #[test]
    fn test_single_pass_leaves_residual_overlap() {
        // (0, 1) is separated first, then (1, 2) pushes 1 back into 0
        let canvas = Vec2::new(1000.0, 1000.0);
        let mut ps = vec![
            particle(500.0, 500.0, 10.0, 0.0, 0.0),
            particle(515.0, 500.0, 10.0, 0.0, 0.0),
            particle(530.0, 500.0, 10.0, 0.0, 0.0),
        ];
        let report = tick(&mut ps, canvas, SEPARATION_PADDING, TICK_INTERVAL);
        assert_eq!(report.pair_collisions, 2);
        assert!((ps[0].pos.x - 496.5).abs() < 0.001);
        assert!((ps[1].pos.x - 513.25).abs() < 0.001);
        assert!((ps[2].pos.x - 535.25).abs() < 0.001);
        assert!(ps[0].pos.distance(ps[1].pos) < 20.0);
    }

    #[test]
    fn test_separation_never_escapes_canvas() {
        // Two particles overlapping in a corner get pushed into the wall
        let canvas = Vec2::new(200.0, 200.0);
        let mut ps = vec![
            particle(10.0, 100.0, 10.0, 0.0, 0.0),
            particle(12.0, 100.0, 10.0, 0.0, 0.0),
        ];
        tick(&mut ps, canvas, SEPARATION_PADDING, TICK_INTERVAL);
        for p in &ps {
            assert!(p.pos.x >= p.radius && p.pos.x <= canvas.x - p.radius);
        }
    }

    #[test]
    fn test_empty_and_single() {
        let mut none: Vec<Particle<&str>> = Vec::new();
        assert_eq!(tick(&mut none, Vec2::splat(100.0), 1.0, 0.06), TickReport::default());

        let mut one = vec![particle(50.0, 50.0, 10.0, 0.0, 0.0)];
        assert_eq!(tick(&mut one, Vec2::splat(100.0), 1.0, 0.06), TickReport::default());
    }
}
