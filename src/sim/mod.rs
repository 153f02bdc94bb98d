//! Deterministic simulation module
//!
//! All particle logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (placement order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod field;
pub mod params;
pub mod particle;
pub mod placement;
pub mod tick;

pub use collision::{PairContact, contain, pair_contact, resolve_walls, separate_pair};
pub use field::{FieldPhase, ParticleField};
pub use params::{FieldParams, Span};
pub use particle::{Particle, ParticleView};
pub use placement::{find_spot, place_particle, random_velocity};
pub use tick::{TickReport, tick};
