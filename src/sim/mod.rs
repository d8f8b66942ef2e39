//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed logical timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod feedback;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{PlayerBox, aabb_overlap};
pub use feedback::Feedback;
pub use state::{
    Collectible, CollectibleKind, GameState, MAX_PARTICLES, Obstacle, Particle, Phase, Player,
    PowerUpKind, RunStatus, Viewport,
};
pub use tick::{GameEvent, TickInput, tick};
