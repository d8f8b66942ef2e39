//! Glitch Runner - a phase-shifting endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, jump physics, collisions, scoring)
//! - `render`: Platform-neutral scene builder over simulation state
//! - `profile`: Player profile, missions, and ranking interfaces
//! - `theme`: Cosmetic theme catalog
//! - `settings`: Presentation preferences

pub mod profile;
pub mod render;
pub mod settings;
pub mod sim;
pub mod theme;

pub use settings::Settings;
pub use theme::{THEMES, Theme};

/// Game configuration constants
pub mod consts {
    /// Fixed logical timestep in milliseconds. Every tick advances game-state
    /// math by exactly this much, independent of wall time between callbacks.
    pub const TICK_MS: f32 = 16.0;

    /// Scroll speed at score 0 (world units per tick)
    pub const INITIAL_SPEED: f32 = 7.0;
    /// Scroll speed gained per point of score
    pub const SPEED_PER_SCORE: f32 = 0.02;
    /// Scroll speed cap
    pub const MAX_SPEED: f32 = 20.0;

    /// Player's fixed horizontal position as a fraction of viewport width
    pub const PLAYER_X_PERCENT: f32 = 0.15;
    pub const PLAYER_SIZE: f32 = 40.0;
    /// Ground line as a fraction of viewport height
    pub const GROUND_Y_PERCENT: f32 = 0.65;

    pub const OBSTACLE_WIDTH: f32 = 50.0;
    pub const OBSTACLE_HEIGHT: f32 = 80.0;
    /// Horizontal gap range between consecutive obstacles
    pub const MIN_OBSTACLE_GAP: f32 = 400.0;
    pub const MAX_OBSTACLE_GAP: f32 = 700.0;

    /// Downward acceleration per tick (downward-positive)
    pub const GRAVITY: f32 = 0.8;
    /// Vertical impulse applied when a jump charge is consumed
    pub const JUMP_FORCE: f32 = -16.0;
    /// Ground jump plus one mid-air jump
    pub const JUMP_CHARGES: u8 = 2;

    /// Chance a spawned obstacle is accompanied by a collectible
    pub const STAR_SPAWN_CHANCE: f64 = 0.6;
    /// Chance a spawned collectible is a power-up instead of a star
    pub const POWERUP_SPAWN_CHANCE: f64 = 0.08;
    /// Power-up duration in logical milliseconds
    pub const POWERUP_DURATION_MS: f32 = 8000.0;

    /// Magnet attraction radius around the player's center
    pub const MAGNET_RADIUS: f32 = 400.0;
    /// Fraction of the player-collectible vector closed per tick
    pub const MAGNET_PULL: f32 = 0.12;
    /// Pickup boxes are inflated by this margin on each side
    pub const PICKUP_MARGIN: f32 = 20.0;

    /// Entities are culled once fully left of this x coordinate
    pub const OFFSCREEN_X: f32 = -50.0;

    /// Combo gained per passed obstacle
    pub const COMBO_STEP: f32 = 0.1;
    pub const MAX_COMBO: f32 = 10.0;
}

/// Packed 0xRRGGBB color
pub type Color = u32;
