//! Decaying visual-feedback state
//!
//! Three independent scalars pushed upward by simulation events and decayed
//! toward zero every tick. The renderer consumes them read-only: camera shake
//! becomes a jitter offset, glitch intensity drives the player's RGB-split
//! echo, and phase flash tints the screen and widens the player glow.

/// Camera shake set on a phase toggle
pub const SHAKE_ON_TOGGLE: f32 = 15.0;
/// Camera shake set on a power-up pickup
pub const SHAKE_ON_POWERUP: f32 = 10.0;
/// Camera shake decay per tick
pub const SHAKE_DECAY: f32 = 0.5;
/// Glitch intensity gained per non-lethal obstacle pass-through
pub const GLITCH_PER_PASS: f32 = 0.1;
/// Glitch intensity decay per tick
pub const GLITCH_DECAY: f32 = 0.05;
/// Phase flash decay per tick
pub const FLASH_DECAY: f32 = 0.04;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Feedback {
    pub camera_shake: f32,
    /// Bounded [0, 1]
    pub glitch: f32,
    /// Bounded [0, 1]
    pub phase_flash: f32,
}

impl Feedback {
    pub fn on_phase_toggle(&mut self) {
        self.camera_shake = SHAKE_ON_TOGGLE;
        self.glitch = 1.0;
        self.phase_flash = 1.0;
    }

    pub fn on_power_up(&mut self) {
        self.camera_shake = SHAKE_ON_POWERUP;
    }

    /// Non-lethal obstacle pass-through (phase mismatch or ghost assist)
    pub fn on_pass_through(&mut self) {
        self.glitch = (self.glitch + GLITCH_PER_PASS).min(1.0);
    }

    /// Linear decay toward zero, floored at 0
    pub fn decay(&mut self) {
        self.camera_shake = (self.camera_shake - SHAKE_DECAY).max(0.0);
        self.glitch = (self.glitch - GLITCH_DECAY).max(0.0);
        self.phase_flash = (self.phase_flash - FLASH_DECAY).max(0.0);
    }
}
