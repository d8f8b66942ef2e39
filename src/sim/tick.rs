//! Fixed-step tick driver
//!
//! Advances one logical 16 ms step: input consumption → physics → power-up
//! timer → speed/distance → spawn → particles → collectible resolution →
//! obstacle resolution → feedback decay. Outbound snapshots are returned as
//! events, emitted only when something changed and never after game over.

use glam::Vec2;
use rand::Rng;

use super::collision::{self, PlayerBox};
use super::physics;
use super::spawn;
use super::state::{GameState, Particle, PowerUpKind, RunStatus, Viewport};
use crate::consts::*;

/// Host input latched since the previous tick. The host increments the jump
/// counter and flips the toggle flag; the engine consumes both here.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump attempts queued by the host, consumed against the charge pool
    pub jump_requests: u32,
    /// Flip the player's phase this tick
    pub toggle_phase: bool,
}

/// Outbound notification to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Score, floored combo and active power-up snapshot
    ScoreChanged {
        score: u64,
        combo: u32,
        power_up: Option<PowerUpKind>,
    },
    /// Terminal: lethal collision ended the run
    RunEnded { score: u64, stars: u32 },
}

/// Advance the run by one fixed logical step. No-op unless playing.
pub fn tick(state: &mut GameState, input: &TickInput, view: Viewport) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.status != RunStatus::Playing {
        return events;
    }

    state.time_ticks += 1;

    if input.toggle_phase {
        state.current_phase = state.current_phase.flipped();
        state.phase_switches += 1;
        state.feedback.on_phase_toggle();
        spawn_phase_burst(state, view);
    }

    for _ in 0..input.jump_requests {
        if physics::request_jump(state) {
            spawn_jump_dust(state, view);
        }
    }

    physics::integrate(state, view);

    // Power-up duration is logical time, not wall clock
    if state.active_power_up.is_some() {
        state.power_up_timer_ms -= TICK_MS;
        if state.power_up_timer_ms <= 0.0 {
            state.active_power_up = None;
            events.push(GameEvent::ScoreChanged {
                score: state.score,
                combo: state.combo.floor() as u32,
                power_up: None,
            });
        }
    }

    // Speed ramp is deliberately flat so skilled play can outrun it
    let slow_mo = if state.active_power_up == Some(PowerUpKind::SlowMo) {
        0.5
    } else {
        1.0
    };
    state.speed = ((INITIAL_SPEED + state.score as f32 * SPEED_PER_SCORE) * slow_mo).min(MAX_SPEED);
    state.distance += state.speed;

    spawn::spawn_ahead(state, view);

    for p in state.particles.iter_mut() {
        p.pos += p.vel;
        p.life -= 0.02;
    }
    state.particles.retain(|p| p.life > 0.0);

    // Player box is fixed for the rest of the tick
    let pbox = PlayerBox {
        pos: Vec2::new(view.player_x(), state.player.y),
        size: PLAYER_SIZE,
    };

    collision::resolve_collectibles(state, &pbox, &mut events);
    collision::resolve_obstacles(state, &pbox, &mut events);

    state.feedback.decay();
    state.last_spawn_x -= state.speed;

    events
}

/// Outward burst of 20 particles in the new phase's color
fn spawn_phase_burst(state: &mut GameState, view: Viewport) {
    let color = state.current_phase.color();
    let origin = Vec2::new(
        view.player_x() + PLAYER_SIZE / 2.0,
        state.player.y + PLAYER_SIZE / 2.0,
    );
    for _ in 0..20 {
        let vel = Vec2::new(
            state.rng.random_range(-0.5..0.5) * 15.0,
            state.rng.random_range(-0.5..0.5) * 15.0,
        );
        state.push_particle(Particle {
            pos: origin,
            vel,
            life: 1.0,
            color,
        });
    }
}

/// Short-lived dust kicked up at the player's feet, in the theme color
fn spawn_jump_dust(state: &mut GameState, view: Viewport) {
    let color = state.player_color;
    let origin = Vec2::new(
        view.player_x() + PLAYER_SIZE / 2.0,
        state.player.y + PLAYER_SIZE,
    );
    for _ in 0..10 {
        let vel = Vec2::new(
            state.rng.random_range(-0.5..0.5) * 5.0,
            state.rng.random_range(-0.5..0.5) * 2.0,
        );
        state.push_particle(Particle {
            pos: origin,
            vel,
            life: 0.8,
            color,
        });
    }
}
