//! Collision detection and resolution
//!
//! Axis-aligned box tests between the player and the scrolling field. Within
//! one tick collectibles resolve before obstacles, and both use the player
//! box computed once at the start of the tick.

use glam::Vec2;

use super::state::{CollectibleKind, GameState, PowerUpKind, RunStatus};
use super::tick::GameEvent;
use crate::consts::*;

/// Axis-aligned overlap test between two boxes given by top-left and size
pub fn aabb_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x < b_pos.x + b_size.x
        && a_pos.x + a_size.x > b_pos.x
        && a_pos.y < b_pos.y + b_size.y
        && a_pos.y + a_size.y > b_pos.y
}

/// The player's bounding box, fixed for the duration of one tick
#[derive(Debug, Clone, Copy)]
pub struct PlayerBox {
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
}

impl PlayerBox {
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    /// Forgiving overlap test against a collectible's point position: both
    /// sides are inflated by the pickup margin.
    pub fn touches_collectible(&self, c: Vec2) -> bool {
        self.pos.x < c.x + PICKUP_MARGIN
            && self.pos.x + self.size > c.x - PICKUP_MARGIN
            && self.pos.y < c.y + PICKUP_MARGIN
            && self.pos.y + self.size > c.y - PICKUP_MARGIN
    }
}

/// Scroll, attract and collect collectibles. Power-up pickups preempt any
/// active power-up and restart the duration timer.
pub fn resolve_collectibles(state: &mut GameState, pbox: &PlayerBox, events: &mut Vec<GameEvent>) {
    let speed = state.speed;
    let magnet = state.active_power_up == Some(PowerUpKind::Magnet);
    let center = pbox.center();

    let mut stars = 0u32;
    let mut picked = Vec::new();

    state.collectibles.retain_mut(|c| {
        c.pos.x -= speed;

        if magnet {
            let delta = center - c.pos;
            if delta.length() < MAGNET_RADIUS {
                // Exponential approach, not snapping
                c.pos += delta * MAGNET_PULL;
            }
        }

        if !c.collected && pbox.touches_collectible(c.pos) {
            c.collected = true;
            match c.kind {
                CollectibleKind::Star => stars += 1,
                CollectibleKind::PowerUp(kind) => picked.push(kind),
            }
            return false;
        }
        c.pos.x > OFFSCREEN_X
    });

    state.stars_collected += stars;
    for kind in picked {
        state.active_power_up = Some(kind);
        state.power_up_timer_ms = POWERUP_DURATION_MS;
        state.feedback.on_power_up();
        events.push(GameEvent::ScoreChanged {
            score: state.score,
            combo: state.combo.floor() as u32,
            power_up: state.active_power_up,
        });
    }
}

/// Scroll obstacles, apply the phase-matching lethality rule, and score each
/// obstacle exactly once when its trailing edge crosses behind the player.
pub fn resolve_obstacles(state: &mut GameState, pbox: &PlayerBox, events: &mut Vec<GameEvent>) {
    let speed = state.speed;
    let ghost = state.active_power_up == Some(PowerUpKind::Ghost);
    let player_phase = state.current_phase;

    let mut obstacles = std::mem::take(&mut state.obstacles);
    let mut i = 0;
    while i < obstacles.len() {
        let obs = &mut obstacles[i];
        obs.pos.x -= speed;

        if aabb_overlap(pbox.pos, Vec2::splat(pbox.size), obs.pos, obs.size) {
            if obs.phase == player_phase && !ghost {
                // Lethal: terminal transition, not an error
                log::info!(
                    "lethal collision at score {} ({} stars)",
                    state.score,
                    state.stars_collected
                );
                obstacles.remove(i);
                state.status = RunStatus::GameOver;
                events.push(GameEvent::RunEnded {
                    score: state.score,
                    stars: state.stars_collected,
                });
                break;
            }
            // Phase mismatch or ghost assist: pass straight through
            state.feedback.on_pass_through();
        }

        if !obs.passed && obs.right() < pbox.pos.x {
            obs.passed = true;
            state.combo = (state.combo + COMBO_STEP).min(MAX_COMBO);
            state.score += state.combo.floor() as u64;
            events.push(GameEvent::ScoreChanged {
                score: state.score,
                combo: state.combo.floor() as u32,
                power_up: state.active_power_up,
            });
        }

        if obs.right() > OFFSCREEN_X {
            i += 1;
        } else {
            obstacles.remove(i);
        }
    }
    state.obstacles = obstacles;
}
