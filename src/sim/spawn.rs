//! Procedural obstacle and collectible spawning
//!
//! One obstacle per consumed gap: the spawn-front tracker slides left with
//! the scroll, and once it collapses past the right edge a new obstacle is
//! placed one randomized gap ahead of the viewport. Spawn cadence therefore
//! speeds up with scroll speed.

use glam::Vec2;
use rand::Rng;

use super::state::{Collectible, CollectibleKind, GameState, Obstacle, Phase, PowerUpKind, Viewport};
use crate::consts::*;

/// Vertical band collectibles are scattered over, above the ground line.
/// The upper part of the band is only reachable with a jump.
const COLLECTIBLE_MIN_LIFT: f32 = 60.0;
const COLLECTIBLE_BAND: f32 = 200.0;

/// Emit a new obstacle (and maybe a collectible) once the previous gap has
/// been consumed by the scroll.
pub fn spawn_ahead(state: &mut GameState, view: Viewport) {
    if view.width - state.last_spawn_x <= 0.0 {
        return;
    }

    let gap = state.rng.random_range(MIN_OBSTACLE_GAP..MAX_OBSTACLE_GAP);
    let x = view.width + gap;
    let ground_y = view.ground_y();

    let phase = if state.rng.random_bool(0.5) {
        Phase::Blue
    } else {
        Phase::Orange
    };
    let id = state.next_entity_id();
    state.obstacles.push(Obstacle {
        id,
        pos: Vec2::new(x, ground_y - OBSTACLE_HEIGHT),
        size: Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
        phase,
        passed: false,
    });
    state.last_spawn_x = x;

    if state.rng.random_bool(STAR_SPAWN_CHANCE) {
        let kind = if state.rng.random_bool(POWERUP_SPAWN_CHANCE) {
            CollectibleKind::PowerUp(random_power_up(&mut state.rng))
        } else {
            CollectibleKind::Star
        };
        let lift = COLLECTIBLE_MIN_LIFT + state.rng.random_range(0.0..COLLECTIBLE_BAND);
        let id = state.next_entity_id();
        state.collectibles.push(Collectible {
            id,
            pos: Vec2::new(x + gap / 2.0, ground_y - lift),
            kind,
            collected: false,
        });
    }
}

/// Power-up subtype chosen uniformly from the three kinds
fn random_power_up(rng: &mut impl Rng) -> PowerUpKind {
    match rng.random_range(0..3u32) {
        0 => PowerUpKind::Magnet,
        1 => PowerUpKind::SlowMo,
        _ => PowerUpKind::Ghost,
    }
}
