//! Vertical jump physics
//!
//! Grounded/airborne integration with a two-charge jump pool (ground jump
//! plus one mid-air jump). Gravity and impulse are tuned per-tick constants,
//! not derived quantities.

use super::state::{GameState, RunStatus, Viewport};
use crate::consts::*;

/// Attempt to consume one jump charge. Ignored when no charges remain or the
/// run is not in progress. Returns whether the jump happened.
pub fn request_jump(state: &mut GameState) -> bool {
    if state.status != RunStatus::Playing {
        return false;
    }
    if state.player.jumps_used >= JUMP_CHARGES {
        return false;
    }
    state.player.vy = JUMP_FORCE;
    state.player.jumps_used += 1;
    state.player.grounded = false;
    true
}

/// Integrate one tick of vertical motion. Landing clamps to the ground line,
/// zeroes velocity and replenishes the jump pool.
pub fn integrate(state: &mut GameState, view: Viewport) {
    let landing_y = view.ground_y() - PLAYER_SIZE;
    let p = &mut state.player;

    if p.grounded {
        p.y = landing_y;
        p.jumps_used = 0;
        return;
    }

    p.vy += GRAVITY;
    p.y += p.vy;
    if p.y >= landing_y {
        p.y = landing_y;
        p.vy = 0.0;
        p.grounded = true;
        p.jumps_used = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn playing_state(view: Viewport) -> GameState {
        let mut state = GameState::new(1);
        state.start_run(view);
        state
    }

    #[test]
    fn jump_consumes_charges_and_leaves_ground() {
        let view = Viewport::new(1280.0, 720.0);
        let mut state = playing_state(view);

        assert!(request_jump(&mut state));
        assert!(!state.player.grounded);
        assert_eq!(state.player.vy, JUMP_FORCE);
        assert_eq!(state.player.jumps_used, 1);

        // Second request mid-air still succeeds (double jump)
        assert!(request_jump(&mut state));
        assert_eq!(state.player.jumps_used, 2);

        // Third is rejected until grounded
        let before = state.player.clone();
        assert!(!request_jump(&mut state));
        assert_eq!(state.player.vy, before.vy);
        assert_eq!(state.player.jumps_used, before.jumps_used);
    }

    #[test]
    fn jump_ignored_outside_playing() {
        let view = Viewport::new(1280.0, 720.0);
        let mut state = playing_state(view);
        state.status = RunStatus::GameOver;
        assert!(!request_jump(&mut state));
        assert!(state.player.grounded);
    }

    #[test]
    fn landing_replenishes_charges() {
        let view = Viewport::new(1280.0, 720.0);
        let mut state = playing_state(view);
        request_jump(&mut state);
        request_jump(&mut state);

        // Integrate until the clamp triggers
        for _ in 0..200 {
            integrate(&mut state, view);
            if state.player.grounded {
                break;
            }
        }
        assert!(state.player.grounded);
        assert_eq!(state.player.vy, 0.0);
        assert_eq!(state.player.y, view.ground_y() - PLAYER_SIZE);
        assert_eq!(state.player.jumps_used, 0);
        assert!(request_jump(&mut state));
    }

    proptest! {
        /// While airborne and above the clamp, velocity increases by exactly
        /// the gravity constant and position tracks the updated velocity.
        #[test]
        fn airborne_step_matches_gravity(vy in -20.0f32..10.0, y in 0.0f32..200.0) {
            let view = Viewport::new(1280.0, 720.0);
            let mut state = playing_state(view);
            state.player.grounded = false;
            state.player.vy = vy;
            state.player.y = y;

            integrate(&mut state, view);

            let expected_vy = vy + GRAVITY;
            let expected_y = y + expected_vy;
            if expected_y < view.ground_y() - PLAYER_SIZE {
                prop_assert_eq!(state.player.vy, expected_vy);
                prop_assert_eq!(state.player.y, expected_y);
                prop_assert!(!state.player.grounded);
            } else {
                prop_assert!(state.player.grounded);
                prop_assert_eq!(state.player.vy, 0.0);
            }
        }
    }
}
