//! Scene builder: game state in, draw list out

use glam::Vec2;

use crate::Color;
use crate::consts::PLAYER_SIZE;
use crate::settings::Settings;
use crate::sim::{CollectibleKind, GameState, PowerUpKind, Viewport};
use crate::theme::Theme;

/// Horizontal displacement of the glitch echo copies at full glitch
const GLITCH_ECHO_OFFSET: f32 = 15.0;
/// Side length of a particle quad
const PARTICLE_SIZE: f32 = 4.0;
/// Ground line thickness
const GROUND_THICKNESS: f32 = 2.0;

/// Full-screen color overlay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint {
    pub color: Color,
    pub alpha: f32,
}

/// A single draw primitive. Coordinates are world-space; the host applies
/// `camera_offset` before rasterizing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sprite {
    Rect {
        pos: Vec2,
        size: Vec2,
        color: Color,
        alpha: f32,
        /// Glow radius in world units, zero for none
        glow: f32,
    },
    /// Five-pointed star centered on `pos`
    Star {
        pos: Vec2,
        radius: f32,
        color: Color,
        glow: f32,
    },
    /// Small square used for particles
    Dot {
        pos: Vec2,
        size: f32,
        color: Color,
        alpha: f32,
    },
}

/// One frame's worth of drawing, back to front
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub camera_offset: Vec2,
    /// Overlay applied after all sprites, present during a phase flash
    pub phase_tint: Option<Tint>,
    pub sprites: Vec<Sprite>,
}

fn power_up_color(kind: PowerUpKind) -> Color {
    match kind {
        PowerUpKind::Magnet => 0xff00ff,
        PowerUpKind::SlowMo => 0x00ffff,
        PowerUpKind::Ghost => 0x8888ff,
    }
}

/// Deterministic shake jitter in [-1, 1], derived from the tick counter so
/// replays of the same run shake identically
fn shake_jitter(time_ticks: u64, axis: u64) -> f32 {
    let h = (time_ticks.wrapping_add(axis * 7919)).wrapping_mul(2654435761);
    let h = (h ^ (h >> 16)) & 0xffff;
    h as f32 / 32767.5 - 1.0
}

/// Build the draw list for the current state. Pure: does not advance the
/// simulation or touch its RNG.
pub fn build_scene(state: &GameState, theme: &Theme, settings: &Settings, view: Viewport) -> Scene {
    let mut scene = Scene::default();

    let shake = state.feedback.camera_shake;
    if shake > 0.0 && settings.effective_screen_shake() {
        scene.camera_offset = Vec2::new(
            shake_jitter(state.time_ticks, 0) * shake,
            shake_jitter(state.time_ticks, 1) * shake,
        );
    }

    if state.feedback.phase_flash > 0.0 && settings.effective_phase_flash() {
        scene.phase_tint = Some(Tint {
            color: state.current_phase.color(),
            alpha: state.feedback.phase_flash * 0.15,
        });
    }

    scene.sprites.push(Sprite::Rect {
        pos: Vec2::new(0.0, view.ground_y()),
        size: Vec2::new(view.width, GROUND_THICKNESS),
        color: state.current_phase.color(),
        alpha: 1.0,
        glow: 8.0,
    });

    let ghost = state.active_power_up == Some(PowerUpKind::Ghost);
    let glitch = state.feedback.glitch;
    for obstacle in &state.obstacles {
        let color = obstacle.phase.color();
        // Solid obstacles can kill; phased-out ones read as holograms
        let solid = obstacle.phase == state.current_phase && !ghost;
        let (alpha, glow) = if solid { (1.0, 15.0) } else { (0.2, 0.0) };

        if glitch > 0.0 {
            let offset = Vec2::new(GLITCH_ECHO_OFFSET * glitch, 0.0);
            for (echo_color, dir) in [(0xff0000u32, -1.0f32), (0x00ffff, 1.0)] {
                scene.sprites.push(Sprite::Rect {
                    pos: obstacle.pos + offset * dir,
                    size: obstacle.size,
                    color: echo_color,
                    alpha: 0.3 * glitch * alpha,
                    glow: 0.0,
                });
            }
        }
        scene.sprites.push(Sprite::Rect {
            pos: obstacle.pos,
            size: obstacle.size,
            color,
            alpha,
            glow,
        });
    }

    for c in &state.collectibles {
        match c.kind {
            CollectibleKind::Star => scene.sprites.push(Sprite::Star {
                pos: c.pos,
                radius: 12.0,
                color: 0xffd700,
                glow: 10.0,
            }),
            CollectibleKind::PowerUp(kind) => scene.sprites.push(Sprite::Rect {
                pos: c.pos - Vec2::splat(12.0),
                size: Vec2::splat(24.0),
                color: power_up_color(kind),
                alpha: 1.0,
                glow: 12.0,
            }),
        }
    }

    let player_pos = Vec2::new(view.player_x(), state.player.y);
    let player_alpha = if ghost { 0.5 } else { 1.0 };
    scene.sprites.push(Sprite::Rect {
        pos: player_pos,
        size: Vec2::splat(PLAYER_SIZE),
        color: theme.player_color,
        alpha: player_alpha,
        glow: 20.0 + state.feedback.phase_flash * 40.0,
    });
    // White core inset, a quarter of the body on each side
    scene.sprites.push(Sprite::Rect {
        pos: player_pos + Vec2::splat(PLAYER_SIZE * 0.25),
        size: Vec2::splat(PLAYER_SIZE * 0.5),
        color: 0xffffff,
        alpha: player_alpha,
        glow: 0.0,
    });

    if settings.particles {
        for p in &state.particles {
            scene.sprites.push(Sprite::Dot {
                pos: p.pos,
                size: PARTICLE_SIZE,
                color: p.color,
                alpha: p.life.clamp(0.0, 1.0),
            });
        }
    }

    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Obstacle, Particle, Phase};
    use crate::theme::theme_by_id;

    fn view() -> Viewport {
        Viewport::new(1280.0, 720.0)
    }

    fn playing_state() -> GameState {
        let mut state = GameState::new(9);
        state.start_run(view());
        state.obstacles.clear();
        state.collectibles.clear();
        state
    }

    fn rect_count(scene: &Scene) -> usize {
        scene
            .sprites
            .iter()
            .filter(|s| matches!(s, Sprite::Rect { .. }))
            .count()
    }

    #[test]
    fn glitch_adds_two_echoes_per_obstacle() {
        let mut state = playing_state();
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            pos: Vec2::new(600.0, 400.0),
            size: Vec2::new(50.0, 80.0),
            phase: Phase::Blue,
            passed: false,
        });
        let theme = theme_by_id("classic");
        let settings = Settings::default();

        let calm = build_scene(&state, theme, &settings, view());
        state.feedback.glitch = 1.0;
        let glitched = build_scene(&state, theme, &settings, view());
        assert_eq!(rect_count(&glitched), rect_count(&calm) + 2);
    }

    #[test]
    fn mismatched_obstacle_reads_as_hologram() {
        let mut state = playing_state();
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            pos: Vec2::new(600.0, 400.0),
            size: Vec2::new(50.0, 80.0),
            phase: Phase::Orange,
            passed: false,
        });
        let scene = build_scene(
            &state,
            theme_by_id("classic"),
            &Settings::default(),
            view(),
        );
        let hologram = scene.sprites.iter().any(|s| {
            matches!(s, Sprite::Rect { alpha, glow, .. } if (*alpha - 0.2).abs() < 1e-6 && *glow == 0.0)
        });
        assert!(hologram);
    }

    #[test]
    fn reduced_motion_pins_camera_and_drops_tint() {
        let mut state = playing_state();
        state.feedback.on_phase_toggle();
        let settings = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        let scene = build_scene(&state, theme_by_id("classic"), &settings, view());
        assert_eq!(scene.camera_offset, Vec2::ZERO);
        assert!(scene.phase_tint.is_none());

        let loud = build_scene(
            &state,
            theme_by_id("classic"),
            &Settings::default(),
            view(),
        );
        assert_ne!(loud.camera_offset, Vec2::ZERO);
        assert!(loud.phase_tint.is_some());
    }

    #[test]
    fn particles_toggle_controls_dots() {
        let mut state = playing_state();
        state.push_particle(Particle {
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::ZERO,
            life: 0.5,
            color: 0xffffff,
        });
        let with = build_scene(
            &state,
            theme_by_id("classic"),
            &Settings::default(),
            view(),
        );
        assert!(with.sprites.iter().any(|s| matches!(s, Sprite::Dot { .. })));

        let settings = Settings {
            particles: false,
            ..Default::default()
        };
        let without = build_scene(&state, theme_by_id("classic"), &settings, view());
        assert!(
            !without
                .sprites
                .iter()
                .any(|s| matches!(s, Sprite::Dot { .. }))
        );
    }

    #[test]
    fn ghost_halves_player_alpha() {
        let mut state = playing_state();
        state.active_power_up = Some(PowerUpKind::Ghost);
        let scene = build_scene(
            &state,
            theme_by_id("classic"),
            &Settings::default(),
            view(),
        );
        let player = scene.sprites.iter().any(|s| {
            matches!(s, Sprite::Rect { alpha, size, .. }
                if *alpha == 0.5 && *size == Vec2::splat(PLAYER_SIZE))
        });
        assert!(player);
    }
}
