//! Headless demo host
//!
//! Runs an autopiloted run at the fixed logical timestep, feeding finished
//! runs into the local profile store. Useful for watching the engine via logs
//! and for profiling without a display.
//!
//! Usage: glitch-runner [seed] [max-ticks]

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use glitch_runner::consts::*;
use glitch_runner::profile::{LocalStore, ProfileStore, Ranking, RunSummary, UserProfile, daily_missions};
use glitch_runner::render::build_scene;
use glitch_runner::settings::Settings;
use glitch_runner::sim::{GameEvent, GameState, PowerUpKind, RunStatus, TickInput, Viewport, tick};
use glitch_runner::theme::theme_by_id;

/// How far ahead the autopilot looks for a lethal obstacle before shifting
const AUTOPILOT_HORIZON: f32 = 300.0;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0x5eed)
        });
    let max_ticks: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(18_000);

    let view = Viewport::new(1280.0, 720.0);
    let settings = Settings::load_from("settings.json");
    let mut store = LocalStore::open("profiles.json");

    let mut profile = store
        .load("autopilot")
        .unwrap_or_else(|| UserProfile::new("autopilot"));
    if profile.missions.is_empty() {
        let mut mission_rng = Pcg32::seed_from_u64(seed ^ 0xda11);
        profile.missions = daily_missions(&mut mission_rng);
    }
    let theme = theme_by_id(&profile.active_theme_id);

    let mut state = GameState::new(seed);
    state.player_color = theme.player_color;
    state.start_run(view);
    log::info!("run started: seed {seed}, up to {max_ticks} ticks");

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut next_tick = Instant::now();

    while state.status == RunStatus::Playing && state.time_ticks < max_ticks {
        let input = autopilot(&state, view);
        for event in tick(&mut state, &input, view) {
            match event {
                GameEvent::ScoreChanged {
                    score,
                    combo,
                    power_up,
                } => {
                    log::info!("score {score}  x{combo}  power-up {power_up:?}");
                }
                GameEvent::RunEnded { score, stars } => {
                    log::info!("run over: score {score}, {stars} stars");
                }
            }
        }

        if state.time_ticks % 600 == 0 {
            let scene = build_scene(&state, theme, &settings, view);
            log::debug!(
                "t={} sprites={} speed={:.1} distance={:.0}",
                state.time_ticks,
                scene.sprites.len(),
                state.speed,
                state.distance,
            );
        }

        next_tick += tick_duration;
        if let Some(sleep) = next_tick.checked_duration_since(Instant::now()) {
            std::thread::sleep(sleep);
        }
    }

    let summary = RunSummary {
        final_score: state.score,
        stars_collected: state.stars_collected,
        phase_switches: state.phase_switches,
    };
    profile.apply_run(&summary);
    store.persist(&profile);

    log::info!(
        "final: score {} stars {} switches {} high {}",
        summary.final_score,
        summary.stars_collected,
        summary.phase_switches,
        profile.high_score,
    );
    for (rank, entry) in store.top(5).iter().enumerate() {
        log::info!("  #{} {} — {}", rank + 1, entry.username, entry.high_score);
    }
}

/// Minimal reactive pilot: phase-shift away from the nearest lethal obstacle,
/// jump at airborne collectibles when grounded.
fn autopilot(state: &GameState, view: Viewport) -> TickInput {
    let px = view.player_x();
    let ghost = state.active_power_up == Some(PowerUpKind::Ghost);

    let threat = !ghost
        && state.obstacles.iter().any(|o| {
            !o.passed
                && o.phase == state.current_phase
                && o.pos.x > px
                && o.pos.x - px < AUTOPILOT_HORIZON
        });

    let player_center = Vec2::new(px + PLAYER_SIZE / 2.0, state.player.y + PLAYER_SIZE / 2.0);
    let prize_overhead = state.collectibles.iter().any(|c| {
        !c.collected
            && (c.pos.x - player_center.x).abs() < 120.0
            && c.pos.y < player_center.y - PLAYER_SIZE
    });

    TickInput {
        jump_requests: u32::from(state.player.grounded && prize_overhead),
        toggle_phase: threat,
    }
}
