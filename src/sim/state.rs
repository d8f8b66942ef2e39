//! Game state and core simulation types
//!
//! Everything the engine mutates during a run lives here. The engine owns all
//! of it exclusively; the host reads snapshots and never writes back.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::feedback::Feedback;
use crate::Color;
use crate::consts::*;

/// The two mutually exclusive phases. An obstacle is lethal only while its
/// phase matches the player's current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Blue,
    Orange,
}

impl Phase {
    pub fn flipped(self) -> Self {
        match self {
            Phase::Blue => Phase::Orange,
            Phase::Orange => Phase::Blue,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Phase::Blue => 0x00f2ff,
            Phase::Orange => 0xff8c00,
        }
    }
}

/// Engine lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Waiting for the host to start a run
    Idle,
    /// Active gameplay
    Playing,
    /// Run ended on a lethal collision
    GameOver,
}

/// Power-up kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    /// Pulls nearby collectibles toward the player
    Magnet,
    /// Halves the effective scroll speed
    SlowMo,
    /// Suspends lethality of phase-matching collisions
    Ghost,
}

/// A scrolling obstacle
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub phase: Phase,
    /// Scored exactly once, when the trailing edge crosses behind the player
    pub passed: bool,
}

impl Obstacle {
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectibleKind {
    /// Plain reward item
    Star,
    PowerUp(PowerUpKind),
}

/// A collectible, treated as a point for collision purposes
#[derive(Debug, Clone)]
pub struct Collectible {
    pub id: u32,
    pub pos: Vec2,
    pub kind: CollectibleKind,
    pub collected: bool,
}

/// Player runtime state. Horizontal position is a fixed viewport fraction;
/// the world scrolls underneath.
#[derive(Debug, Clone, Default)]
pub struct Player {
    /// Top edge of the player box
    pub y: f32,
    pub vy: f32,
    pub grounded: bool,
    /// Jump charges consumed since last grounding
    pub jumps_used: u8,
}

/// A particle for visual effects
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 0-1, decreases over time
    pub life: f32,
    pub color: Color,
}

/// Maximum particles
pub const MAX_PARTICLES: usize = 256;

/// Viewport dimensions supplied by the host every tick. The engine does not
/// own window sizing.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Negative or zero dimensions cannot arise from legitimate host usage.
    pub fn new(width: f32, height: f32) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "viewport dimensions must be positive"
        );
        Self { width, height }
    }

    pub fn ground_y(&self) -> f32 {
        self.height * GROUND_Y_PERCENT
    }

    pub fn player_x(&self) -> f32 {
        self.width * PLAYER_X_PERCENT
    }
}

/// Complete engine state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub status: RunStatus,
    /// Logical ticks elapsed this run
    pub time_ticks: u64,
    pub current_phase: Phase,
    pub score: u64,
    /// Score multiplier, bounded [1, 10]
    pub combo: f32,
    pub distance: f32,
    /// Current scroll speed, derived from score each tick
    pub speed: f32,
    /// Reward items collected this run
    pub stars_collected: u32,
    /// Phase toggles this run
    pub phase_switches: u32,
    /// At most one active power-up at a time
    pub active_power_up: Option<PowerUpKind>,
    /// Remaining duration in logical milliseconds
    pub power_up_timer_ms: f32,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub collectibles: Vec<Collectible>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    pub feedback: Feedback,
    /// Spawn-front tracker, decremented by scroll speed each tick
    pub(crate) last_spawn_x: f32,
    /// Dust particle color, fed from the active theme by the host
    pub player_color: Color,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create an idle engine with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            status: RunStatus::Idle,
            time_ticks: 0,
            current_phase: Phase::Blue,
            score: 0,
            combo: 1.0,
            distance: 0.0,
            speed: INITIAL_SPEED,
            stars_collected: 0,
            phase_switches: 0,
            active_power_up: None,
            power_up_timer_ms: 0.0,
            player: Player::default(),
            obstacles: Vec::new(),
            collectibles: Vec::new(),
            particles: Vec::new(),
            feedback: Feedback::default(),
            last_spawn_x: 0.0,
            player_color: 0xffffff,
            next_id: 1,
        }
    }

    /// Reset all run state and enter gameplay. Exactly one lifecycle per run:
    /// score, combo, field, timers and feedback all start from defaults.
    pub fn start_run(&mut self, view: Viewport) {
        self.status = RunStatus::Playing;
        self.time_ticks = 0;
        self.current_phase = Phase::Blue;
        self.score = 0;
        self.combo = 1.0;
        self.distance = 0.0;
        self.speed = INITIAL_SPEED;
        self.stars_collected = 0;
        self.phase_switches = 0;
        self.active_power_up = None;
        self.power_up_timer_ms = 0.0;
        self.player = Player {
            y: view.ground_y() - PLAYER_SIZE,
            vy: 0.0,
            grounded: true,
            jumps_used: 0,
        };
        self.obstacles.clear();
        self.collectibles.clear();
        self.particles.clear();
        self.feedback = Feedback::default();
        self.last_spawn_x = view.width;
        log::debug!("run start (seed {})", self.seed);
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Push a particle, dropping the oldest once the pool is full
    pub fn push_particle(&mut self, particle: Particle) {
        if self.particles.len() >= MAX_PARTICLES {
            self.particles.remove(0);
        }
        self.particles.push(particle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_run_resets_everything() {
        let view = Viewport::new(1280.0, 720.0);
        let mut state = GameState::new(7);
        state.start_run(view);

        state.score = 42;
        state.combo = 3.4;
        state.stars_collected = 5;
        state.active_power_up = Some(PowerUpKind::Ghost);
        state.power_up_timer_ms = 1000.0;
        state.feedback.camera_shake = 9.0;
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            pos: Vec2::new(500.0, 0.0),
            size: Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            phase: Phase::Orange,
            passed: true,
        });

        state.start_run(view);
        assert_eq!(state.status, RunStatus::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.combo, 1.0);
        assert_eq!(state.stars_collected, 0);
        assert_eq!(state.active_power_up, None);
        assert_eq!(state.feedback.camera_shake, 0.0);
        assert!(state.obstacles.is_empty());
        assert!(state.player.grounded);
        assert_eq!(state.player.y, view.ground_y() - PLAYER_SIZE);
        assert_eq!(state.last_spawn_x, view.width);
    }

    #[test]
    fn particle_pool_drops_oldest() {
        let mut state = GameState::new(1);
        for i in 0..(MAX_PARTICLES + 10) {
            state.push_particle(Particle {
                pos: Vec2::new(i as f32, 0.0),
                vel: Vec2::ZERO,
                life: 1.0,
                color: 0xffffff,
            });
        }
        assert_eq!(state.particles.len(), MAX_PARTICLES);
        assert_eq!(state.particles[0].pos.x, 10.0);
    }

    #[test]
    #[should_panic(expected = "viewport dimensions must be positive")]
    fn negative_viewport_is_a_programming_error() {
        Viewport::new(-100.0, 720.0);
    }
}
