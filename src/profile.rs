//! Player profile, missions, and ranking
//!
//! The simulation core knows nothing of any of this. Hosts feed finished-run
//! summaries in; persistence and ranking are opaque services whose failures
//! must never reach the tick loop.

use std::path::{Path, PathBuf};

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionKind {
    Score,
    Stars,
    Distance,
    PhaseSwitch,
    NoGlitch,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mission {
    pub id: String,
    pub description: String,
    pub kind: MissionKind,
    pub target: u64,
    pub progress: u64,
    pub completed: bool,
    /// Stars awarded on claim
    pub reward: u32,
}

/// What a finished run reports to the profile layer
#[derive(Debug, Clone, Copy, Default)]
pub struct RunSummary {
    pub final_score: u64,
    pub stars_collected: u32,
    pub phase_switches: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub high_score: u64,
    /// Total stars banked across runs (spendable in the shop)
    pub stars: u64,
    pub owned_themes: Vec<String>,
    pub active_theme_id: String,
    pub missions: Vec<Mission>,
}

impl UserProfile {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            high_score: 0,
            stars: 0,
            owned_themes: vec!["classic".to_string()],
            active_theme_id: "classic".to_string(),
            missions: Vec::new(),
        }
    }

    /// Fold a finished run into the profile: high-score max, star total, and
    /// mission progress.
    pub fn apply_run(&mut self, run: &RunSummary) {
        self.high_score = self.high_score.max(run.final_score);
        self.stars += run.stars_collected as u64;
        for m in &mut self.missions {
            if m.completed {
                continue;
            }
            m.progress += match m.kind {
                MissionKind::Score => run.final_score,
                MissionKind::Stars => run.stars_collected as u64,
                // Distance missions advance by final score, not the distance
                // field; live behavior, deliberately preserved
                MissionKind::Distance => run.final_score,
                MissionKind::PhaseSwitch => run.phase_switches as u64,
                MissionKind::NoGlitch => 0,
            };
            m.completed = m.progress >= m.target;
        }
    }

    /// Claim a completed mission: removes it and banks the reward. Returns
    /// the reward, or None if the mission is missing or incomplete.
    pub fn claim_mission(&mut self, id: &str) -> Option<u32> {
        let idx = self
            .missions
            .iter()
            .position(|m| m.id == id && m.completed)?;
        let mission = self.missions.remove(idx);
        self.stars += mission.reward as u64;
        Some(mission.reward)
    }
}

/// Generate the daily mission slate: three of the four templates, shuffled
pub fn daily_missions(rng: &mut impl Rng) -> Vec<Mission> {
    let mut templates = [
        (MissionKind::Stars, "Collect 50 Stars", 50u64, 100u32),
        (MissionKind::Score, "Score 500 Cumulative Points", 500, 150),
        (MissionKind::PhaseSwitch, "Phase Shift 30 Times", 30, 80),
        (MissionKind::Distance, "Travel 2000m", 2000, 120),
    ];
    templates.shuffle(rng);
    templates
        .iter()
        .take(3)
        .enumerate()
        .map(|(i, &(kind, desc, target, reward))| Mission {
            id: format!("mission-{i}"),
            description: desc.to_string(),
            kind,
            target,
            progress: 0,
            completed: false,
            reward,
        })
        .collect()
}

/// Persistence service the host supplies. Implementations must not panic;
/// failures are theirs to log and swallow.
pub trait ProfileStore {
    fn persist(&mut self, profile: &UserProfile);
    fn load(&self, username: &str) -> Option<UserProfile>;
}

/// A ranked leaderboard row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankEntry {
    pub username: String,
    pub high_score: u64,
}

/// Ranking query service: top-N profiles by high score
pub trait Ranking {
    fn top(&self, n: usize) -> Vec<RankEntry>;
}

/// JSON-file store used by the native host. I/O errors are logged and
/// swallowed; a missing or corrupt file just starts fresh.
#[derive(Debug)]
pub struct LocalStore {
    path: PathBuf,
    profiles: Vec<UserProfile>,
}

impl LocalStore {
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let profiles = match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<Vec<UserProfile>>(&json) {
                Ok(profiles) => {
                    log::info!("loaded {} profiles from {}", profiles.len(), path.display());
                    profiles
                }
                Err(err) => {
                    log::warn!("profile store unreadable ({err}), starting fresh");
                    Vec::new()
                }
            },
            Err(_) => {
                log::info!("no profile store at {}, starting fresh", path.display());
                Vec::new()
            }
        };
        Self { path, profiles }
    }

    fn flush(&self) {
        match serde_json::to_string_pretty(&self.profiles) {
            Ok(json) => {
                if let Err(err) = std::fs::write(&self.path, json) {
                    log::warn!("failed to save profiles: {err}");
                }
            }
            Err(err) => log::warn!("failed to serialize profiles: {err}"),
        }
    }
}

impl ProfileStore for LocalStore {
    fn persist(&mut self, profile: &UserProfile) {
        match self
            .profiles
            .iter_mut()
            .find(|p| p.username == profile.username)
        {
            Some(existing) => *existing = profile.clone(),
            None => self.profiles.push(profile.clone()),
        }
        self.flush();
    }

    fn load(&self, username: &str) -> Option<UserProfile> {
        self.profiles
            .iter()
            .find(|p| p.username == username)
            .cloned()
    }
}

impl Ranking for LocalStore {
    fn top(&self, n: usize) -> Vec<RankEntry> {
        let mut entries: Vec<RankEntry> = self
            .profiles
            .iter()
            .map(|p| RankEntry {
                username: p.username.clone(),
                high_score: p.high_score,
            })
            .collect();
        entries.sort_by(|a, b| b.high_score.cmp(&a.high_score));
        entries.truncate(n);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn mission(kind: MissionKind, target: u64) -> Mission {
        Mission {
            id: format!("m-{target}"),
            description: String::new(),
            kind,
            target,
            progress: 0,
            completed: false,
            reward: 100,
        }
    }

    #[test]
    fn apply_run_updates_high_score_and_stars() {
        let mut profile = UserProfile::new("runner");
        profile.apply_run(&RunSummary {
            final_score: 120,
            stars_collected: 4,
            phase_switches: 9,
        });
        assert_eq!(profile.high_score, 120);
        assert_eq!(profile.stars, 4);

        // Lower score never regresses the record
        profile.apply_run(&RunSummary {
            final_score: 60,
            stars_collected: 1,
            phase_switches: 0,
        });
        assert_eq!(profile.high_score, 120);
        assert_eq!(profile.stars, 5);
    }

    #[test]
    fn distance_missions_track_score() {
        let mut profile = UserProfile::new("runner");
        profile.missions.push(mission(MissionKind::Distance, 2000));
        profile.apply_run(&RunSummary {
            final_score: 300,
            stars_collected: 0,
            phase_switches: 0,
        });
        assert_eq!(profile.missions[0].progress, 300);
    }

    #[test]
    fn mission_completion_and_claim() {
        let mut profile = UserProfile::new("runner");
        profile.missions.push(mission(MissionKind::PhaseSwitch, 30));
        profile.apply_run(&RunSummary {
            phase_switches: 35,
            ..Default::default()
        });
        assert!(profile.missions[0].completed);

        let id = profile.missions[0].id.clone();
        assert_eq!(profile.claim_mission(&id), Some(100));
        assert_eq!(profile.stars, 100);
        assert!(profile.missions.is_empty());
        // Claiming twice fails
        assert_eq!(profile.claim_mission(&id), None);
    }

    #[test]
    fn incomplete_mission_cannot_be_claimed() {
        let mut profile = UserProfile::new("runner");
        profile.missions.push(mission(MissionKind::Score, 500));
        let id = profile.missions[0].id.clone();
        assert_eq!(profile.claim_mission(&id), None);
        assert_eq!(profile.missions.len(), 1);
    }

    #[test]
    fn daily_slate_is_three_distinct_missions() {
        let mut rng = Pcg32::seed_from_u64(5);
        let missions = daily_missions(&mut rng);
        assert_eq!(missions.len(), 3);
        for (i, a) in missions.iter().enumerate() {
            for b in &missions[i + 1..] {
                assert_ne!(a.kind, b.kind);
            }
        }
    }

    #[test]
    fn ranking_sorts_descending() {
        let mut store = LocalStore {
            path: PathBuf::from("/dev/null"),
            profiles: Vec::new(),
        };
        for (name, score) in [("a", 10u64), ("b", 300), ("c", 50)] {
            let mut p = UserProfile::new(name);
            p.high_score = score;
            store.profiles.push(p);
        }
        let top = store.top(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].username, "b");
        assert_eq!(top[1].username, "c");
        // ProfileStore round trip (in memory)
        let mut updated = store.load("a").unwrap();
        updated.high_score = 999;
        store.persist(&updated);
        assert_eq!(store.top(1)[0].username, "a");
    }
}
