//! Presentation preferences
//!
//! Persisted by the host as JSON, consumed read-only by the scene builder.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::MAX_PARTICLES;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Camera shake on phase shifts and pickups
    pub screen_shake: bool,
    /// Particle effects (bursts, dust)
    pub particles: bool,
    /// Minimize shake and full-screen flashes
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_shake: true,
            particles: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Effective phase flash (respects reduced_motion)
    pub fn effective_phase_flash(&self) -> bool {
        !self.reduced_motion
    }

    /// Effective particle budget
    pub fn max_particles(&self) -> usize {
        if self.particles { MAX_PARTICLES } else { 0 }
    }

    /// Load settings from disk, falling back to defaults on any failure
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.as_ref().display());
                    settings
                }
                Err(err) => {
                    log::warn!("settings file unreadable ({err}), using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file, using defaults");
                Self::default()
            }
        }
    }

    /// Save settings to disk; failures are logged, never raised
    pub fn save_to(&self, path: impl AsRef<Path>) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(path.as_ref(), json) {
                    log::warn!("failed to save settings: {err}");
                }
            }
            Err(err) => log::warn!("failed to serialize settings: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_overrides_shake() {
        let settings = Settings {
            screen_shake: true,
            particles: true,
            reduced_motion: true,
        };
        assert!(!settings.effective_screen_shake());
        assert!(!settings.effective_phase_flash());
    }

    #[test]
    fn particle_budget_zero_when_disabled() {
        let settings = Settings {
            particles: false,
            ..Default::default()
        };
        assert_eq!(settings.max_particles(), 0);
    }
}
