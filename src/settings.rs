//! Game settings and preferences
//!
//! One flat struct covering the die variant, gesture thresholds, and the
//! roll presentation tunables. Persisted as a JSON file; any load
//! problem falls back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{SAMPLE_INTERVAL_MS, SPIN_INTERVAL_MS};
use crate::sim::{DieKind, GameState, ShakeConfig};

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Die variant to play
    pub die: DieKind,

    // === Gesture detection ===
    /// Shake threshold and cooldown
    pub shake: ShakeConfig,
    /// Accelerometer cadence (ms)
    pub sample_interval_ms: u64,

    // === Roll presentation ===
    /// Roll window override; the per-kind default applies when absent
    pub roll_duration_ms: Option<u64>,
    /// Cosmetic face-cycling cadence while rolling (ms)
    pub spin_interval_ms: u64,
    /// Whether the cosmetic spin stream runs at all
    pub spin_enabled: bool,

    // === Feedback ===
    /// Route roll events to the haptic sink
    pub haptics_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            die: DieKind::default(),

            // Gesture detection
            shake: ShakeConfig::default(),
            sample_interval_ms: SAMPLE_INTERVAL_MS,

            // Roll presentation
            roll_duration_ms: None,
            spin_interval_ms: SPIN_INTERVAL_MS,
            spin_enabled: true,

            // Feedback
            haptics_enabled: true,
        }
    }
}

impl Settings {
    /// Roll window for the configured die (override wins).
    pub fn effective_roll_duration(&self) -> u64 {
        self.roll_duration_ms
            .unwrap_or_else(|| self.die.roll_duration_ms())
    }

    /// Build a game from these settings with the given run seed.
    pub fn new_game(&self, seed: u64) -> GameState {
        let mut state = GameState::new(self.die, self.shake, seed);
        state.set_roll_duration_ms(self.effective_roll_duration());
        state.set_spin(self.spin_interval_ms, self.spin_enabled);
        state
    }

    /// Load settings from a JSON file, falling back to defaults when the
    /// file is missing or malformed.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON. Errors are logged, not returned.
    pub fn save_to(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(path, json) {
                    log::warn!("Failed to save settings {}: {}", path.display(), err);
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(err) => log::warn!("Failed to encode settings: {}", err),
        }
    }
}
