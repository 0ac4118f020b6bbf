//! Startup configuration
//!
//! Read once from a JSON file. Every field has a default so a partial (or
//! missing) file still gives a playable game.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::input::{Key, ScriptedKey};
use crate::sim::Display;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Display ===
    pub display_width: f32,
    pub display_height: f32,

    // === Session ===
    /// Dice seed; random when absent
    pub seed: Option<u64>,
    /// Stop after this many frames (headless runs)
    pub max_frames: Option<u64>,
    /// Let the demo bot play
    pub autopilot: bool,
    /// Key presses replayed by the headless driver
    pub keys: Vec<ScriptedKey>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_width: DISPLAY_WIDTH,
            display_height: DISPLAY_HEIGHT,

            seed: None,
            max_frames: None,
            autopilot: true,
            keys: Vec::new(),

            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read {}: {}, using default settings", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Bad settings in {}: {}, using default settings", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn display(&self) -> Display {
        Display::new(self.display_width, self.display_height)
    }

    /// Scripted keys held down on the given frame
    pub fn keys_down(&self, frame: u64) -> impl Iterator<Item = Key> + '_ {
        self.keys.iter().filter(move |k| k.is_down(frame)).map(|k| k.key)
    }

    /// The configured seed, or a fresh random one
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
