//! Skins, per-skin tuning and persisted player settings.
//!
//! The three skins share one state machine; they differ only in tuning values
//! (character size, gap, speed, whether a countdown precedes each run) and in
//! how they are drawn.

use crate::core::constants::SETTINGS_FILE;
use crate::utils::persistence::{load_json_or_default, save_json};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

/// Visual theme of the game. Each one also selects a [`Tuning`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Skin {
    /// Plain bird and green pipes. Starts immediately, no countdown.
    #[default]
    Classic,
    /// Crypto-trader theme: dodging red candles, "liquidated" on crash.
    Degen,
    /// Chunky pixel-art theme.
    Pixel,
}

impl Skin {
    pub const ALL: [Skin; 3] = [Skin::Classic, Skin::Degen, Skin::Pixel];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Degen => "degen",
            Self::Pixel => "pixel",
        }
    }

    /// Fixed key under which this skin's best score is stored.
    pub fn high_score_key(&self) -> &'static str {
        match self {
            Self::Classic => "clumsyBirdHighScore",
            Self::Degen => "clumsyDegenHighScore",
            Self::Pixel => "clumsyPixelHighScore",
        }
    }

    pub fn tuning(&self) -> Tuning {
        match self {
            Self::Classic => Tuning {
                gravity: 0.6,
                jump_strength: -8.0,
                obstacle_speed: 3.0,
                spawn_interval_ms: 1500.0,
                obstacle_width: 52.0,
                gap: 150.0,
                character_width: 40.0,
                character_height: 30.0,
                character_x: 100.0,
                ground_height: 112.0,
                countdown_seconds: 0,
            },
            Self::Degen => Tuning {
                gravity: 0.5,
                jump_strength: -7.5,
                obstacle_speed: 3.5,
                spawn_interval_ms: 1600.0,
                obstacle_width: 60.0,
                gap: 160.0,
                character_width: 44.0,
                character_height: 44.0,
                character_x: 100.0,
                ground_height: 120.0,
                countdown_seconds: 3,
            },
            Self::Pixel => Tuning {
                gravity: 0.6,
                jump_strength: -8.0,
                obstacle_speed: 3.0,
                spawn_interval_ms: 1500.0,
                obstacle_width: 52.0,
                gap: 150.0,
                character_width: 34.0,
                character_height: 34.0,
                character_x: 100.0,
                ground_height: 112.0,
                countdown_seconds: 3,
            },
        }
    }
}

/// Physics and layout constants for one skin. All distances are world pixels,
/// velocities are pixels per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Downward acceleration added to velocity every tick.
    pub gravity: f64,
    /// Velocity assigned (not added) on jump. Negative is upward.
    pub jump_strength: f64,
    pub obstacle_speed: f64,
    pub spawn_interval_ms: f64,
    pub obstacle_width: f64,
    /// Height of the opening between the top and bottom segments.
    pub gap: f64,
    pub character_width: f64,
    pub character_height: f64,
    /// Fixed horizontal position of the character's left edge.
    pub character_x: f64,
    pub ground_height: f64,
    /// Number of one-second countdown ticks before a run; 0 skips COUNTDOWN.
    pub countdown_seconds: u32,
}

impl Tuning {
    pub fn has_countdown(&self) -> bool {
        self.countdown_seconds > 0
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Skin::default().tuning()
    }
}

/// Player preferences persisted in `settings.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub skin: Skin,
    pub muted: bool,
    /// Model name used by the remote comment service.
    pub comment_model: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            skin: Skin::default(),
            muted: false,
            comment_model: "gemini-2.5-flash".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `dir`, falling back to defaults when missing or invalid.
    pub fn load(dir: &Path) -> Self {
        load_json_or_default(dir, SETTINGS_FILE)
    }

    pub fn save(&self, dir: &Path) -> io::Result<()> {
        save_json(dir, SETTINGS_FILE, self)
    }
}
