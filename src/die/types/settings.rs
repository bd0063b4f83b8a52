//! Application settings types and loading
//!
//! Settings are read from a JSON file at startup, before any logger exists,
//! so load failures are handed back to the caller to report. Every field has
//! a serde default so partial files work, and a missing file means defaults.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_SETTINGS_FILE: &str = "dice_settings.json";

/// Tunables for the roll and the rendered die.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Seconds between roll start and settle
    #[serde(default = "default_settle_delay_seconds")]
    pub settle_delay_seconds: f32,

    /// Tumble per axis while rolling, in half turns (multiples of pi)
    #[serde(default = "default_spin_half_turns_min")]
    pub spin_half_turns_min: f32,
    #[serde(default = "default_spin_half_turns_max")]
    pub spin_half_turns_max: f32,

    /// Seconds spent easing into the upright pose after the tumble
    #[serde(default = "default_snap_seconds")]
    pub snap_seconds: f32,

    /// Edge length of each generated face texture, in pixels
    #[serde(default = "default_texture_size")]
    pub texture_size: u32,

    /// Pip diameter as a fraction of the face edge
    #[serde(default = "default_pip_diameter")]
    pub pip_diameter: f32,

    /// How many settled rolls to keep in memory
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Locale override such as "en" or "zh-Hans"; `None` follows the environment
    #[serde(default)]
    pub language: Option<String>,

    /// UI font, relative to the assets folder. Needed for CJK text.
    #[serde(default)]
    pub font_path: Option<String>,
}

fn default_settle_delay_seconds() -> f32 {
    1.0
}
fn default_spin_half_turns_min() -> f32 {
    8.0
}
fn default_spin_half_turns_max() -> f32 {
    12.0
}
fn default_snap_seconds() -> f32 {
    0.2
}
fn default_texture_size() -> u32 {
    512
}
fn default_pip_diameter() -> f32 {
    80.0 / 512.0
}
fn default_history_capacity() -> usize {
    20
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            settle_delay_seconds: default_settle_delay_seconds(),
            spin_half_turns_min: default_spin_half_turns_min(),
            spin_half_turns_max: default_spin_half_turns_max(),
            snap_seconds: default_snap_seconds(),
            texture_size: default_texture_size(),
            pip_diameter: default_pip_diameter(),
            history_capacity: default_history_capacity(),
            language: None,
            font_path: None,
        }
    }
}

impl AppSettings {
    /// Load settings from a JSON file. A missing file gives defaults; a file
    /// that cannot be read or parsed is an error.
    pub fn load_from_file(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::read(path).map(Self::sanitized)
    }

    pub fn read(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read settings {:?}: {}", path, e))?;
        serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse settings {:?}: {}", path, e))
    }

    /// Clamp every field into a range the app can work with.
    pub fn sanitized(mut self) -> Self {
        let finite_or = |v: f32, d: f32| if v.is_finite() { v } else { d };

        self.settle_delay_seconds =
            finite_or(self.settle_delay_seconds, default_settle_delay_seconds()).clamp(0.0, 10.0);
        self.snap_seconds = finite_or(self.snap_seconds, default_snap_seconds()).clamp(0.0, 2.0);

        self.spin_half_turns_min =
            finite_or(self.spin_half_turns_min, default_spin_half_turns_min()).clamp(0.0, 64.0);
        self.spin_half_turns_max =
            finite_or(self.spin_half_turns_max, default_spin_half_turns_max()).clamp(0.0, 64.0);
        if self.spin_half_turns_max < self.spin_half_turns_min {
            std::mem::swap(&mut self.spin_half_turns_min, &mut self.spin_half_turns_max);
        }

        self.texture_size = self.texture_size.clamp(16, 2048);
        self.pip_diameter = finite_or(self.pip_diameter, default_pip_diameter()).clamp(0.02, 0.3);
        self.history_capacity = self.history_capacity.min(1000);
        self
    }

    /// Falls back to the default delay for values a `Duration` cannot hold.
    pub fn settle_delay(&self) -> Duration {
        Duration::try_from_secs_f32(self.settle_delay_seconds.max(0.0))
            .unwrap_or(Duration::from_secs_f32(default_settle_delay_seconds()))
    }
}
