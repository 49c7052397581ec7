//! Game settings
//!
//! Defaults reproduce the stock firmware. A JSON file can override any
//! subset of fields.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::platform::KeyCode;

/// Keypad codes the game reacts to; everything else is ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyMap {
    pub left: KeyCode,
    pub right: KeyCode,
    pub start: KeyCode,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            left: KEY_LEFT,
            right: KEY_RIGHT,
            start: KEY_START,
        }
    }
}

impl KeyMap {
    /// Net horizontal intent of a batch of key presses (-1 per left, +1 per right)
    pub fn paddle_intent(&self, keys: &[KeyCode]) -> i32 {
        keys.iter()
            .map(|&k| {
                if k == self.left {
                    -1
                } else if k == self.right {
                    1
                } else {
                    0
                }
            })
            .sum()
    }

    pub fn has_start(&self, keys: &[KeyCode]) -> bool {
        keys.contains(&self.start)
    }
}

/// Delays, all in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pacing {
    /// Tick interval at level 1
    pub start_tick_ms: u32,
    /// Tick interval reduction per completed level
    pub tick_step_ms: u32,
    /// Fastest allowed tick interval
    pub tick_floor_ms: u32,
    pub life_lost_pause_ms: u32,
    pub level_banner_ms: u32,
    /// Win / game over screen
    pub final_screen_ms: u32,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            start_tick_ms: TICK_START_MS,
            tick_step_ms: TICK_STEP_MS,
            tick_floor_ms: TICK_FLOOR_MS,
            life_lost_pause_ms: LIFE_LOST_PAUSE_MS,
            level_banner_ms: LEVEL_BANNER_MS,
            final_screen_ms: FINAL_SCREEN_MS,
        }
    }
}

impl Pacing {
    /// Interval for the next level: one step faster, never below the floor
    pub fn faster(&self, tick_ms: u32) -> u32 {
        tick_ms.saturating_sub(self.tick_step_ms).max(self.tick_floor_ms)
    }
}

/// Demo mode: the game plays itself
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutopilotSettings {
    pub enabled: bool,
    pub seed: u64,
    /// Chance per tick that the autopilot does nothing (0.0 - 1.0)
    pub miss_chance: f64,
}

impl Default for AutopilotSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            seed: 0,
            miss_chance: 0.35,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub keymap: KeyMap,
    pub max_lives: u8,
    /// Clearing this level wins the game
    pub win_level: u32,
    pub pacing: Pacing,
    /// Multiplier applied to real sleeps (0.0 = run flat out, 1.0 = real time)
    pub time_scale: f32,
    pub autopilot: AutopilotSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            keymap: KeyMap::default(),
            max_lives: MAX_LIVES,
            win_level: WIN_LEVEL,
            pacing: Pacing::default(),
            time_scale: 0.0,
            autopilot: AutopilotSettings::default(),
        }
    }
}

impl Settings {
    /// Read and validate a JSON settings file
    pub fn load_from(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&json)
            .with_context(|| format!("parsing settings in {}", path.display()))?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Settings from `path` if given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.max_lives > 0, "max_lives must be at least 1");
        ensure!(self.win_level > 0, "win_level must be at least 1");
        ensure!(self.pacing.tick_floor_ms > 0, "tick_floor_ms must be positive");
        ensure!(
            self.pacing.tick_floor_ms <= self.pacing.start_tick_ms,
            "tick_floor_ms ({}) exceeds start_tick_ms ({})",
            self.pacing.tick_floor_ms,
            self.pacing.start_tick_ms
        );
        ensure!(
            (0.0..=1.0).contains(&self.time_scale),
            "time_scale must be within 0.0..=1.0"
        );
        ensure!(
            (0.0..=1.0).contains(&self.autopilot.miss_chance),
            "autopilot.miss_chance must be within 0.0..=1.0"
        );
        let keys = self.keymap;
        ensure!(
            keys.left != keys.right && keys.left != keys.start && keys.right != keys.start,
            "keymap codes must be distinct"
        );
        Ok(())
    }
}
