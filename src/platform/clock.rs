//! Blocking delays

use std::thread;
use std::time::Duration;

use crate::settings::Settings;

pub trait Clock {
    fn sleep_ms(&mut self, ms: u32);
}

/// Sleeps the current thread, scaled by `time_scale` (0 never sleeps)
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    time_scale: f32,
}

impl StdClock {
    pub fn new(time_scale: f32) -> Self {
        Self {
            time_scale: time_scale.clamp(0.0, 1.0),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.time_scale)
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }
}

impl Clock for StdClock {
    fn sleep_ms(&mut self, ms: u32) {
        let scaled = ms as f32 * self.time_scale;
        if scaled >= 1.0 {
            thread::sleep(Duration::from_secs_f32(scaled / 1000.0));
        }
    }
}

/// Records requested delays without sleeping
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    pub elapsed_ms: u64,
    pub sleeps: Vec<u32>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for ManualClock {
    fn sleep_ms(&mut self, ms: u32) {
        self.elapsed_ms += u64::from(ms);
        self.sleeps.push(ms);
    }
}
