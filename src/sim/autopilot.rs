//! Demo mode: synthesises key presses from the world
//!
//! Presses start on the welcome screen and chases the ball during play. A
//! seeded RNG makes it hesitate now and then so demo games end.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::GameWorld;
use crate::consts::PADDLE_SPEED;
use crate::platform::KeyCode;
use crate::settings::{AutopilotSettings, KeyMap};

#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    miss_chance: f64,
    keymap: KeyMap,
}

impl Autopilot {
    pub fn new(settings: &AutopilotSettings, keymap: KeyMap) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(settings.seed),
            miss_chance: settings.miss_chance.clamp(0.0, 1.0),
            keymap,
        }
    }

    pub fn start_keys(&mut self) -> Vec<KeyCode> {
        vec![self.keymap.start]
    }

    /// Keys for this tick: one step toward where the ball is heading
    pub fn play_keys(&mut self, world: &GameWorld) -> Vec<KeyCode> {
        if self.rng.random_bool(self.miss_chance) {
            return Vec::new();
        }

        let ball = &world.ball;
        let paddle = &world.paddle;
        // Lead a falling ball by one tick of horizontal motion
        let lead = if ball.velocity.y > 0 { ball.velocity.x } else { 0 };
        let target = ball.bounds().center().x + lead;
        let offset = target - paddle.bounds().center().x;

        if offset < -PADDLE_SPEED / 2 {
            vec![self.keymap.left]
        } else if offset > PADDLE_SPEED / 2 {
            vec![self.keymap.right]
        } else {
            Vec::new()
        }
    }
}
