//! Game state, phases and the transition table
//!
//! `transition` is pure: it only decides the next phase. The actions that go
//! with each phase (banners, grid rebuilds, resets) live in `crate::game`.

use glam::IVec2;
use serde::Serialize;

use super::bricks::{BrickGrid, BrickLayout};
use super::geometry::GameObject;
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Welcome screen, waiting for the start key
    Intro,
    /// Active gameplay
    Playing,
    /// Ball lost with lives remaining (short pause)
    LifeLost,
    /// All bricks cleared below the winning level (banner)
    LevelComplete,
    /// All bricks cleared on the winning level
    Win,
    /// Ball lost on the last life
    GameOver,
}

/// Something that moves the game out of its current phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    StartPressed,
    /// Ball fell past the paddle; lives already decremented
    BallLost { lives_remaining: u8 },
    /// Last brick destroyed on `level`
    BricksCleared { level: u32 },
    /// Pause, banner or final screen finished
    BannerElapsed,
}

/// Next phase for `event` in `phase`. Pairs with no rule leave the phase as is.
pub fn transition(phase: GamePhase, event: GameEvent, win_level: u32) -> GamePhase {
    use GameEvent::*;
    use GamePhase::*;

    match (phase, event) {
        (Intro, StartPressed) => Playing,
        (Playing, BallLost { lives_remaining: 0 }) => GameOver,
        (Playing, BallLost { .. }) => LifeLost,
        (Playing, BricksCleared { level }) if level >= win_level => Win,
        (Playing, BricksCleared { .. }) => LevelComplete,
        (LifeLost | LevelComplete, BannerElapsed) => Playing,
        (Win | GameOver, BannerElapsed) => Intro,
        (phase, _) => phase,
    }
}

/// Score, lives and progression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub score: u32,
    pub lives: u8,
    /// 1-based
    pub level: u32,
    pub tick_interval_ms: u32,
    pub bricks_remaining: u32,
}

impl GameState {
    /// Fresh game per `settings`. Bricks are counted when the grid is built.
    pub fn new(settings: &Settings) -> Self {
        Self {
            score: 0,
            lives: settings.max_lives,
            level: 1,
            tick_interval_ms: settings.pacing.start_tick_ms,
            bricks_remaining: 0,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

/// Everything the simulation mutates
#[derive(Debug, Clone)]
pub struct GameWorld {
    pub ball: GameObject,
    pub paddle: GameObject,
    pub bricks: BrickGrid,
    pub state: GameState,
}

impl Default for GameWorld {
    fn default() -> Self {
        Self::new(BrickLayout::default(), &Settings::default())
    }
}

impl GameWorld {
    pub fn new(layout: BrickLayout, settings: &Settings) -> Self {
        let mut world = Self {
            ball: GameObject::ball(),
            paddle: GameObject::paddle(),
            bricks: BrickGrid::new(layout),
            state: GameState::new(settings),
        };
        world.reset_objects();
        world
    }

    /// Start-of-life positions: ball above the paddle heading up-right,
    /// paddle centred near the bottom
    pub fn reset_objects(&mut self) {
        let ball_size = self.ball.size();
        self.ball.position = IVec2::new(SCREEN_WIDTH / 2 - ball_size.x / 2, SCREEN_HEIGHT - 12);
        self.ball.velocity = BALL_START_VELOCITY;

        let paddle_size = self.paddle.size();
        self.paddle.position =
            IVec2::new(SCREEN_WIDTH / 2 - paddle_size.x / 2, SCREEN_HEIGHT - 6);
        self.paddle.velocity = IVec2::ZERO;
    }

    pub fn all_bricks_cleared(&self) -> bool {
        self.state.bricks_remaining == 0
    }
}
