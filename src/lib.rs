//! Mono Breakout - Breakout for a 128x64 monochrome display
//!
//! Core modules:
//! - `sim`: Simulation (object motion, collisions, bricks, tick procedure)
//! - `game`: Phase state machine driving intro, play, banners and game end
//! - `platform`: Ports to the display, character LCD, keypad and clock
//! - `settings`: Tunable pacing, key mapping and demo options

pub mod game;
pub mod hud;
pub mod platform;
pub mod settings;
pub mod sim;

pub use game::{Game, GameRecord};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::IVec2;

    /// Bitmap display dimensions
    pub const SCREEN_WIDTH: i32 = 128;
    pub const SCREEN_HEIGHT: i32 = 64;
    /// Inner boundary the ball is clamped to after a wall hit
    pub const WALL_MARGIN: i32 = 1;

    /// Character display dimensions (cells)
    pub const LCD_COLS: usize = 20;
    pub const LCD_ROWS: usize = 2;

    /// Lives at the start of a game
    pub const MAX_LIVES: u8 = 3;
    /// Clearing this level wins the game
    pub const WIN_LEVEL: u32 = 3;
    /// Points per destroyed brick
    pub const BRICK_REWARD: u32 = 10;

    /// Brick grid layout
    pub const BRICK_ROWS: usize = 4;
    pub const BRICK_COLS: usize = 8;
    pub const BRICK_CAPACITY: usize = BRICK_ROWS * BRICK_COLS;
    pub const BRICK_HEIGHT: i32 = 4;
    pub const BRICK_MARGIN_X: i32 = 3;
    pub const BRICK_MARGIN_Y: i32 = 3;
    pub const BRICK_START_X: i32 = 4;
    pub const BRICK_START_Y: i32 = 4;

    /// Paddle pixels per tick per unit of key intent
    pub const PADDLE_SPEED: i32 = 8;
    /// Ball velocity at the start of every life
    pub const BALL_START_VELOCITY: IVec2 = IVec2::new(4, -5);
    /// Horizontal velocity assigned by the outer / inner paddle zones
    pub const STEER_STRONG: i32 = 3;
    pub const STEER_WEAK: i32 = 2;

    /// Keypad codes
    pub const KEY_LEFT: u8 = 1;
    pub const KEY_RIGHT: u8 = 3;
    pub const KEY_START: u8 = 5;

    /// Pacing (milliseconds)
    pub const TICK_START_MS: u32 = 12;
    pub const TICK_STEP_MS: u32 = 5;
    pub const TICK_FLOOR_MS: u32 = 10;
    pub const LIFE_LOST_PAUSE_MS: u32 = 1000;
    pub const LEVEL_BANNER_MS: u32 = 2000;
    pub const FINAL_SCREEN_MS: u32 = 5000;
}
