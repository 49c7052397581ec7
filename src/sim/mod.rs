//! Simulation module
//!
//! All gameplay logic lives here:
//! - Integer pixel coordinates only
//! - Stable iteration order (bricks by index)
//! - Drawing and text output go through the platform ports

pub mod autopilot;
pub mod bricks;
pub mod collision;
pub mod geometry;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use bricks::{Brick, BrickGrid, BrickLayout};
pub use collision::{
    Axis, BrickHit, PaddleZone, WallCollision, check_wall_collision, find_brick_hit, overlaps,
};
pub use geometry::{BALL_GEOMETRY, GameObject, Geometry, PADDLE_GEOMETRY, Point, Rect};
pub use state::{GameEvent, GamePhase, GameState, GameWorld, transition};
pub use tick::{TickInput, TickOutcome, tick};
