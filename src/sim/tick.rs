//! One simulation tick of the Playing phase
//!
//! Steps run in a fixed order: paddle intent, paddle velocity, bounded paddle
//! move, ball move, ball/paddle, ball/brick (at most one), ball/wall, cleared
//! check. The pacing sleep is the caller's.

use super::collision::{
    WallCollision, ball_hits_paddle, bounce_off_paddle, check_wall_collision, find_brick_hit,
    reflect, resolve_wall_collision,
};
use super::geometry::GameObject;
use super::state::{GameEvent, GameWorld};
use crate::consts::*;
use crate::hud;
use crate::platform::{DrawSurface, TextDisplay};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Net horizontal intent: negative left, positive right
    pub paddle_intent: i32,
}

/// What the tick ended with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep playing
    Continue,
    /// Leave the Playing phase
    Event(GameEvent),
}

/// Erase, move by velocity, redraw
pub fn move_object(object: &mut GameObject, surface: &mut impl DrawSurface) {
    surface.clear_shape(object);
    object.advance();
    surface.draw_shape(object);
}

/// The paddle moves only if its whole box stays inside the walls; a move
/// that would cross one is dropped rather than clamped.
pub fn paddle_move_allowed(paddle: &GameObject) -> bool {
    let next_x = paddle.next_position().x;
    next_x >= WALL_MARGIN && next_x + paddle.size().x <= SCREEN_WIDTH
}

/// Advance the world by one tick
pub fn tick<D, T>(
    world: &mut GameWorld,
    input: &TickInput,
    surface: &mut D,
    text: &mut T,
) -> TickOutcome
where
    D: DrawSurface,
    T: TextDisplay,
{
    // Paddle: vertical position never changes
    world.paddle.set_velocity(input.paddle_intent * PADDLE_SPEED, 0);
    if paddle_move_allowed(&world.paddle) {
        move_object(&mut world.paddle, surface);
    }

    move_object(&mut world.ball, surface);

    if ball_hits_paddle(&world.ball, &world.paddle) {
        let zone = bounce_off_paddle(&mut world.ball, &world.paddle);
        log::trace!("Paddle hit ({zone:?}), ball velocity {}", world.ball.velocity);
    }

    // One brick per tick
    if let Some(hit) = find_brick_hit(&world.ball, world.bricks.bricks()) {
        if world.bricks.deactivate(hit.index) {
            reflect(&mut world.ball, hit.axis);
            let state = &mut world.state;
            state.score += BRICK_REWARD;
            state.bricks_remaining = state.bricks_remaining.saturating_sub(1);
            hud::show_game_info(text, state.score, state.lives);
            world.bricks.clear_brick(hit.index, surface);
            log::debug!(
                "Brick {} hit ({:?}), score {}, {} left",
                hit.index,
                hit.axis,
                state.score,
                state.bricks_remaining
            );
        }
    }

    let wall = check_wall_collision(&world.ball);
    match wall {
        WallCollision::None => {}
        WallCollision::Bottom => {
            let state = &mut world.state;
            state.lives = state.lives.saturating_sub(1);
            hud::show_game_info(text, state.score, state.lives);
            log::debug!("Ball lost, {} lives left", state.lives);
            return TickOutcome::Event(GameEvent::BallLost {
                lives_remaining: state.lives,
            });
        }
        _ => {
            surface.clear_shape(&world.ball);
            resolve_wall_collision(&mut world.ball, wall);
            surface.draw_shape(&world.ball);
        }
    }

    if world.all_bricks_cleared() {
        return TickOutcome::Event(GameEvent::BricksCleared {
            level: world.state.level,
        });
    }

    TickOutcome::Continue
}
