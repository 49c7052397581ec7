//! Collision detection and response
//!
//! Everything is axis-aligned boxes on an integer grid. Detection functions
//! are pure; response functions only touch the ball's position and velocity.
//! Side effects on bricks, score and the displays belong to the tick.


use super::bricks::Brick;
use super::geometry::{GameObject, Rect};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, STEER_STRONG, STEER_WEAK, WALL_MARGIN};

/// Bounding-box overlap on both axes. Touching edges count.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    let (a_min, a_max) = (a.min(), a.max());
    let (b_min, b_max) = (b.min(), b.max());
    a_min.x <= b_max.x && a_max.x >= b_min.x && a_min.y <= b_max.y && a_max.y >= b_min.y
}

/// Velocity component to reflect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Flip the sign of exactly one velocity component
#[inline]
pub fn reflect(object: &mut GameObject, axis: Axis) {
    match axis {
        Axis::Horizontal => object.velocity.x = -object.velocity.x,
        Axis::Vertical => object.velocity.y = -object.velocity.y,
    }
}

// --- Ball / paddle ---

pub fn ball_hits_paddle(ball: &GameObject, paddle: &GameObject) -> bool {
    overlaps(&ball.bounds(), &paddle.bounds())
}

/// One fifth of the paddle, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleZone {
    FarLeft,
    Left,
    Center,
    Right,
    FarRight,
}

impl PaddleZone {
    /// Zone under the ball's left edge. A ball hanging off the paddle's left
    /// end counts as far-left, off the right end as far-right.
    pub fn of(ball: &GameObject, paddle: &GameObject) -> Self {
        let hit = ball.position.x - paddle.position.x;
        let width = paddle.size().x;
        if hit < width / 5 {
            PaddleZone::FarLeft
        } else if hit < width * 2 / 5 {
            PaddleZone::Left
        } else if hit < width * 3 / 5 {
            PaddleZone::Center
        } else if hit < width * 4 / 5 {
            PaddleZone::Right
        } else {
            PaddleZone::FarRight
        }
    }

    /// Horizontal velocity after the bounce
    pub fn steer(self, dir_x: i32) -> i32 {
        match self {
            PaddleZone::FarLeft => -STEER_STRONG,
            PaddleZone::Left => -STEER_WEAK,
            PaddleZone::Center if dir_x == 0 => 1,
            PaddleZone::Center => dir_x,
            PaddleZone::Right => STEER_WEAK,
            PaddleZone::FarRight => STEER_STRONG,
        }
    }
}

/// Send the ball upward (same speed) and steer it by where it landed
pub fn bounce_off_paddle(ball: &mut GameObject, paddle: &GameObject) -> PaddleZone {
    ball.velocity.y = -ball.velocity.y.abs();
    let zone = PaddleZone::of(ball, paddle);
    ball.velocity.x = zone.steer(ball.velocity.x);
    zone
}

// --- Ball / brick ---

/// The brick a ball ran into this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickHit {
    pub index: usize,
    /// Side that was hit, as the velocity component to reflect
    pub axis: Axis,
}

/// Overlap depth on each axis: sum of half-extents minus centre distance
pub fn overlap_depth(a: &Rect, b: &Rect) -> (i32, i32) {
    let delta = (a.center() - b.center()).abs();
    let half_sum = (a.dimensions + b.dimensions) / 2;
    let depth = half_sum - delta;
    (depth.x, depth.y)
}

/// The shallower axis is the side the ball came through. Ties go vertical.
pub fn incident_axis(ball: &Rect, brick: &Rect) -> Axis {
    let (overlap_x, overlap_y) = overlap_depth(ball, brick);
    if overlap_x < overlap_y {
        Axis::Horizontal
    } else {
        Axis::Vertical
    }
}

/// First active brick in index order that the ball overlaps
pub fn find_brick_hit(ball: &GameObject, bricks: &[Brick]) -> Option<BrickHit> {
    let ball_box = ball.bounds();
    bricks
        .iter()
        .enumerate()
        .filter(|(_, brick)| brick.active)
        .find(|(_, brick)| overlaps(&ball_box, &brick.rect))
        .map(|(index, brick)| BrickHit {
            index,
            axis: incident_axis(&ball_box, &brick.rect),
        })
}

// --- Ball / wall ---

/// Which screen edge the ball crossed, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallCollision {
    None,
    Left,
    Right,
    Top,
    /// Ball fell past the paddle
    Bottom,
}

/// Edges are tested left, right, top, bottom; the first match is reported.
pub fn check_wall_collision(ball: &GameObject) -> WallCollision {
    let bounds = ball.bounds();
    let (min, max) = (bounds.min(), bounds.max());

    if min.x < WALL_MARGIN {
        WallCollision::Left
    } else if max.x > SCREEN_WIDTH {
        WallCollision::Right
    } else if min.y < WALL_MARGIN {
        WallCollision::Top
    } else if max.y > SCREEN_HEIGHT {
        WallCollision::Bottom
    } else {
        WallCollision::None
    }
}

/// Clamp the ball back inside and reflect it. `Bottom` and `None` leave the
/// ball untouched; losing a life is the state machine's business.
pub fn resolve_wall_collision(ball: &mut GameObject, wall: WallCollision) {
    match wall {
        WallCollision::Left => {
            ball.position.x = WALL_MARGIN;
            reflect(ball, Axis::Horizontal);
        }
        WallCollision::Right => {
            ball.position.x = SCREEN_WIDTH - ball.size().x - WALL_MARGIN;
            reflect(ball, Axis::Horizontal);
        }
        WallCollision::Top => {
            ball.position.y = WALL_MARGIN;
            reflect(ball, Axis::Vertical);
        }
        WallCollision::Bottom | WallCollision::None => {}
    }
}
