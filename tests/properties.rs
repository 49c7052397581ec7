//! Property tests for the collision engine and brick grid

use glam::IVec2;
use proptest::prelude::*;

use mono_breakout::consts::*;
use mono_breakout::sim::collision::{
    Axis, bounce_off_paddle, incident_axis, reflect, resolve_wall_collision,
};
use mono_breakout::sim::{
    BALL_GEOMETRY, Brick, BrickGrid, BrickLayout, GameObject, PADDLE_GEOMETRY, Rect,
    WallCollision, check_wall_collision, find_brick_hit, overlaps,
};

fn ball(x: i32, y: i32, vx: i32, vy: i32) -> GameObject {
    let mut ball = GameObject::new(&BALL_GEOMETRY, IVec2::new(x, y));
    ball.set_velocity(vx, vy);
    ball
}

fn coord() -> impl Strategy<Value = i32> {
    -10..140i32
}

fn speed() -> impl Strategy<Value = i32> {
    -6..=6i32
}

proptest! {
    #[test]
    fn overlap_is_symmetric_ball_paddle(bx in coord(), by in coord(), px in coord(), py in coord()) {
        let b = GameObject::new(&BALL_GEOMETRY, IVec2::new(bx, by)).bounds();
        let p = GameObject::new(&PADDLE_GEOMETRY, IVec2::new(px, py)).bounds();
        prop_assert_eq!(overlaps(&b, &p), overlaps(&p, &b));
    }

    #[test]
    fn overlap_is_symmetric_ball_brick(
        bx in coord(), by in coord(),
        rx in coord(), ry in coord(),
        w in 1..30i32, h in 1..10i32,
    ) {
        let b = GameObject::new(&BALL_GEOMETRY, IVec2::new(bx, by)).bounds();
        let r = Rect::new(IVec2::new(rx, ry), IVec2::new(w, h));
        prop_assert_eq!(overlaps(&b, &r), overlaps(&r, &b));
    }

    #[test]
    fn left_wall_wins_over_everything(x in -10..1i32, y in -10..80i32) {
        prop_assert_eq!(check_wall_collision(&ball(x, y, -3, -5)), WallCollision::Left);
    }

    #[test]
    fn top_only_when_sides_clear(x in 1..=(SCREEN_WIDTH - 4), y in -10..1i32) {
        prop_assert_eq!(check_wall_collision(&ball(x, y, 2, -5)), WallCollision::Top);
    }

    #[test]
    fn wall_response_flips_one_component(x in coord(), y in -10..60i32, vx in speed(), vy in speed()) {
        let mut b = ball(x, y, vx, vy);
        let wall = check_wall_collision(&b);
        resolve_wall_collision(&mut b, wall);
        match wall {
            WallCollision::Left | WallCollision::Right => {
                prop_assert_eq!(b.velocity, IVec2::new(-vx, vy));
                prop_assert!(b.position.x >= 0 && b.bounds().max().x <= SCREEN_WIDTH);
            }
            WallCollision::Top => {
                prop_assert_eq!(b.velocity, IVec2::new(vx, -vy));
                prop_assert_eq!(b.position.y, WALL_MARGIN);
            }
            WallCollision::Bottom | WallCollision::None => {
                prop_assert_eq!(b.velocity, IVec2::new(vx, vy));
                prop_assert_eq!(b.position, IVec2::new(x, y));
            }
        }
    }

    #[test]
    fn brick_response_flips_one_component(
        bx in 0..40i32, by in 0..20i32, vx in speed(), vy in speed(),
    ) {
        let brick = Brick {
            rect: Rect::new(IVec2::new(10, 8), IVec2::new(12, 4)),
            active: true,
        };
        let mut b = ball(bx, by, vx, vy);
        if let Some(hit) = find_brick_hit(&b, &[brick]) {
            prop_assert_eq!(hit.axis, incident_axis(&b.bounds(), &brick.rect));
            reflect(&mut b, hit.axis);
            match hit.axis {
                Axis::Horizontal => prop_assert_eq!(b.velocity, IVec2::new(-vx, vy)),
                Axis::Vertical => prop_assert_eq!(b.velocity, IVec2::new(vx, -vy)),
            }
        } else {
            prop_assert!(!overlaps(&b.bounds(), &brick.rect));
        }
    }

    #[test]
    fn paddle_bounce_always_goes_up(bx in 40..80i32, vx in speed(), vy in 1..=6i32) {
        let paddle = GameObject::new(&PADDLE_GEOMETRY, IVec2::new(55, 58));
        let mut b = ball(bx, 56, vx, vy);
        bounce_off_paddle(&mut b, &paddle);
        prop_assert_eq!(b.velocity.y, -vy);
        prop_assert!(b.velocity.x != 0);
        prop_assert!(b.velocity.x.abs() <= STEER_STRONG.max(vx.abs()));
    }

    #[test]
    fn brick_layout_fits_screen(
        cols in 1..=16usize,
        start_x in 0..=20i32,
        margin_x in 1..=8i32,
        screen_width in 64..=256i32,
    ) {
        let cols_i = cols as i32;
        prop_assume!((screen_width - 2 * start_x - (cols_i - 1) * margin_x) / cols_i > 0);
        let layout = BrickLayout {
            rows: 1,
            cols,
            start_x,
            margin_x,
            screen_width,
            ..Default::default()
        };
        let rightmost = layout.rect(cols - 1);
        prop_assert!(rightmost.max().x <= screen_width);
        for i in 1..cols {
            // Touching edges would count as overlapping
            prop_assert!(layout.rect(i - 1).max().x < layout.rect(i).min().x);
        }
    }

    #[test]
    fn deactivation_counts_each_brick_once(indices in proptest::collection::vec(0..40usize, 0..80)) {
        let mut grid = BrickGrid::default();
        let mut fb = mono_breakout::platform::Framebuffer::new();
        let total = grid.init(&mut fb);

        let mut removed = std::collections::BTreeSet::new();
        for index in indices {
            let first_time = index < total && removed.insert(index);
            prop_assert_eq!(grid.deactivate(index), first_time);
        }
        prop_assert_eq!(grid.active_count(), total - removed.len());
    }
}
