//! Integer screen-space geometry shared by the ball, paddle and bricks
//!
//! Coordinates are pixels with the origin at the top-left corner of the
//! display. Collision works on bounding boxes only; the pixel offsets in a
//! [`Geometry`] are used for drawing.

use glam::IVec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// A screen position or extent
pub type Point = IVec2;

/// Axis-aligned rectangle
///
/// `max()` is `origin + dimensions`, so two rectangles that share an edge
/// are considered overlapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub origin: Point,
    pub dimensions: Point,
}

impl Rect {
    pub const fn new(origin: Point, dimensions: Point) -> Self {
        Self { origin, dimensions }
    }

    #[inline]
    pub fn min(&self) -> Point {
        self.origin
    }

    #[inline]
    pub fn max(&self) -> Point {
        self.origin + self.dimensions
    }

    /// Integer centre (`origin + dimensions / 2`)
    #[inline]
    pub fn center(&self) -> Point {
        self.origin + self.dimensions / 2
    }

    /// Grow by `margin` pixels on every side
    pub fn expand(&self, margin: i32) -> Self {
        Self {
            origin: self.origin - IVec2::splat(margin),
            dimensions: self.dimensions + IVec2::splat(2 * margin),
        }
    }

    /// Inclusive pixel corners clipped to the display
    pub fn clipped_corners(&self) -> (Point, Point) {
        let low = self.min().max(IVec2::ZERO);
        let high = self
            .max()
            .min(IVec2::new(SCREEN_WIDTH - 1, SCREEN_HEIGHT - 1));
        (low, high)
    }
}

/// Shape of one kind of object
#[derive(Debug)]
pub struct Geometry {
    /// Bounding box size
    pub size: Point,
    /// Lit pixels relative to the object's position
    pub pixels: &'static [Point],
}

pub static BALL_GEOMETRY: Geometry = Geometry {
    size: IVec2::new(4, 4),
    pixels: &[
        IVec2::new(0, 1),
        IVec2::new(0, 2),
        IVec2::new(1, 0),
        IVec2::new(1, 1),
        IVec2::new(1, 2),
        IVec2::new(1, 3),
        IVec2::new(2, 0),
        IVec2::new(2, 1),
        IVec2::new(2, 2),
        IVec2::new(2, 3),
        IVec2::new(3, 1),
        IVec2::new(3, 2),
    ],
};

// Only the top row is lit; the box is two pixels tall for collision.
pub static PADDLE_GEOMETRY: Geometry = Geometry {
    size: IVec2::new(10, 2),
    pixels: &[
        IVec2::new(0, 0),
        IVec2::new(1, 0),
        IVec2::new(2, 0),
        IVec2::new(3, 0),
        IVec2::new(4, 0),
        IVec2::new(5, 0),
        IVec2::new(6, 0),
        IVec2::new(7, 0),
        IVec2::new(8, 0),
        IVec2::new(9, 0),
    ],
};

/// A moving object (ball or paddle)
#[derive(Debug, Clone, Copy)]
pub struct GameObject {
    /// Top-left corner of the bounding box
    pub position: Point,
    /// Pixels per tick
    pub velocity: Point,
    pub geometry: &'static Geometry,
}

impl GameObject {
    pub fn new(geometry: &'static Geometry, position: Point) -> Self {
        Self {
            position,
            velocity: IVec2::ZERO,
            geometry,
        }
    }

    pub fn ball() -> Self {
        Self::new(&BALL_GEOMETRY, IVec2::ONE)
    }

    pub fn paddle() -> Self {
        Self::new(&PADDLE_GEOMETRY, IVec2::new(59, 58))
    }

    #[inline]
    pub fn size(&self) -> Point {
        self.geometry.size
    }

    /// Bounding box at the current position
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, self.geometry.size)
    }

    pub fn set_velocity(&mut self, x: i32, y: i32) {
        self.velocity = IVec2::new(x, y);
    }

    /// Position after one more tick of motion
    #[inline]
    pub fn next_position(&self) -> Point {
        self.position + self.velocity
    }

    /// Advance one tick
    #[inline]
    pub fn advance(&mut self) {
        self.position += self.velocity;
    }

    /// Absolute pixels covered by the shape
    pub fn lit_pixels(&self) -> impl Iterator<Item = Point> + '_ {
        self.geometry.pixels.iter().map(move |p| self.position + *p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_bounds_include_far_edge() {
        let r = Rect::new(IVec2::new(4, 4), IVec2::new(12, 4));
        assert_eq!(r.max(), IVec2::new(16, 8));
        assert_eq!(r.center(), IVec2::new(10, 6));
    }

    #[test]
    fn test_expand_then_clip_at_screen_corner() {
        let r = Rect::new(IVec2::new(0, 0), IVec2::new(12, 4)).expand(1);
        let (low, high) = r.clipped_corners();
        assert_eq!(low, IVec2::ZERO);
        assert_eq!(high, IVec2::new(13, 5));

        let r = Rect::new(IVec2::new(120, 60), IVec2::new(8, 4)).expand(1);
        let (_, high) = r.clipped_corners();
        assert_eq!(high, IVec2::new(SCREEN_WIDTH - 1, SCREEN_HEIGHT - 1));
    }

    #[test]
    fn test_geometry_pixels_inside_box() {
        for geo in [&BALL_GEOMETRY, &PADDLE_GEOMETRY] {
            for p in geo.pixels {
                assert!(p.x >= 0 && p.x < geo.size.x);
                assert!(p.y >= 0 && p.y < geo.size.y);
            }
        }
    }

    #[test]
    fn test_objects_share_geometry() {
        let a = GameObject::ball();
        let b = GameObject::ball();
        assert!(std::ptr::eq(a.geometry, b.geometry));
    }

    #[test]
    fn test_advance_moves_by_velocity() {
        let mut ball = GameObject::ball();
        ball.set_velocity(4, -5);
        let expected = ball.next_position();
        ball.advance();
        assert_eq!(ball.position, expected);
        assert_eq!(ball.position, IVec2::new(5, -4));
        assert_eq!(ball.lit_pixels().count(), 12);
    }
}
