//! One-bit framebuffer standing in for the graphic display
//!
//! Pixels are packed eight to a byte in vertical pages, the layout used by
//! KS0108/SSD1306-style controllers.

use super::DrawSurface;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::geometry::{GameObject, Point, Rect};

const WIDTH: usize = SCREEN_WIDTH as usize;
const PAGES: usize = (SCREEN_HEIGHT as usize).div_ceil(8);

#[derive(Clone)]
pub struct Framebuffer {
    pages: [[u8; WIDTH]; PAGES],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    pub fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
        }
    }

    fn cell(x: i32, y: i32) -> Option<(usize, usize, u8)> {
        if !(0..SCREEN_WIDTH).contains(&x) || !(0..SCREEN_HEIGHT).contains(&y) {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some((y / 8, x, 1 << (y % 8)))
    }

    /// Pixel state; anything off-screen reads as unlit
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        Self::cell(x, y).is_some_and(|(page, col, bit)| self.pages[page][col] & bit != 0)
    }

    /// Off-screen writes are dropped
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if let Some((page, col, bit)) = Self::cell(x, y) {
            if on {
                self.pages[page][col] |= bit;
            } else {
                self.pages[page][col] &= !bit;
            }
        }
    }

    pub fn lit_count(&self) -> usize {
        self.pages
            .iter()
            .flatten()
            .map(|b| b.count_ones() as usize)
            .sum()
    }

    fn plot(&mut self, points: impl Iterator<Item = Point>, on: bool) {
        for p in points {
            self.set_pixel(p.x, p.y, on);
        }
    }

    /// Render as text, `#` for lit pixels
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((WIDTH + 1) * SCREEN_HEIGHT as usize);
        for y in 0..SCREEN_HEIGHT {
            for x in 0..SCREEN_WIDTH {
                out.push(if self.pixel(x, y) { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }
}

impl DrawSurface for Framebuffer {
    fn draw_shape(&mut self, object: &GameObject) {
        self.plot(object.lit_pixels(), true);
    }

    fn clear_shape(&mut self, object: &GameObject) {
        self.plot(object.lit_pixels(), false);
    }

    fn draw_rect(&mut self, rect: &Rect) {
        let min = rect.min();
        let max = rect.max();
        for x in min.x..=max.x {
            self.set_pixel(x, min.y, true);
            self.set_pixel(x, max.y, true);
        }
        for y in min.y..=max.y {
            self.set_pixel(min.x, y, true);
            self.set_pixel(max.x, y, true);
        }
    }

    fn clear_region(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        for x in x0..=x1 {
            for y in y0..=y1 {
                self.set_pixel(x, y, false);
            }
        }
    }

    fn clear_screen(&mut self) {
        self.pages = [[0; WIDTH]; PAGES];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[test]
    fn test_draw_and_clear_shape() {
        let mut fb = Framebuffer::new();
        let ball = GameObject::new(&crate::sim::geometry::BALL_GEOMETRY, IVec2::new(10, 10));
        fb.draw_shape(&ball);
        assert_eq!(fb.lit_count(), 12);
        assert!(fb.pixel(11, 10));
        assert!(!fb.pixel(10, 10));
        fb.clear_shape(&ball);
        assert_eq!(fb.lit_count(), 0);
    }

    #[test]
    fn test_off_screen_pixels_ignored() {
        let mut fb = Framebuffer::new();
        fb.set_pixel(-1, 0, true);
        fb.set_pixel(SCREEN_WIDTH, 0, true);
        fb.set_pixel(0, SCREEN_HEIGHT, true);
        assert_eq!(fb.lit_count(), 0);
        assert!(!fb.pixel(-5, -5));
    }

    #[test]
    fn test_rect_outline_and_region_clear() {
        let mut fb = Framebuffer::new();
        let rect = Rect::new(IVec2::new(4, 4), IVec2::new(12, 4));
        fb.draw_rect(&rect);
        // 13 columns x 5 rows outline
        assert_eq!(fb.lit_count(), 2 * 13 + 2 * 3);
        assert!(!fb.pixel(8, 6));

        let (low, high) = rect.expand(1).clipped_corners();
        fb.clear_region(low.x, low.y, high.x, high.y);
        assert_eq!(fb.lit_count(), 0);
    }

    #[test]
    fn test_ascii_dimensions() {
        let fb = Framebuffer::new();
        let ascii = fb.to_ascii();
        assert_eq!(ascii.lines().count(), SCREEN_HEIGHT as usize);
        assert!(ascii.lines().all(|l| l.len() == SCREEN_WIDTH as usize));
    }
}
