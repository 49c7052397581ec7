//! Brick grid: layout and active/inactive bookkeeping
//!
//! Bricks live in a fixed array indexed `row * cols + col`. Their rectangles
//! always come from [`BrickLayout`]; the only state that survives a screen
//! clear is the `active` flag.

use glam::IVec2;

use super::geometry::Rect;
use crate::consts::*;
use crate::platform::DrawSurface;

/// Grid dimensions, spacing and offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickLayout {
    pub rows: usize,
    pub cols: usize,
    pub brick_height: i32,
    pub margin_x: i32,
    pub margin_y: i32,
    pub start_x: i32,
    pub start_y: i32,
    pub screen_width: i32,
}

impl Default for BrickLayout {
    fn default() -> Self {
        Self {
            rows: BRICK_ROWS,
            cols: BRICK_COLS,
            brick_height: BRICK_HEIGHT,
            margin_x: BRICK_MARGIN_X,
            margin_y: BRICK_MARGIN_Y,
            start_x: BRICK_START_X,
            start_y: BRICK_START_Y,
            screen_width: SCREEN_WIDTH,
        }
    }
}

impl BrickLayout {
    /// Width that makes one row exactly span the playfield between the
    /// start offsets.
    ///
    /// # Panics
    /// If the constants leave no room for a brick.
    pub fn brick_width(&self) -> i32 {
        assert!(self.cols > 0, "brick layout needs at least one column");
        let cols = self.cols as i32;
        let width =
            (self.screen_width - 2 * self.start_x - (cols - 1) * self.margin_x) / cols;
        assert!(
            width > 0,
            "brick width {width} is not positive: screen {} start_x {} margin_x {} cols {}",
            self.screen_width,
            self.start_x,
            self.margin_x,
            self.cols
        );
        width
    }

    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rectangle of the brick at `index`
    pub fn rect(&self, index: usize) -> Rect {
        let width = self.brick_width();
        let row = (index / self.cols) as i32;
        let col = (index % self.cols) as i32;
        let origin = IVec2::new(
            self.start_x + col * (width + self.margin_x),
            self.start_y + row * (self.brick_height + self.margin_y),
        );
        Rect::new(origin, IVec2::new(width, self.brick_height))
    }

    pub fn rects(&self) -> impl Iterator<Item = Rect> + '_ {
        (0..self.len()).map(|i| self.rect(i))
    }
}

/// One brick slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Brick {
    pub rect: Rect,
    pub active: bool,
}

/// Fixed-capacity brick arena
#[derive(Debug, Clone)]
pub struct BrickGrid {
    layout: BrickLayout,
    bricks: [Brick; BRICK_CAPACITY],
}

impl Default for BrickGrid {
    fn default() -> Self {
        Self::new(BrickLayout::default())
    }
}

impl BrickGrid {
    /// # Panics
    /// If the layout does not fit the arena or yields a non-positive width.
    pub fn new(layout: BrickLayout) -> Self {
        assert!(
            layout.len() <= BRICK_CAPACITY,
            "layout has {} bricks, capacity is {BRICK_CAPACITY}",
            layout.len()
        );
        // Fail at construction rather than on first draw
        layout.brick_width();
        Self {
            layout,
            bricks: [Brick::default(); BRICK_CAPACITY],
        }
    }

    pub fn layout(&self) -> &BrickLayout {
        &self.layout
    }

    /// Bricks in scan order (only the slots the layout uses)
    pub fn bricks(&self) -> &[Brick] {
        &self.bricks[..self.layout.len()]
    }

    pub fn get(&self, index: usize) -> Option<&Brick> {
        self.bricks().get(index)
    }

    pub fn active_count(&self) -> usize {
        self.bricks().iter().filter(|b| b.active).count()
    }

    /// Activate and draw every brick. Returns the live count.
    pub fn init(&mut self, surface: &mut impl DrawSurface) -> usize {
        let count = self.layout.len();
        for (brick, rect) in self.bricks[..count].iter_mut().zip(self.layout.rects()) {
            *brick = Brick { rect, active: true };
            surface.draw_rect(&brick.rect);
        }
        log::debug!("Brick grid built: {count} bricks");
        count
    }

    /// Redraw the active bricks after a screen clear, rectangles recomputed
    /// from the layout.
    pub fn redraw(&mut self, surface: &mut impl DrawSurface) {
        let count = self.layout.len();
        for (brick, rect) in self.bricks[..count].iter_mut().zip(self.layout.rects()) {
            if brick.active {
                brick.rect = rect;
                surface.draw_rect(&brick.rect);
            }
        }
    }

    /// Take a brick out of play. Returns `false` for a brick that is already
    /// inactive or does not exist; nothing changes in that case.
    pub fn deactivate(&mut self, index: usize) -> bool {
        match self.bricks[..self.layout.len()].get_mut(index) {
            Some(brick) if brick.active => {
                brick.active = false;
                true
            }
            _ => false,
        }
    }

    /// Wipe a destroyed brick plus a one-pixel border, clipped to the screen
    pub fn clear_brick(&self, index: usize, surface: &mut impl DrawSurface) {
        if let Some(brick) = self.get(index) {
            let (low, high) = brick.rect.expand(1).clipped_corners();
            surface.clear_region(low.x, low.y, high.x, high.y);
        }
    }
}
