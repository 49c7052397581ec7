//! Platform abstraction layer
//!
//! The simulation talks to the hardware only through these ports:
//! - `DrawSurface`: bitmap display
//! - `TextDisplay`: character LCD
//! - `KeySource`: keypad events
//! - `Clock`: blocking delays
//!
//! The adapters in the submodules are in-memory / std implementations used by
//! the desktop binary and the tests.

pub mod clock;
pub mod framebuffer;
pub mod keypad;
pub mod lcd;

pub use clock::{Clock, ManualClock, StdClock};
pub use framebuffer::Framebuffer;
pub use keypad::{KeyCode, KeySource, ScriptedKeypad};
pub use lcd::CharLcd;

use crate::sim::geometry::{GameObject, Rect};

/// Bitmap drawing commands. Display state is never read back.
pub trait DrawSurface {
    /// Light the object's pixels at its current position
    fn draw_shape(&mut self, object: &GameObject);
    /// Clear the object's pixels at its current position
    fn clear_shape(&mut self, object: &GameObject);
    /// Draw a rectangle outline
    fn draw_rect(&mut self, rect: &Rect);
    /// Clear every pixel in the inclusive region
    fn clear_region(&mut self, x0: i32, y0: i32, x1: i32, y1: i32);
    fn clear_screen(&mut self);
}

/// Character display with a 1-based cursor
pub trait TextDisplay {
    fn clear(&mut self);
    fn goto_cell(&mut self, col: u8, row: u8);
    fn write_char(&mut self, c: char);

    fn write_str(&mut self, s: &str) {
        for c in s.chars() {
            self.write_char(c);
        }
    }
}
