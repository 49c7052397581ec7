//! Character LCD buffer (HD44780-style, 20x2)

use super::TextDisplay;
use crate::consts::{LCD_COLS, LCD_ROWS};

#[derive(Debug, Clone)]
pub struct CharLcd {
    cells: [[char; LCD_COLS]; LCD_ROWS],
    /// 0-based cursor
    col: usize,
    row: usize,
}

impl Default for CharLcd {
    fn default() -> Self {
        Self::new()
    }
}

impl CharLcd {
    pub fn new() -> Self {
        Self {
            cells: [[' '; LCD_COLS]; LCD_ROWS],
            col: 0,
            row: 0,
        }
    }

    /// Row contents with trailing blanks removed (0-based row)
    pub fn line(&self, row: usize) -> String {
        self.cells
            .get(row)
            .map(|r| r.iter().collect::<String>().trim_end().to_string())
            .unwrap_or_default()
    }

    pub fn lines(&self) -> Vec<String> {
        (0..LCD_ROWS).map(|r| self.line(r)).collect()
    }
}

impl TextDisplay for CharLcd {
    fn clear(&mut self) {
        self.cells = [[' '; LCD_COLS]; LCD_ROWS];
        self.col = 0;
        self.row = 0;
    }

    fn goto_cell(&mut self, col: u8, row: u8) {
        self.col = usize::from(col.saturating_sub(1));
        self.row = usize::from(row.saturating_sub(1));
    }

    fn write_char(&mut self, c: char) {
        // Past the last column the controller drops characters
        if let Some(cell) = self
            .cells
            .get_mut(self.row)
            .and_then(|r| r.get_mut(self.col))
        {
            *cell = c;
        }
        self.col += 1;
    }
}
