//! Character LCD screens: welcome, in-game info panel and banners

use crate::platform::{KeyCode, TextDisplay};

pub const WELCOME: &str = "Welcome to Breakout!";
pub const PRESS: &str = "Press ";
pub const TO_START: &str = " to start.";
pub const LEVEL_HEADER: &str = "Breakout - Lvl ";
pub const LEVEL_COMPLETE: &str = "Level Complete!";
pub const NEXT_LEVEL: &str = "Next Level...";
pub const YOU_WIN: &str = "You Win!";
pub const GAME_OVER: &str = "Game Over!";
pub const SCORE_LABEL: &str = "Score: ";
pub const LIVES_LABEL: &str = "Lives: ";

/// Decimal digits with no leading zeros: hundreds only from 100, tens only
/// from 10, units always.
pub fn write_number(text: &mut impl TextDisplay, value: u32) {
    let mut digits = [0u8; 10];
    let mut len = 0;
    let mut rest = value;
    loop {
        digits[len] = (rest % 10) as u8;
        len += 1;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    for &d in digits[..len].iter().rev() {
        text.write_char(char::from(b'0' + d));
    }
}

fn write_line(text: &mut impl TextDisplay, row: u8, s: &str) {
    text.goto_cell(1, row);
    text.write_str(s);
}

/// Welcome banner naming the configured start key
pub fn show_welcome(text: &mut impl TextDisplay, start_key: KeyCode) {
    text.clear();
    write_line(text, 1, WELCOME);
    write_line(text, 2, PRESS);
    write_number(text, u32::from(start_key));
    text.write_str(TO_START);
}

/// Score and lives on the second row
pub fn show_game_info(text: &mut impl TextDisplay, score: u32, lives: u8) {
    write_line(text, 2, SCORE_LABEL);
    write_number(text, score);
    text.goto_cell(12, 2);
    text.write_str(LIVES_LABEL);
    write_number(text, u32::from(lives));
}

pub fn show_play_header(text: &mut impl TextDisplay, level: u32, score: u32, lives: u8) {
    text.clear();
    write_line(text, 1, LEVEL_HEADER);
    write_number(text, level);
    show_game_info(text, score, lives);
}

pub fn show_level_complete(text: &mut impl TextDisplay) {
    text.clear();
    write_line(text, 1, LEVEL_COMPLETE);
    write_line(text, 2, NEXT_LEVEL);
}

pub fn show_final_score(text: &mut impl TextDisplay, score: u32, won: bool) {
    text.clear();
    write_line(text, 1, if won { YOU_WIN } else { GAME_OVER });
    write_line(text, 2, SCORE_LABEL);
    write_number(text, score);
}
