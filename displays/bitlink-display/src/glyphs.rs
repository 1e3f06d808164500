//! Icons and a 5x5 font
//!
//! Glyphs are row bitmaps in the same layout as [`Frame`]: bit 4 is the
//! leftmost column. Lowercase letters render as uppercase.

use bitlink_core::traits::Icon;

use crate::frame::Frame;

/// Shown for characters the font does not cover
pub const UNKNOWN: Frame = Frame::from_rows([0b00000, 0b01110, 0b01010, 0b01110, 0b00000]);

const CHECK: Frame = Frame::from_rows([0b00000, 0b00001, 0b00010, 0b10100, 0b01000]);

/// Frame for an icon
pub fn icon(icon: Icon) -> Frame {
    match icon {
        Icon::Check => CHECK,
    }
}

/// Frame for a single character
pub fn glyph(ch: char) -> Frame {
    let rows = match ch.to_ascii_uppercase() {
        ' ' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        '0' => [0b01100, 0b10010, 0b10010, 0b10010, 0b01100],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b01110],
        '2' => [0b11100, 0b00010, 0b01100, 0b10000, 0b11110],
        '3' => [0b11110, 0b00010, 0b00100, 0b10010, 0b01100],
        '4' => [0b00110, 0b01010, 0b10010, 0b11111, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b11110],
        '6' => [0b00010, 0b00100, 0b01110, 0b10001, 0b01110],
        '7' => [0b11111, 0b00010, 0b00100, 0b01000, 0b10000],
        '8' => [0b01110, 0b10001, 0b01110, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b01110, 0b00100, 0b01000],
        'A' => [0b01100, 0b10010, 0b11110, 0b10010, 0b10010],
        'B' => [0b11100, 0b10010, 0b11100, 0b10010, 0b11100],
        'C' => [0b01110, 0b10000, 0b10000, 0b10000, 0b01110],
        'D' => [0b11100, 0b10010, 0b10010, 0b10010, 0b11100],
        'E' => [0b11110, 0b10000, 0b11100, 0b10000, 0b11110],
        'F' => [0b11110, 0b10000, 0b11100, 0b10000, 0b10000],
        'G' => [0b01110, 0b10000, 0b10011, 0b10001, 0b01110],
        'H' => [0b10010, 0b10010, 0b11110, 0b10010, 0b10010],
        'I' => [0b11100, 0b01000, 0b01000, 0b01000, 0b11100],
        'J' => [0b11111, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10010, 0b10100, 0b11000, 0b10100, 0b10010],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b11110],
        'M' => [0b10001, 0b11011, 0b10101, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001],
        'O' => [0b01100, 0b10010, 0b10010, 0b10010, 0b01100],
        'P' => [0b11100, 0b10010, 0b11100, 0b10000, 0b10000],
        'Q' => [0b01100, 0b10010, 0b10010, 0b01100, 0b00110],
        'R' => [0b11100, 0b10010, 0b11100, 0b10010, 0b10001],
        'S' => [0b01110, 0b10000, 0b01100, 0b00010, 0b11100],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10010, 0b10010, 0b10010, 0b10010, 0b01100],
        'V' => [0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        'X' => [0b10010, 0b10010, 0b01100, 0b10010, 0b10010],
        'Y' => [0b10001, 0b01010, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11110, 0b00100, 0b01000, 0b10000, 0b11110],
        '-' => [0b00000, 0b00000, 0b01110, 0b00000, 0b00000],
        '+' => [0b00000, 0b00100, 0b01110, 0b00100, 0b00000],
        '_' => [0b00000, 0b00000, 0b00000, 0b00000, 0b11111],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b01000],
        '!' => [0b01000, 0b01000, 0b01000, 0b00000, 0b01000],
        '?' => [0b01110, 0b10001, 0b00110, 0b00000, 0b00100],
        '#' => [0b01010, 0b11111, 0b01010, 0b11111, 0b01010],
        _ => return UNKNOWN,
    };
    Frame::from_rows(rows)
}
