//! Column-bitmap glyph tables for small dot-matrix displays.
//!
//! Three faces are provided: printable ASCII five columns wide, and two digit
//! faces (four and three columns) for clock readouts. Every glyph is a run of
//! column bytes, bit 0 being the top pixel. Tables are `static` and every
//! lookup is bounds checked.
#![no_std]

pub mod chars;
pub mod error;
pub mod font;
pub mod numbers;
pub mod strip;

pub use crate::chars::{
    char_glyph, character_glyph, CHARACTERS, CHARACTER_COUNT, CHARACTER_WIDTH, SPACING,
};
pub use crate::error::Error;
pub use crate::font::{BigDigits, ColumnFont, Font5x8, SmallDigits};
pub use crate::numbers::{
    big_digit_glyph, small_digit_glyph, BIG_DIGIT_WIDTH, DIGIT_COUNT, NUMBERS_BIG,
    NUMBERS_SMALL, SMALL_DIGIT_WIDTH,
};
pub use crate::strip::ColumnStrip;

#[cfg(test)]
#[macro_use]
extern crate std;
