use crate::chars::{self, CHARACTER_WIDTH};
use crate::error::Error;
use crate::numbers::{self, BIG_DIGIT_WIDTH, SMALL_DIGIT_WIDTH};

/// Pixel rows in every face; one bit per row of a column byte.
pub const GLYPH_HEIGHT: usize = 8;

/// A fixed width face whose glyphs are column bitmaps.
pub trait ColumnFont {
    /// Columns per glyph
    const WIDTH: usize;

    /// Columns of the glyph stored under `key`.
    fn glyph(&self, key: u8) -> Result<&'static [u8], Error>;

    /// Map a character onto this face's keys.
    fn key_for(&self, c: char) -> Result<u8, Error>;

    fn glyph_for(&self, c: char) -> Result<&'static [u8], Error> {
        let key = self.key_for(c)?;
        self.glyph(key)
    }

    /// Glyph size in pixels as (width, height)
    fn char_size(&self) -> (usize, usize) {
        (Self::WIDTH, GLYPH_HEIGHT)
    }
}

/// Printable ASCII, keyed by character code
#[derive(Debug, Clone, Copy, Default)]
pub struct Font5x8;

/// Big clock digits, keyed by digit value
#[derive(Debug, Clone, Copy, Default)]
pub struct BigDigits;

/// Small clock digits, keyed by digit value
#[derive(Debug, Clone, Copy, Default)]
pub struct SmallDigits;

fn digit_key(c: char) -> Result<u8, Error> {
    match c.to_digit(10) {
        Some(d) => Ok(d as u8),
        None => Err(Error::NotADigit(c)),
    }
}

impl ColumnFont for Font5x8 {
    const WIDTH: usize = CHARACTER_WIDTH;

    fn glyph(&self, key: u8) -> Result<&'static [u8], Error> {
        chars::character_glyph(key).map(|g| &g[..])
    }

    fn key_for(&self, c: char) -> Result<u8, Error> {
        chars::ascii_code(c)
    }
}

impl ColumnFont for BigDigits {
    const WIDTH: usize = BIG_DIGIT_WIDTH;

    fn glyph(&self, key: u8) -> Result<&'static [u8], Error> {
        numbers::big_digit_glyph(key).map(|g| &g[..])
    }

    fn key_for(&self, c: char) -> Result<u8, Error> {
        digit_key(c)
    }
}

impl ColumnFont for SmallDigits {
    const WIDTH: usize = SMALL_DIGIT_WIDTH;

    fn glyph(&self, key: u8) -> Result<&'static [u8], Error> {
        numbers::small_digit_glyph(key).map(|g| &g[..])
    }

    fn key_for(&self, c: char) -> Result<u8, Error> {
        digit_key(c)
    }
}
