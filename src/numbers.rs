//! Digit faces for clock readouts: a 4 column "big" face and a 3 column "small" face.
//! Same column encoding as the character table.

use log::debug;

use crate::error::Error;

/// Glyphs per digit face
pub const DIGIT_COUNT: usize = 10;
/// Columns per big digit glyph
pub const BIG_DIGIT_WIDTH: usize = 4;
/// Columns per small digit glyph
pub const SMALL_DIGIT_WIDTH: usize = 3;

pub type BigDigitGlyph = [u8; BIG_DIGIT_WIDTH];
pub type SmallDigitGlyph = [u8; SMALL_DIGIT_WIDTH];

pub static NUMBERS_BIG: [BigDigitGlyph; DIGIT_COUNT] = [
    [0x7F, 0x41, 0x41, 0x7F], // 0
    [0x00, 0x42, 0x7F, 0x40], // 1
    [0x79, 0x49, 0x49, 0x4F], // 2
    [0x63, 0x49, 0x49, 0x77], // 3
    [0x0F, 0x08, 0x08, 0x7F], // 4
    [0x4F, 0x49, 0x49, 0x79], // 5
    [0x7F, 0x49, 0x49, 0x79], // 6
    [0x03, 0x01, 0x7D, 0x03], // 7
    [0x77, 0x49, 0x49, 0x77], // 8
    [0x4F, 0x49, 0x49, 0x7F], // 9
];

pub static NUMBERS_SMALL: [SmallDigitGlyph; DIGIT_COUNT] = [
    [0x3E, 0x22, 0x3E], // 0
    [0x24, 0x3E, 0x20], // 1
    [0x3A, 0x2A, 0x2E], // 2
    [0x2A, 0x2A, 0x3E], // 3
    [0x0E, 0x08, 0x3E], // 4
    [0x2E, 0x2A, 0x3A], // 5
    [0x3E, 0x2A, 0x3A], // 6
    [0x06, 0x02, 0x3E], // 7
    [0x3E, 0x2A, 0x3E], // 8
    [0x2E, 0x2A, 0x3E], // 9
];

fn check_digit(digit: u8) -> Result<usize, Error> {
    if (digit as usize) < DIGIT_COUNT {
        Ok(digit as usize)
    } else {
        debug!("{} is not a decimal digit", digit);
        Err(Error::DigitOutOfRange(digit as u32))
    }
}

/// Look up a digit in the big face. Anything above 9 is rejected.
pub fn big_digit_glyph(digit: u8) -> Result<&'static BigDigitGlyph, Error> {
    check_digit(digit).map(|i| &NUMBERS_BIG[i])
}

/// Look up a digit in the small face. Anything above 9 is rejected.
pub fn small_digit_glyph(digit: u8) -> Result<&'static SmallDigitGlyph, Error> {
    check_digit(digit).map(|i| &NUMBERS_SMALL[i])
}
