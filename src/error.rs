use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Character code outside the printable ASCII range (32..=126)
    CharacterOutOfRange(u32),
    /// Digit value outside 0..=9
    DigitOutOfRange(u32),
    /// Character is not one of '0'..='9'
    NotADigit(char),
    /// Not enough room left in a column strip
    NoSpace,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::CharacterOutOfRange(code) => {
                write!(f, "character code {:#x} has no glyph", code)
            }
            Error::DigitOutOfRange(digit) => write!(f, "digit value {} is above 9", digit),
            Error::NotADigit(c) => write!(f, "{:?} is not a decimal digit", c),
            Error::NoSpace => f.write_str("column strip is full"),
        }
    }
}
