//! Lays glyphs side by side into a row of columns for a dot-matrix display.

use core::fmt;

use display_interface::{DataFormat::U8, DisplayError, WriteOnlyDataCommand};
use heapless::{ArrayLength, Vec};
use log::warn;

use crate::chars::SPACING;
use crate::error::Error;
use crate::font::ColumnFont;

/// Width in columns of `glyphs` glyphs of `font` separated by `spacing` blank columns.
/// `None` if the width does not fit in a `usize`.
pub fn text_width<F: ColumnFont>(_font: &F, glyphs: usize, spacing: usize) -> Option<usize> {
    if glyphs == 0 {
        return Some(0);
    }
    let gaps = (glyphs - 1).checked_mul(spacing)?;
    glyphs.checked_mul(F::WIDTH)?.checked_add(gaps)
}

/// A fixed capacity buffer of `N` display columns.
///
/// Glyphs are appended left to right with `spacing` blank columns between
/// them. Nothing is written in front of the first glyph or after the last.
pub struct ColumnStrip<N: ArrayLength<u8>> {
    columns: Vec<u8, N>,
    spacing: usize,
    glyphs: usize,
}

impl<N: ArrayLength<u8>> fmt::Debug for ColumnStrip<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnStrip")
            .field("spacing", &self.spacing)
            .field("glyphs", &self.glyphs)
            .field("free", &self.free())
            .field("columns", &&self.columns[..])
            .finish()
    }
}

impl<N: ArrayLength<u8>> ColumnStrip<N> {
    pub fn new() -> Self {
        Self::with_spacing(SPACING)
    }

    pub fn with_spacing(spacing: usize) -> Self {
        ColumnStrip {
            columns: Vec::new(),
            spacing,
            glyphs: 0,
        }
    }

    pub fn spacing(&self) -> usize {
        self.spacing
    }

    pub fn columns(&self) -> &[u8] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of glyphs pushed since the last clear
    pub fn glyph_count(&self) -> usize {
        self.glyphs
    }

    /// Get number of free columns
    pub fn free(&self) -> usize {
        self.columns.capacity() - self.columns.len()
    }

    pub fn clear(&mut self) {
        self.shrink_to(0);
        self.glyphs = 0;
    }

    // heapless 0.5 `Vec::truncate` (and `clear`, which calls it) index past
    // the shortened slice; popping keeps to checked accesses.
    fn shrink_to(&mut self, len: usize) {
        while self.columns.len() > len {
            self.columns.pop();
        }
    }

    /// Append one glyph, preceded by the spacing columns unless it is the first.
    /// Fails with [`Error::NoSpace`] and leaves the strip untouched if it does not fit.
    pub fn push_glyph(&mut self, glyph: &[u8]) -> Result<(), Error> {
        let gap = if self.glyphs == 0 { 0 } else { self.spacing };
        let needed = gap.checked_add(glyph.len());
        if needed.map_or(true, |n| n > self.free()) {
            warn!(
                "column strip full: need {:?} columns, {} free",
                needed,
                self.free()
            );
            return Err(Error::NoSpace);
        }

        for _ in 0..gap {
            self.columns.push(0x00).map_err(|_| Error::NoSpace)?;
        }
        self.columns
            .extend_from_slice(glyph)
            .map_err(|_| Error::NoSpace)?;
        self.glyphs += 1;
        Ok(())
    }

    pub fn push_char<F: ColumnFont>(&mut self, font: &F, c: char) -> Result<(), Error> {
        let glyph = font.glyph_for(c)?;
        self.push_glyph(glyph)
    }

    /// Append every character of `s`. On error the strip is restored to
    /// what it held before the call.
    pub fn push_str<F: ColumnFont>(&mut self, font: &F, s: &str) -> Result<(), Error> {
        let (len, glyphs) = (self.columns.len(), self.glyphs);

        for c in s.chars() {
            if let Err(err) = self.push_char(font, c) {
                self.shrink_to(len);
                self.glyphs = glyphs;
                return Err(err);
            }
        }
        Ok(())
    }

    /// Borrow the strip as a `core::fmt::Write` sink rendering in `font`.
    pub fn writer<'a, F: ColumnFont>(&'a mut self, font: &'a F) -> StripWriter<'a, N, F> {
        StripWriter { strip: self, font }
    }

    /// Send the columns to the display as a single data transfer, starting at
    /// whatever draw position the display currently has.
    pub fn flush<DI: WriteOnlyDataCommand>(&self, iface: &mut DI) -> Result<(), DisplayError> {
        iface.send_data(U8(&self.columns))
    }
}

impl<N: ArrayLength<u8>> Default for ColumnStrip<N> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct StripWriter<'a, N: ArrayLength<u8>, F> {
    strip: &'a mut ColumnStrip<N>,
    font: &'a F,
}

impl<'a, N, F> fmt::Write for StripWriter<'a, N, F>
where
    N: ArrayLength<u8>,
    F: ColumnFont,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.strip.push_str(self.font, s).map_err(|_| fmt::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{BigDigits, Font5x8, SmallDigits};
    use core::fmt::Write;
    use display_interface::DataFormat;
    use heapless::consts::{U4, U11, U16, U32};
    use std::vec::Vec as StdVec;

    #[derive(Default)]
    struct RecordingInterface {
        commands: usize,
        transfers: StdVec<StdVec<u8>>,
    }

    impl WriteOnlyDataCommand for RecordingInterface {
        fn send_commands(&mut self, _cmd: DataFormat<'_>) -> Result<(), DisplayError> {
            self.commands += 1;
            Ok(())
        }

        fn send_data(&mut self, buf: DataFormat<'_>) -> Result<(), DisplayError> {
            match buf {
                DataFormat::U8(bytes) => {
                    self.transfers.push(bytes.to_vec());
                    Ok(())
                }
                _ => Err(DisplayError::DataFormatNotImplemented),
            }
        }
    }

    struct BrokenInterface;

    impl WriteOnlyDataCommand for BrokenInterface {
        fn send_commands(&mut self, _cmd: DataFormat<'_>) -> Result<(), DisplayError> {
            Err(DisplayError::BusWriteError)
        }

        fn send_data(&mut self, _buf: DataFormat<'_>) -> Result<(), DisplayError> {
            Err(DisplayError::BusWriteError)
        }
    }

    #[test]
    fn it_computes_text_width() {
        assert_eq!(text_width(&Font5x8, 0, SPACING), Some(0));
        assert_eq!(text_width(&Font5x8, 1, SPACING), Some(5));
        assert_eq!(text_width(&Font5x8, 3, SPACING), Some(17));
        assert_eq!(text_width(&BigDigits, 4, 2), Some(22));
        assert_eq!(text_width(&Font5x8, 1, usize::MAX), Some(5));
        assert_eq!(text_width(&Font5x8, 2, usize::MAX), None);
        assert_eq!(text_width(&Font5x8, usize::MAX, 0), None);
    }

    #[test]
    fn it_starts_empty() {
        let strip: ColumnStrip<U16> = ColumnStrip::new();
        assert!(strip.is_empty());
        assert_eq!(strip.free(), 16);
        assert_eq!(strip.spacing(), 1);
        assert_eq!(strip.glyph_count(), 0);
    }

    #[test]
    fn it_separates_glyphs_with_one_blank_column() {
        let mut strip: ColumnStrip<U16> = ColumnStrip::new();
        strip.push_str(&SmallDigits, "10").unwrap();

        assert_eq!(
            strip.columns(),
            &[0x24, 0x3E, 0x20, 0x00, 0x3E, 0x22, 0x3E]
        );
        assert_eq!(strip.glyph_count(), 2);
        assert_eq!(Some(strip.len()), text_width(&SmallDigits, 2, SPACING));
    }

    #[test]
    fn it_honours_custom_spacing() {
        let mut strip: ColumnStrip<U32> = ColumnStrip::with_spacing(0);
        strip.push_str(&BigDigits, "88").unwrap();
        assert_eq!(
            strip.columns(),
            &[0x77, 0x49, 0x49, 0x77, 0x77, 0x49, 0x49, 0x77]
        );

        let mut strip: ColumnStrip<U32> = ColumnStrip::with_spacing(2);
        strip.push_str(&BigDigits, "11").unwrap();
        assert_eq!(
            strip.columns(),
            &[0x00, 0x42, 0x7F, 0x40, 0x00, 0x00, 0x00, 0x42, 0x7F, 0x40]
        );
    }

    #[test]
    fn it_mixes_faces() {
        let mut strip: ColumnStrip<U32> = ColumnStrip::new();
        strip.push_char(&BigDigits, '1').unwrap();
        strip.push_char(&Font5x8, ':').unwrap();
        strip.push_char(&SmallDigits, '5').unwrap();

        assert_eq!(strip.len(), 4 + 1 + 5 + 1 + 3);
        assert_eq!(&strip.columns()[5..10], &[0x6C, 0x6C, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn it_fits_exactly_to_capacity() {
        // two ascii glyphs plus one gap
        let mut strip: ColumnStrip<U11> = ColumnStrip::new();
        strip.push_str(&Font5x8, "AB").unwrap();
        assert_eq!(strip.free(), 0);
        assert_eq!(strip.push_glyph(&[]), Err(Error::NoSpace));
    }

    #[test]
    fn it_errors_on_overflow_without_partial_writes() {
        let mut strip: ColumnStrip<U4> = ColumnStrip::new();
        assert_eq!(strip.push_char(&Font5x8, 'A'), Err(Error::NoSpace));
        assert!(strip.is_empty());

        strip.push_char(&SmallDigits, '1').unwrap();
        // one gap column would fit, the glyph would not
        assert_eq!(strip.push_char(&SmallDigits, '2'), Err(Error::NoSpace));
        assert_eq!(strip.columns(), &[0x24, 0x3E, 0x20]);
        assert_eq!(strip.glyph_count(), 1);
    }

    #[test]
    fn it_rolls_back_failed_strings() {
        let mut strip: ColumnStrip<U32> = ColumnStrip::new();
        strip.push_str(&Font5x8, "ok").unwrap();
        let before: StdVec<u8> = strip.columns().to_vec();

        assert_eq!(
            strip.push_str(&Font5x8, "a\u{7f}"),
            Err(Error::CharacterOutOfRange(0x7F))
        );
        assert_eq!(strip.columns(), &before[..]);
        assert_eq!(strip.glyph_count(), 2);

        assert_eq!(strip.push_str(&BigDigits, "12:30"), Err(Error::NotADigit(':')));
        assert_eq!(strip.columns(), &before[..]);

        // rolled back columns can be reused
        strip.push_str(&SmallDigits, "1").unwrap();
        assert_eq!(&strip.columns()[before.len()..], &[0x00, 0x24, 0x3E, 0x20]);
    }

    #[test]
    fn it_clears() {
        let mut strip: ColumnStrip<U16> = ColumnStrip::new();
        strip.push_str(&SmallDigits, "42").unwrap();
        strip.clear();
        assert!(strip.is_empty());

        // no leading gap after a clear
        strip.push_char(&SmallDigits, '0').unwrap();
        assert_eq!(strip.columns(), &[0x3E, 0x22, 0x3E]);
    }

    #[test]
    fn it_clears_a_full_strip() {
        let mut strip: ColumnStrip<U11> = ColumnStrip::new();
        strip.push_str(&Font5x8, "AB").unwrap();
        assert_eq!(strip.free(), 0);

        strip.clear();
        assert!(strip.is_empty());
        assert_eq!(strip.free(), 11);
        assert_eq!(strip.glyph_count(), 0);

        strip.push_str(&Font5x8, "AB").unwrap();
        assert_eq!(strip.len(), 11);
    }

    #[test]
    fn it_rejects_huge_spacing_without_panicking() {
        let mut strip: ColumnStrip<U16> = ColumnStrip::with_spacing(usize::MAX);
        strip.push_char(&SmallDigits, '1').unwrap();
        assert_eq!(strip.push_char(&SmallDigits, '2'), Err(Error::NoSpace));
        assert_eq!(strip.push_glyph(&[]), Err(Error::NoSpace));
        assert_eq!(strip.columns(), &[0x24, 0x3E, 0x20]);
    }

    #[test]
    fn it_writes_formatted_text() {
        let mut strip: ColumnStrip<U32> = ColumnStrip::new();
        write!(strip.writer(&SmallDigits), "{:02}", 7).unwrap();
        assert_eq!(
            strip.columns(),
            &[0x3E, 0x22, 0x3E, 0x00, 0x06, 0x02, 0x3E]
        );

        let mut strip: ColumnStrip<U4> = ColumnStrip::new();
        assert!(write!(strip.writer(&Font5x8), "{}", 1).is_err());
    }

    #[test]
    fn it_flushes_columns_as_one_transfer() {
        let mut strip: ColumnStrip<U16> = ColumnStrip::new();
        strip.push_str(&Font5x8, "Hi").unwrap();

        let mut iface = RecordingInterface::default();
        strip.flush(&mut iface).unwrap();

        assert_eq!(iface.commands, 0);
        assert_eq!(iface.transfers.len(), 1);
        assert_eq!(
            iface.transfers[0],
            [0x7F, 0x08, 0x08, 0x08, 0x7F, 0x00, 0x7D, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn it_passes_display_errors_through() {
        let mut strip: ColumnStrip<U16> = ColumnStrip::new();
        strip.push_char(&Font5x8, 'x').unwrap();

        let err = strip.flush(&mut BrokenInterface).unwrap_err();
        assert!(matches!(err, DisplayError::BusWriteError));
    }
}
