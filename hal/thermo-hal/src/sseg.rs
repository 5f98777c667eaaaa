//! Seven-segment display abstraction

/// Raw pattern that turns every segment of a digit off
pub const BLANK: u8 = 0xFF;

/// Multiplexed seven-segment display
///
/// Positions count from the rightmost digit (0) to the leftmost
/// (`DIGITS - 1`). Patterns 0x00-0x0F render the matching hex glyph;
/// [`BLANK`] renders nothing.
pub trait SegmentDisplay {
    /// Number of digit positions
    const DIGITS: u8 = 8;

    /// Write a glyph pattern to a digit position
    ///
    /// Implementations ignore positions outside their range.
    fn write_pattern(&mut self, pattern: u8, position: u8);

    /// Set the decimal points, one bit per digit position
    fn set_decimal_points(&mut self, mask: u8);
}

impl<T: SegmentDisplay + ?Sized> SegmentDisplay for &mut T {
    const DIGITS: u8 = T::DIGITS;

    fn write_pattern(&mut self, pattern: u8, position: u8) {
        (**self).write_pattern(pattern, position)
    }

    fn set_decimal_points(&mut self, mask: u8) {
        (**self).set_decimal_points(mask)
    }
}
