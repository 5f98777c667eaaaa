//! Decimal-point placement
//!
//! In tenths mode the point sits on cell 2 of a half (`TT.t`). In
//! whole-degree mode the number moves one cell left, so the point moves
//! to cell 1 and separates the number from the unit letter.

use thermo_hal::SegmentDisplay;

use crate::switches::Side;

/// Decimal-point mask for the whole display, one bit per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecimalPoints(u8);

impl DecimalPoints {
    /// Choose the point for each half from its overflow flag
    pub const fn place(interior_overflow: bool, exterior_overflow: bool) -> Self {
        Self(0)
            .with(Side::Interior, interior_overflow)
            .with(Side::Exterior, exterior_overflow)
    }

    /// Add the point for one half, leaving the other half as it is
    ///
    /// Starting from [`DecimalPoints::default`], a half that is never added
    /// shows no point.
    pub const fn with(self, side: Side, overflow: bool) -> Self {
        Self(self.0 | Self::bit(side, overflow))
    }

    const fn bit(side: Side, overflow: bool) -> u8 {
        let cell = if overflow { 1 } else { 2 };
        1 << (side.position_offset() + cell)
    }

    /// Raw mask
    pub const fn mask(self) -> u8 {
        self.0
    }

    /// Latch the mask into the display
    pub fn apply<D: SegmentDisplay>(self, display: &mut D) {
        display.set_decimal_points(self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_placement_table() {
        assert_eq!(DecimalPoints::place(false, false).mask(), (1 << 2) | (1 << 6));
        assert_eq!(DecimalPoints::place(true, false).mask(), (1 << 2) | (1 << 5));
        assert_eq!(DecimalPoints::place(false, true).mask(), (1 << 1) | (1 << 6));
        assert_eq!(DecimalPoints::place(true, true).mask(), (1 << 1) | (1 << 5));
    }

    #[test]
    fn test_single_half() {
        let exterior_only = DecimalPoints::default().with(Side::Exterior, true);
        assert_eq!(exterior_only.mask(), 1 << 1);

        let interior_only = DecimalPoints::default().with(Side::Interior, false);
        assert_eq!(interior_only.mask(), 1 << 6);
    }

    #[test]
    fn test_apply_latches_mask() {
        let mut sseg = crate::display::mock::MockDisplay::new();
        DecimalPoints::place(true, false).apply(&mut sseg);
        assert_eq!(sseg.dp, 0b0010_0100);
    }

    proptest! {
        #[test]
        fn prop_one_point_per_half(int in any::<bool>(), ext in any::<bool>()) {
            let mask = DecimalPoints::place(int, ext).mask();
            prop_assert_eq!((mask & 0x0F).count_ones(), 1);
            prop_assert_eq!((mask & 0xF0).count_ones(), 1);
        }
    }
}
