//! Seven-segment rendering
//!
//! The eight-digit display is split into two halves of four cells. Cell 0
//! of each half holds the unit letter, cells 1-3 hold the number.
//!
//! ```text
//! position  7 6 5 4   3 2 1 0
//!           interior  exterior
//!           [ 2 4.5 C][   9.8 C]
//! ```

pub mod decimal;
pub mod digits;

pub use decimal::DecimalPoints;
pub use digits::{decompose, show_temperature};

use thermo_hal::sseg::BLANK;
use thermo_hal::SegmentDisplay;

use crate::switches::Side;
use crate::units::TemperatureUnit;

/// Number of cells in one display half
pub const HALF_DIGITS: usize = 4;

/// Content of one display cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cell {
    /// Decimal digit (0-9)
    Digit(u8),
    /// Unit letter
    Unit(TemperatureUnit),
    /// Segments off
    Blank,
}

impl Cell {
    /// Raw segment pattern for this cell
    pub const fn pattern(self) -> u8 {
        match self {
            Cell::Digit(d) => d,
            Cell::Unit(unit) => unit.glyph(),
            Cell::Blank => BLANK,
        }
    }
}

/// One display half's worth of decomposed temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Readout {
    /// Half the readout belongs to
    pub side: Side,
    /// Cells indexed by position within the half (0 = unit letter)
    pub cells: [Cell; HALF_DIGITS],
    /// Whole-degree value reached 100; tenths are not shown
    pub overflow: bool,
}

impl Readout {
    /// Raw patterns indexed by position within the half
    pub fn patterns(&self) -> [u8; HALF_DIGITS] {
        self.cells.map(Cell::pattern)
    }

    /// Write all four cells at their absolute display positions
    pub fn render<D: SegmentDisplay>(&self, display: &mut D) {
        let base = self.side.position_offset();
        for (pos, cell) in (0u8..).zip(self.cells.iter()) {
            display.write_pattern(cell.pattern(), base + pos);
        }
    }
}

/// Blank every digit and turn off every decimal point
///
/// Run once per frame before rendering so no cell keeps a stale glyph.
pub fn clear_display<D: SegmentDisplay>(display: &mut D) {
    for pos in 0..D::DIGITS {
        display.write_pattern(BLANK, pos);
    }
    display.set_decimal_points(0x00);
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;

    /// In-memory eight-digit display
    pub struct MockDisplay {
        pub digits: [u8; 8],
        pub dp: u8,
        pub writes: usize,
    }

    impl MockDisplay {
        pub fn new() -> Self {
            Self {
                digits: [0x00; 8],
                dp: 0xFF,
                writes: 0,
            }
        }
    }

    impl SegmentDisplay for MockDisplay {
        fn write_pattern(&mut self, pattern: u8, position: u8) {
            if let Some(cell) = self.digits.get_mut(position as usize) {
                *cell = pattern;
            }
            self.writes += 1;
        }

        fn set_decimal_points(&mut self, mask: u8) {
            self.dp = mask;
        }
    }
}
