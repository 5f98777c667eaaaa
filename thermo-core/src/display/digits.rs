//! Temperature to display-cell decomposition
//!
//! Below 100 degrees a half shows `TT.t` (tens blanked under 10), at 100
//! and above it shows the rounded whole value `HHH` and drops the tenths.
//! Rounding is half-up on the value scaled to tenths, in single precision.

use thermo_hal::SegmentDisplay;

use super::{Cell, Readout};
use crate::switches::Side;
use crate::units::TemperatureUnit;

/// Decompose a reading into the four cells of one display half
///
/// The reading in the selected unit is clamped at zero before rounding;
/// each unit is clamped on its own, so a negative Celsius reading can
/// still show a positive Fahrenheit value.
pub fn decompose(temp_c: f32, temp_f: f32, unit: TemperatureUnit, side: Side) -> Readout {
    let mut temp = unit.select(temp_c, temp_f);
    if temp < 0.0 {
        temp = 0.0;
    }

    // Float to int casts saturate, and NaN becomes 0
    let scaled_tenths = (temp * 10.0 + 0.5) as u32;
    let whole = if temp >= 100.0 {
        (temp + 0.5) as u32
    } else {
        scaled_tenths / 10
    };

    let hundreds = digit(whole / 100);
    let tens = digit(whole / 10);
    let ones = digit(whole);
    let tenths = digit(scaled_tenths);

    let overflow = whole >= 100;

    let cells = if overflow {
        [
            Cell::Unit(unit),
            Cell::Digit(ones),
            Cell::Digit(tens),
            Cell::Digit(hundreds),
        ]
    } else {
        let leading = if whole >= 10 {
            Cell::Digit(tens)
        } else {
            Cell::Blank
        };
        [
            Cell::Unit(unit),
            Cell::Digit(tenths),
            Cell::Digit(ones),
            leading,
        ]
    };

    Readout {
        side,
        cells,
        overflow,
    }
}

/// Decompose a reading and write it to its display half
///
/// Returns `true` when the half switched to whole-degree mode.
pub fn show_temperature<D: SegmentDisplay>(
    display: &mut D,
    temp_c: f32,
    temp_f: f32,
    unit: TemperatureUnit,
    side: Side,
) -> bool {
    let readout = decompose(temp_c, temp_f, unit, side);
    readout.render(display);
    readout.overflow
}

#[inline]
fn digit(value: u32) -> u8 {
    (value % 10) as u8
}
