//! RGB over-limit indicators
//!
//! Each side owns three consecutive PWM channels. Only the green and red
//! channels are ever lit; the remaining channel of the triple is held
//! dark.

use thermo_hal::PwmController;

use crate::switches::{Side, TemperatureLimit};

/// Indicator brightness as a duty-cycle fraction
pub const INDICATOR_DUTY: f32 = 0.30;

/// Indicator color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorColor {
    /// Reading at or below the limit
    Green,
    /// Reading above the limit
    Red,
}

impl IndicatorColor {
    /// Color for a raw Celsius reading against a limit
    pub fn for_reading(temp_c: f32, limit: TemperatureLimit) -> Self {
        if limit.is_exceeded_by(temp_c) {
            Self::Red
        } else {
            Self::Green
        }
    }

    /// Channel offset of this color from the side's base channel
    pub const fn offset(self) -> u8 {
        match self {
            Self::Green => 0,
            Self::Red => 1,
        }
    }
}

/// First channel of a side's RGB triple
pub const fn triple_start(side: Side) -> u8 {
    match side {
        Side::Interior => 3,
        Side::Exterior => 0,
    }
}

/// Base channel a color offset is added to (green channel of the triple)
pub const fn color_base(side: Side) -> u8 {
    triple_start(side) + 1
}

/// Show a color on one side's indicator
///
/// Writes exactly the three channels of the addressed triple: two are
/// cleared and `color_base + color` is set to `duty`. Channels of the
/// other triple are not touched.
pub fn set_indicator<P: PwmController>(pwm: &mut P, color: IndicatorColor, side: Side, duty: f32) {
    let start = triple_start(side);
    let lit = color_base(side) + color.offset();

    for channel in start..start + 3 {
        if channel != lit {
            pwm.set_duty_cycle(channel, 0.0);
        }
    }
    pwm.set_duty_cycle(lit, duty);
}

/// Turn off all three channels of one side's indicator
pub fn clear_indicator<P: PwmController>(pwm: &mut P, side: Side) {
    let start = triple_start(side);
    for channel in start..start + 3 {
        pwm.set_duty_cycle(channel, 0.0);
    }
}
