//! Switch decoding and LED limit mirroring
//!
//! The switch bank carries one 7-bit limit and one format flag per side:
//!
//! ```text
//! bit   15      14..8          7       6..0
//!     [fmt] [interior limit] [fmt] [exterior limit]
//!     interior               exterior
//! ```
//!
//! The LED bank above the switches mirrors the two limits in the same
//! bit positions with the format bits dark.

use thermo_hal::DigitalOutput;

use crate::units::TemperatureUnit;

/// Mask for one 7-bit limit field
pub const LIMIT_MASK: u32 = 0x7F;

/// One of the two independently rendered temperature channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Side {
    /// On-die sensor: left display half, upper switch byte, RGB at PWM 3-5
    Interior,
    /// I2C probe: right display half, lower switch byte, RGB at PWM 0-2
    Exterior,
}

impl Side {
    /// Both sides in render order
    pub const ALL: [Side; 2] = [Side::Interior, Side::Exterior];

    /// Bit offset of this side's limit field in the switch word
    pub const fn limit_shift(self) -> u32 {
        match self {
            Side::Interior => 8,
            Side::Exterior => 0,
        }
    }

    /// Bit index of this side's format switch
    pub const fn format_bit(self) -> u8 {
        match self {
            Side::Interior => 15,
            Side::Exterior => 7,
        }
    }

    /// First display position of this side's four-digit half
    pub const fn position_offset(self) -> u8 {
        match self {
            Side::Interior => 4,
            Side::Exterior => 0,
        }
    }
}

/// User-set temperature limit in whole degrees Celsius (0-127)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemperatureLimit(u8);

impl TemperatureLimit {
    /// Largest limit the switches can express
    pub const MAX: Self = Self(LIMIT_MASK as u8);

    /// Create a limit, keeping only the low seven bits
    pub const fn new(value: u8) -> Self {
        Self(value & LIMIT_MASK as u8)
    }

    /// Limit in whole degrees
    pub const fn degrees(self) -> u8 {
        self.0
    }

    /// Check whether a Celsius reading is above this limit
    ///
    /// The comparison uses the raw reading; display clamping does not
    /// apply here.
    pub fn is_exceeded_by(self, temp_c: f32) -> bool {
        temp_c > f32::from(self.0)
    }
}

/// One sample of the switch bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchWord(pub u32);

impl SwitchWord {
    /// Extract the limit field for a side
    pub const fn limit(self, side: Side) -> TemperatureLimit {
        TemperatureLimit(((self.0 >> side.limit_shift()) & LIMIT_MASK) as u8)
    }

    /// Check whether a side's format switch selects Fahrenheit
    pub const fn is_fahrenheit(self, side: Side) -> bool {
        (self.0 >> side.format_bit()) & 0x01 == 1
    }

    /// Display unit selected for a side
    pub const fn unit(self, side: Side) -> TemperatureUnit {
        TemperatureUnit::from_flag(self.is_fahrenheit(side))
    }
}

/// Pack two limits into an LED word
///
/// `lower` lands in bits 0-6, `upper` in bits 8-14; every other bit is 0.
pub const fn pack_limits(lower: TemperatureLimit, upper: TemperatureLimit) -> u32 {
    (lower.0 as u32 & LIMIT_MASK) | ((upper.0 as u32 & LIMIT_MASK) << 8)
}

/// Mirror both limits onto the LED port
///
/// Returns the word that was written.
pub fn mirror_limits<O: DigitalOutput>(
    leds: &mut O,
    lower: TemperatureLimit,
    upper: TemperatureLimit,
) -> u32 {
    let word = pack_limits(lower, upper);
    leds.write(word);
    word
}
