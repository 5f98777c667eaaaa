//! Temperature units and conversion
//!
//! All arithmetic is single precision so the displayed digits match the
//! soft-core firmware bit for bit.

/// Display unit selected by a format switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TemperatureUnit {
    /// Degrees Celsius (switch low)
    #[default]
    Celsius,
    /// Degrees Fahrenheit (switch high)
    Fahrenheit,
}

impl TemperatureUnit {
    /// Map a format switch to a unit (`true` = Fahrenheit)
    pub const fn from_flag(fahrenheit: bool) -> Self {
        if fahrenheit {
            Self::Fahrenheit
        } else {
            Self::Celsius
        }
    }

    /// Check if this is the Fahrenheit unit
    pub const fn is_fahrenheit(self) -> bool {
        matches!(self, Self::Fahrenheit)
    }

    /// Seven-segment pattern for the unit letter
    ///
    /// The display renders hex glyphs, so "C" and "F" are the hex digits
    /// 0x0C and 0x0F.
    pub const fn glyph(self) -> u8 {
        match self {
            Self::Celsius => 0x0C,
            Self::Fahrenheit => 0x0F,
        }
    }

    /// Pick the reading expressed in this unit
    pub fn select(self, temp_c: f32, temp_f: f32) -> f32 {
        match self {
            Self::Celsius => temp_c,
            Self::Fahrenheit => temp_f,
        }
    }
}

/// Convert degrees Celsius to degrees Fahrenheit
pub fn celsius_to_fahrenheit(temp_c: f32) -> f32 {
    temp_c * (9.0 / 5.0) + 32.0
}
