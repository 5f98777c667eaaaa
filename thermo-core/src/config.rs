//! Thermometer configuration
//!
//! The firmware has no runtime configuration surface; these values are
//! compiled in and handed to [`crate::Thermometer`] at construction.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::indicator::INDICATOR_DUTY;

/// Sample-and-render period in milliseconds
pub const POLL_PERIOD_MS: u32 = 200;

/// Thermometer configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThermometerConfig {
    /// Delay between the end of one cycle and the start of the next (ms)
    pub poll_period_ms: u32,
    /// RGB indicator brightness (duty-cycle fraction, 0.0-1.0)
    pub indicator_duty: f32,
}

impl ThermometerConfig {
    /// Factory configuration: 200 ms polling, 30% indicator brightness
    pub const DEFAULT: Self = Self {
        poll_period_ms: POLL_PERIOD_MS,
        indicator_duty: INDICATOR_DUTY,
    };

    /// Indicator duty limited to the valid PWM range
    pub fn duty(&self) -> f32 {
        if self.indicator_duty.is_nan() {
            return 0.0;
        }
        self.indicator_duty.clamp(0.0, 1.0)
    }
}

impl Default for ThermometerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
