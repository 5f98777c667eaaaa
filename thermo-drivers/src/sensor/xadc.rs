//! FPGA on-die temperature monitor (7-series XADC)
//!
//! The XADC temperature status register holds a 12-bit conversion code
//! left-justified in 16 bits. The transfer function is
//! `T(°C) = code × 503.975 / 4096 − 273.15`.

use thermo_core::traits::{SensorError, TemperatureSensor};

/// Full-scale span of the on-chip sensor in kelvin
const FULL_SCALE_K: f32 = 503.975;

/// ADC codes per full scale (12-bit)
const CODES: f32 = 4096.0;

/// Kelvin to Celsius offset
const KELVIN_OFFSET: f32 = 273.15;

/// Access to the XADC temperature status register
pub trait XadcReader {
    /// Read the raw 16-bit temperature status register
    #[allow(clippy::result_unit_err)]
    fn read_temperature_register(&mut self) -> Result<u16, ()>;
}

/// On-die temperature sensor behind the XADC
pub struct XadcDieSensor<R> {
    reader: R,
}

impl<R> XadcDieSensor<R> {
    /// Create a die sensor over a register reader
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Convert a temperature status register value to degrees Celsius
    pub fn register_to_celsius(register: u16) -> f32 {
        let code = register >> 4;
        f32::from(code) * FULL_SCALE_K / CODES - KELVIN_OFFSET
    }

    /// Release the register reader
    pub fn release(self) -> R {
        self.reader
    }
}

impl<R: XadcReader> TemperatureSensor for XadcDieSensor<R> {
    fn read_celsius(&mut self) -> Result<f32, SensorError> {
        let register = self
            .reader
            .read_temperature_register()
            .map_err(|_| SensorError::ConversionError)?;

        // Code 0 is absolute zero, only seen from a converter that never ran
        if register >> 4 == 0 {
            return Err(SensorError::OutOfRange);
        }

        let temp_c = Self::register_to_celsius(register);

        #[cfg(feature = "defmt")]
        defmt::trace!("XADC die {=f32} C", temp_c);

        Ok(temp_c)
    }
}
