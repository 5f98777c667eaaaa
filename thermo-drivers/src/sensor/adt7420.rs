//! ADT7420 I2C temperature probe
//!
//! The temperature register pair holds a big-endian two's-complement
//! value. In the power-on 13-bit mode the low three bits are flags and
//! one LSB is 1/16 °C; in 16-bit mode every bit is data and one LSB is
//! 1/128 °C.

use embedded_hal::i2c::I2c;
use thermo_core::traits::{SensorError, TemperatureSensor};

/// Address with both A0 and A1 strapped high (Nexys A7 / Pmod TMP2)
pub const DEFAULT_ADDRESS: u8 = 0x4B;

/// Temperature MSB register; the LSB follows with auto-increment
const REG_TEMP_MSB: u8 = 0x00;

/// Configuration register
const REG_CONFIG: u8 = 0x03;

/// Resolution select bit in the configuration register
const CONFIG_RESOLUTION_16: u8 = 1 << 7;

/// Conversion resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    /// 13-bit, 0.0625 °C per LSB (power-on default)
    #[default]
    Bits13,
    /// 16-bit, 0.0078 °C per LSB
    Bits16,
}

impl Resolution {
    /// Decode a raw temperature register pair to degrees Celsius
    pub fn decode(self, raw: u16) -> f32 {
        let value = raw as i16;
        match self {
            // Arithmetic shift keeps the sign while dropping the flag bits
            Resolution::Bits13 => f32::from(value >> 3) / 16.0,
            Resolution::Bits16 => f32::from(value) / 128.0,
        }
    }
}

/// ADT7420 temperature probe
pub struct Adt7420<I2C> {
    i2c: I2C,
    address: u8,
    resolution: Resolution,
}

impl<I2C: I2c> Adt7420<I2C> {
    /// Create a driver at [`DEFAULT_ADDRESS`] in 13-bit mode
    ///
    /// The device is not touched until the first read.
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Create a driver for a device at another strap address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            resolution: Resolution::Bits13,
        }
    }

    /// Select the conversion resolution
    pub fn set_resolution(&mut self, resolution: Resolution) -> Result<(), SensorError> {
        let config = match resolution {
            Resolution::Bits13 => 0x00,
            Resolution::Bits16 => CONFIG_RESOLUTION_16,
        };
        self.i2c
            .write(self.address, &[REG_CONFIG, config])
            .map_err(|_| SensorError::Bus)?;
        self.resolution = resolution;
        Ok(())
    }

    /// Current conversion resolution
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Read the raw temperature register pair
    ///
    /// Sets the register pointer and reads both bytes with a repeated
    /// start in between.
    pub fn read_raw(&mut self) -> Result<u16, SensorError> {
        let mut buf = [0u8; 2];
        self.i2c
            .write_read(self.address, &[REG_TEMP_MSB], &mut buf)
            .map_err(|_| SensorError::Bus)?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Release the bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> TemperatureSensor for Adt7420<I2C> {
    fn read_celsius(&mut self) -> Result<f32, SensorError> {
        let raw = self.read_raw()?;
        let temp_c = self.resolution.decode(raw);

        #[cfg(feature = "defmt")]
        defmt::trace!("ADT7420 raw {=u16:#x} -> {=f32} C", raw, temp_c);

        Ok(temp_c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};

    /// Mock ADT7420 on a mock bus
    struct MockBus {
        temp: [u8; 2],
        config: u8,
        pointer: u8,
        address: Option<u8>,
        present: bool,
    }

    impl MockBus {
        fn new(raw: u16) -> Self {
            Self {
                temp: raw.to_be_bytes(),
                config: 0,
                pointer: 0xFF,
                address: None,
                present: true,
            }
        }
    }

    impl ErrorType for MockBus {
        type Error = ErrorKind;
    }

    impl I2c for MockBus {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if !self.present {
                return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
            }
            self.address = Some(address);

            for op in operations.iter_mut() {
                match op {
                    Operation::Write(bytes) => {
                        self.pointer = bytes[0];
                        if bytes.len() > 1 && self.pointer == REG_CONFIG {
                            self.config = bytes[1];
                        }
                    }
                    Operation::Read(buf) => {
                        let n = buf.len().min(2);
                        buf[..n].copy_from_slice(&self.temp[..n]);
                    }
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_decode_13_bit() {
        let r = Resolution::Bits13;
        assert_eq!(r.decode(0x0000), 0.0);
        assert_eq!(r.decode(0x0C80), 25.0);
        assert_eq!(r.decode(0x0C88), 25.0625);
        assert_eq!(r.decode(0x4B00), 150.0);
        assert_eq!(r.decode(0xFFF8), -0.0625);
        assert_eq!(r.decode(0xEC00), -40.0);
    }

    #[test]
    fn test_flag_bits_ignored() {
        assert_eq!(Resolution::Bits13.decode(0x0C87), 25.0);
    }

    #[test]
    fn test_decode_16_bit() {
        let r = Resolution::Bits16;
        assert_eq!(r.decode(0x0C80), 25.0);
        assert_eq!(r.decode(0x0C81), 25.0078125);
        assert_eq!(r.decode(0xEC00), -40.0);
    }

    #[test]
    fn test_read_celsius() {
        let mut sensor = Adt7420::new(MockBus::new(0x0C88));
        assert_eq!(sensor.read_celsius(), Ok(25.0625));

        let bus = sensor.release();
        assert_eq!(bus.address, Some(DEFAULT_ADDRESS));
        assert_eq!(bus.pointer, REG_TEMP_MSB);
    }

    #[test]
    fn test_custom_address() {
        let mut sensor = Adt7420::with_address(MockBus::new(0), 0x48);
        sensor.read_raw().unwrap();
        assert_eq!(sensor.release().address, Some(0x48));
    }

    #[test]
    fn test_missing_device() {
        let mut bus = MockBus::new(0x0C80);
        bus.present = false;
        let mut sensor = Adt7420::new(bus);

        assert_eq!(sensor.read_celsius(), Err(SensorError::Bus));
    }

    #[test]
    fn test_switch_to_16_bit() {
        let mut sensor = Adt7420::new(MockBus::new(0x0C81));
        sensor.set_resolution(Resolution::Bits16).unwrap();

        assert_eq!(sensor.resolution(), Resolution::Bits16);
        assert_eq!(sensor.read_celsius(), Ok(25.0078125));
        assert_eq!(sensor.release().config, 0x80);
    }

    #[test]
    fn test_failed_resolution_change_keeps_mode() {
        let mut bus = MockBus::new(0);
        bus.present = false;
        let mut sensor = Adt7420::new(bus);

        assert_eq!(
            sensor.set_resolution(Resolution::Bits16),
            Err(SensorError::Bus)
        );
        assert_eq!(sensor.resolution(), Resolution::Bits13);
    }
}
