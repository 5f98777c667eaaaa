//! Word-wide ports over GPIO pin banks
//!
//! Pin `i` of the bank maps to bit `i` of the port word. Banks wider than
//! 32 pins only use the first 32.

use embedded_hal::digital::{InputPin, OutputPin, PinState};
use thermo_hal::{DigitalInput, DigitalOutput};

/// Digital input port over a bank of input pins
pub struct InputBank<P, const N: usize> {
    pins: [P; N],
}

impl<P: InputPin, const N: usize> InputBank<P, N> {
    /// Create an input port from pins ordered by bit
    pub fn new(pins: [P; N]) -> Self {
        Self { pins }
    }

    /// Release the pins
    pub fn release(self) -> [P; N] {
        self.pins
    }
}

impl<P: InputPin, const N: usize> DigitalInput for InputBank<P, N> {
    fn read_all(&mut self) -> u32 {
        // A pin that fails to read counts as low
        self.pins
            .iter_mut()
            .take(32)
            .enumerate()
            .fold(0, |word, (bit, pin)| {
                if pin.is_high().unwrap_or(false) {
                    word | (1 << bit)
                } else {
                    word
                }
            })
    }

    fn read_bit(&mut self, n: u8) -> bool {
        match self.pins.get_mut(n as usize) {
            Some(pin) if n < 32 => pin.is_high().unwrap_or(false),
            _ => false,
        }
    }
}

/// Digital output port over a bank of output pins
pub struct OutputBank<P, const N: usize> {
    pins: [P; N],
}

impl<P: OutputPin, const N: usize> OutputBank<P, N> {
    /// Create an output port from pins ordered by bit
    ///
    /// Pins keep whatever level they were configured with until the
    /// first write.
    pub fn new(pins: [P; N]) -> Self {
        Self { pins }
    }

    /// Release the pins
    pub fn release(self) -> [P; N] {
        self.pins
    }
}

impl<P: OutputPin, const N: usize> DigitalOutput for OutputBank<P, N> {
    fn write(&mut self, word: u32) {
        for (bit, pin) in self.pins.iter_mut().take(32).enumerate() {
            let state = PinState::from((word >> bit) & 0x01 == 1);
            // Writes to a faulted pin are dropped
            let _ = pin.set_state(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    /// Mock GPIO pin for testing
    #[derive(Clone, Copy, Default)]
    struct MockPin {
        high: bool,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl InputPin for MockPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.high)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.high)
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }

        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }
    }

    fn pins_from(word: u32) -> [MockPin; 16] {
        let mut pins = [MockPin::default(); 16];
        for (bit, pin) in pins.iter_mut().enumerate() {
            pin.high = (word >> bit) & 1 == 1;
        }
        pins
    }

    #[test]
    fn test_input_bank_word() {
        let mut switches = InputBank::new(pins_from(0x9234));
        assert_eq!(switches.read_all(), 0x9234);
        assert!(switches.read_bit(15));
        assert!(!switches.read_bit(7));
        assert!(!switches.read_bit(16));
        assert!(!switches.read_bit(40));
    }

    #[test]
    fn test_output_bank_word() {
        let mut leds = OutputBank::new([MockPin::default(); 16]);
        leds.write(0x3412);

        let pins = leds.release();
        let mut word = 0u32;
        for (bit, pin) in pins.iter().enumerate() {
            if pin.high {
                word |= 1 << bit;
            }
        }
        assert_eq!(word, 0x3412);
    }

    #[test]
    fn test_output_bank_drops_high_bits() {
        let mut leds = OutputBank::new([MockPin::default(); 4]);
        leds.write(0xFFFF_FFF5);

        let pins = leds.release();
        assert!(pins[0].high);
        assert!(!pins[1].high);
        assert!(pins[2].high);
        assert!(!pins[3].high);
    }
}
