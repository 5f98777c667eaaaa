//! Digital port abstractions
//!
//! Ports are word-wide: a read returns every input line at once and a
//! write drives every output line at once. Bit `n` of the word is line `n`.

/// Digital input port (slide switches)
pub trait DigitalInput {
    /// Sample all input lines
    fn read_all(&mut self) -> u32;

    /// Sample a single input line
    ///
    /// Lines beyond the word width read low.
    fn read_bit(&mut self, n: u8) -> bool {
        if n >= 32 {
            return false;
        }
        (self.read_all() >> n) & 0x01 == 1
    }
}

/// Digital output port (discrete LEDs)
pub trait DigitalOutput {
    /// Drive all output lines from `word`
    fn write(&mut self, word: u32);
}

impl<T: DigitalInput + ?Sized> DigitalInput for &mut T {
    fn read_all(&mut self) -> u32 {
        (**self).read_all()
    }

    fn read_bit(&mut self, n: u8) -> bool {
        (**self).read_bit(n)
    }
}

impl<T: DigitalOutput + ?Sized> DigitalOutput for &mut T {
    fn write(&mut self, word: u32) {
        (**self).write(word)
    }
}
