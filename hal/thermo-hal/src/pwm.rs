//! PWM controller abstraction

/// Multi-channel PWM duty-cycle controller
///
/// The thermometer drives two RGB indicators from one controller:
/// channels 0-2 form the exterior triple and channels 3-5 the interior
/// triple.
pub trait PwmController {
    /// Number of channels the controller exposes
    const CHANNELS: u8 = 8;

    /// Set the duty cycle of a channel
    ///
    /// - `channel`: Channel index (0 to `CHANNELS - 1`)
    /// - `duty`: Fraction of the period held high (0.0-1.0)
    ///
    /// Implementations ignore channels outside their range.
    fn set_duty_cycle(&mut self, channel: u8, duty: f32);
}

impl<T: PwmController + ?Sized> PwmController for &mut T {
    const CHANNELS: u8 = T::CHANNELS;

    fn set_duty_cycle(&mut self, channel: u8, duty: f32) {
        (**self).set_duty_cycle(channel, duty)
    }
}
