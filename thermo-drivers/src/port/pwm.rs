//! PWM controller over individual duty-cycle channels

use embedded_hal::pwm::SetDutyCycle;
use thermo_hal::PwmController;

/// PWM controller built from `N` independent channels
///
/// The fractional duty is scaled to each channel's own resolution and
/// rounded to the nearest step.
pub struct PwmBank<P, const N: usize> {
    channels: [P; N],
}

impl<P: SetDutyCycle, const N: usize> PwmBank<P, N> {
    /// Create a controller from channels ordered by index
    pub fn new(channels: [P; N]) -> Self {
        Self { channels }
    }

    /// Release the channels
    pub fn release(self) -> [P; N] {
        self.channels
    }
}

impl<P: SetDutyCycle, const N: usize> PwmController for PwmBank<P, N> {
    const CHANNELS: u8 = if N > u8::MAX as usize { u8::MAX } else { N as u8 };

    fn set_duty_cycle(&mut self, channel: u8, duty: f32) {
        let Some(pin) = self.channels.get_mut(channel as usize) else {
            return;
        };

        let duty = if duty.is_nan() { 0.0 } else { duty.clamp(0.0, 1.0) };
        let max = pin.max_duty_cycle();
        let value = (duty * f32::from(max) + 0.5) as u16;

        // A faulted channel keeps its previous duty
        let _ = SetDutyCycle::set_duty_cycle(pin, value.min(max));
    }
}
