//! Peripheral ports built from `embedded-hal` pins
//!
//! These adapters let boards without word-wide I/O cores (plain GPIO,
//! timer PWM channels) stand in for the FPGA's switch, LED and PWM cores.

pub mod gpio;
pub mod pwm;

pub use gpio::{InputBank, OutputBank};
pub use pwm::PwmBank;
