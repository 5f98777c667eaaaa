//! Board-agnostic core logic for the dual-probe thermometer
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Unit conversion (Celsius to Fahrenheit)
//! - Switch decoding and LED limit mirroring
//! - RGB over-limit indicator control
//! - Seven-segment digit decomposition and decimal-point placement
//! - The sample-and-render cycle tying the peripherals together
//!
//! Everything except [`cycle`] is pure arithmetic over its inputs.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod cycle;
pub mod display;
pub mod indicator;
pub mod switches;
pub mod traits;
pub mod units;

pub use config::ThermometerConfig;
pub use cycle::{CycleReport, Reading, SideReport, Thermometer};
pub use display::{DecimalPoints, Readout};
pub use indicator::IndicatorColor;
pub use switches::{Side, SwitchWord, TemperatureLimit};
pub use units::TemperatureUnit;
