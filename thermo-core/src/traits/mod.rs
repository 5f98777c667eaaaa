//! Sensor abstraction traits
//!
//! These traits define the interface between the sample-and-render cycle
//! and the temperature sensor drivers.

pub mod sensor;

pub use sensor::{SensorError, TemperatureSensor};
