//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in thermo-core and thermo-hal:
//!
//! - Temperature sensors (ADT7420 I2C probe, FPGA XADC on-die monitor)
//! - Word-wide ports over banks of `embedded-hal` pins
//! - A PWM controller over `embedded-hal` duty-cycle channels

#![no_std]
#![deny(unsafe_code)]

pub mod port;
pub mod sensor;
