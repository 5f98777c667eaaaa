//! Thermopair Hardware Abstraction Layer
//!
//! This crate defines the peripheral capabilities the thermometer core
//! consumes. On the original board each one is a memory-mapped core on
//! the FPGA bus; any implementation that honours the contracts below can
//! stand in for it (GPIO banks, shift registers, test doubles).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  thermo-core (cycle, decomposition)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  thermo-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ thermo-drivers│       │ board bindings│
//! │ (pin banks)   │       │ (MMIO cores)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`port::DigitalInput`], [`port::DigitalOutput`] - Word-wide digital I/O
//! - [`pwm::PwmController`] - Multi-channel duty-cycle output
//! - [`sseg::SegmentDisplay`] - Eight-digit seven-segment display

#![no_std]
#![deny(unsafe_code)]

pub mod port;
pub mod pwm;
pub mod sseg;

// Re-export key traits at crate root for convenience
pub use port::{DigitalInput, DigitalOutput};
pub use pwm::PwmController;
pub use sseg::SegmentDisplay;
