//! Temperature sensor implementations

pub mod adt7420;
pub mod xadc;

pub use adt7420::{Adt7420, Resolution};
pub use xadc::{XadcDieSensor, XadcReader};
