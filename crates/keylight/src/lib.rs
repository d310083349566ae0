#![no_std]

pub mod drivers;
pub mod tasks;

pub use tasks::*;

/// The number of LEDs in the strip we are driving, one per piano key
pub const STRIP_LENGTH: usize = 88;
