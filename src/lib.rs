pub mod core;

pub use core::composer::{compose, OutputUnit};
pub use core::converter::convert;
pub use core::keymap::{map_keystrokes, JamoToken};
