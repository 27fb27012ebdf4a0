//! Configuration for installer generation.
//!
//! Holds the locations of the external compilers, WiX product defaults, and
//! the compiler timeout, plus the TOML file format they can be loaded from.

mod builder;
mod core;
mod file;
mod windows;

pub use builder::SettingsBuilder;
pub use core::{DEFAULT_COMPILE_TIMEOUT, Settings};
pub use file::{InnoSection, LoggingSection, SettingsFile, WixSection};
pub use windows::{
    DEFAULT_CANDLE_PATH, DEFAULT_ISCC_PATH, DEFAULT_LIGHT_PATH, InnoSettings, WixSettings,
};
