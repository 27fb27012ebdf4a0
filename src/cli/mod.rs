//! Command line interface for the installer generator.
//!
//! Replaces the installer form: the same choices (source directory,
//! output directory, name, files, formats, shortcut) are taken as
//! arguments, and results are reported as colored terminal output.

mod args;
pub mod commands;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::error::Result;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    let config = RuntimeConfig::from(&args);
    commands::execute(&args, &config).await
}
