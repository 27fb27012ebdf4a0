//! Windows installer generator
//!
//! Builds installers from a directory of files:
//! - `.exe` installers via Inno Setup
//! - `.msi` packages via the WiX Toolset
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{CliError, GeneratorError, Result};
