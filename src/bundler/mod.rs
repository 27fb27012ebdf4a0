//! Windows installer generation.
//!
//! Turns a set of user choices ([`InstallerRequest`]) into an installer by
//! rendering a build script for an external compiler and running it:
//!
//! | Format | Script | Compiler | Output |
//! |--------|--------|----------|--------|
//! | EXE | `setup_script.iss` | Inno Setup `ISCC.exe` | `<name>_installer.exe` |
//! | MSI | `setup_script.wxs` | WiX `candle.exe` then `light.exe` | `<name>.msi` |
//!
//! # Flow
//!
//! 1. [`Creator::for_format`] selects the strategy for a format
//! 2. [`LoggingCreator`] wraps it with lifecycle logging
//! 3. The strategy validates the request, renders and writes its script,
//!    fetches the shared [`CompilerHandle`] for its format from the
//!    [`HandleRegistry`], and runs the compiler(s)
//! 4. The result is a [`CreationOutcome`] (built or soft-failed) or an
//!    [`Error`] (hard failure)

pub mod compiler;
mod creator;
pub mod error;
mod format;
mod outcome;
pub mod platform;
mod request;
pub mod settings;
pub mod shortcut;
pub mod utils;

pub use compiler::{
    CompilationResult, CompileInvocation, CompilerHandle, HandleRegistry, registry,
};
pub use creator::{Creator, InstallerCreator, LoggingCreator};
pub use error::{Error, Result};
pub use format::InstallerFormat;
pub use outcome::{BundledArtifact, CreationOutcome, SoftFailure};
pub use platform::windows::{inno::ExeCreator, wix::MsiCreator, wix::WIXOBJ_FILE_NAME};
pub use request::InstallerRequest;
pub use settings::{Settings, SettingsBuilder};

/// Version stamped into every generated installer.
pub const PRODUCT_VERSION: &str = "1.0.0.0";
