//! Error types for installer generation.
//!
//! Provides contextual error chaining, filesystem errors that carry the
//! offending path, and the compiler failure variants raised while driving
//! Inno Setup and WiX.
//!
//! Validation problems (empty file list, blank name, missing intermediate
//! object) are not errors: they are reported through
//! [`SoftFailure`](crate::bundler::SoftFailure). Everything in [`Error`] is a
//! hard failure that propagates to the caller.
//!
//! # Example
//!
//! ```no_run
//! use installer_generator::bundler::error::{Context, ErrorExt, Result};
//! use std::path::Path;
//!
//! fn read_script(path: &Path) -> Result<String> {
//!     let contents = std::fs::read_to_string(path)
//!         .fs_context("reading build script", path)?;
//!
//!     if contents.is_empty() {
//!         installer_generator::bail!("build script {} is empty", path.display());
//!     }
//!
//!     Ok(contents)
//! }
//!
//! fn first_line(path: &Path) -> Result<String> {
//!     read_script(path)?
//!         .lines()
//!         .next()
//!         .map(String::from)
//!         .context("build script has no lines")
//! }
//! ```

use std::{fmt::Display, io, path::PathBuf, time::Duration};
use thiserror::Error as DeriveError;

/// Errors returned while generating installers.
#[derive(Debug, DeriveError)]
#[non_exhaustive]
pub enum Error {
    /// Error with context. Created by the [`Context`] trait.
    #[error("{0}: {1}")]
    Context(String, Box<Self>),

    /// File system error with path context.
    ///
    /// Created by the [`ErrorExt`] trait's `fs_context` method.
    #[error("{context} {path}: {error}")]
    Fs {
        /// Context describing the operation (e.g., "writing build script")
        context: &'static str,
        /// Path that was being accessed
        path: PathBuf,
        /// The underlying I/O error
        error: io::Error,
    },

    /// An external compiler could not be spawned or waited on.
    #[error("failed to run command {command}: {error}")]
    CommandFailed {
        /// Command line that failed to execute
        command: String,
        /// The underlying error
        error: io::Error,
    },

    /// An external compiler ran but exited unsuccessfully.
    ///
    /// `output` holds the captured stderr, or stdout when the tool wrote
    /// its diagnostics there instead.
    #[error("{tool} failed with {}: {output}", describe_exit(*.exit_code))]
    CompilationFailed {
        /// Compiler name (e.g., "ISCC", "candle", "light")
        tool: String,
        /// Process exit code, `None` when terminated by a signal
        exit_code: Option<i32>,
        /// Captured diagnostic output
        output: String,
    },

    /// An external compiler did not finish within the configured timeout.
    #[error("{tool} did not finish within {} seconds and was terminated", .timeout.as_secs())]
    CompilerTimeout {
        /// Compiler name
        tool: String,
        /// The timeout that elapsed
        timeout: Duration,
    },

    /// Unknown installer format key.
    #[error("unsupported installer format '{0}' (expected one of: exe, msi)")]
    UnsupportedFormat(String),

    /// Generic I/O error.
    #[error("{0}")]
    IoError(#[from] io::Error),

    /// Handlebars template rendering error.
    #[error("{0}")]
    HandleBarsError(#[from] handlebars::RenderError),

    /// Handlebars template parsing error.
    #[error("{0}")]
    Template(#[from] handlebars::TemplateError),

    /// Configuration file parsing error.
    #[error("invalid configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Error walking the source directory.
    #[error("{0}")]
    WalkdirError(#[from] walkdir::Error),

    /// Generic error with custom message.
    #[error("{0}")]
    GenericError(String),
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// Convenient type alias for Result.
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for adding context to errors.
///
/// Similar to `anyhow::Context` but integrated with this crate's [`Error`].
/// Works with both `Result<T, E>` and `Option<T>`.
pub trait Context<T> {
    /// Add context to an error.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;

    /// Add context to an error using a closure (lazy evaluation).
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T> Context<T> for Result<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::Context(context.to_string(), Box::new(e)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| Error::Context(f().to_string(), Box::new(e)))
    }
}

impl<T> Context<T> for Option<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.ok_or_else(|| Error::GenericError(f().to_string()))
    }
}

/// Extension trait for filesystem operations with automatic path context.
pub trait ErrorExt<T> {
    /// Add filesystem context to an I/O error.
    ///
    /// The `context` should be a present-tense verb phrase describing the operation,
    /// e.g., "writing build script", "creating output directory".
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}

/// Macro for early return with error.
///
/// Converts the message into a [`Error::GenericError`] and returns immediately.
///
/// ```ignore
/// bail!("operation failed");
/// bail!("invalid value: {}", value);
/// ```
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::bundler::error::Error::GenericError(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::bundler::error::Error::GenericError($err.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::bundler::error::Error::GenericError(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compilation_failure_mentions_tool_and_output() {
        let err = Error::CompilationFailed {
            tool: "candle".into(),
            exit_code: Some(103),
            output: "error CNDL0104: not a valid source file".into(),
        };
        let message = err.to_string();
        assert!(message.contains("candle"));
        assert!(message.contains("exit code 103"));
        assert!(message.contains("CNDL0104"));
    }

    #[test]
    fn context_wraps_inner_error() {
        let result: Result<()> = Err(Error::GenericError("inner".into()));
        let err = result.context("rendering WiX script").unwrap_err();
        assert_eq!(err.to_string(), "rendering WiX script: inner");
    }

    #[test]
    fn fs_context_keeps_path() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let err = result
            .fs_context("reading build script", "/tmp/setup_script.iss")
            .unwrap_err();
        assert!(err.to_string().contains("/tmp/setup_script.iss"));
    }
}
