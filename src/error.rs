//! Error types for the command line front-end.
//!
//! Core failures come from [`crate::bundler::Error`]; this module adds the
//! CLI and logging setup failures around them.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Main error type for the command line front-end
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Installer generation errors
    #[error("{0}")]
    Bundler(#[from] crate::bundler::Error),

    /// Logger could not be installed
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl GeneratorError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        use crate::bundler::Error as Core;

        match self {
            GeneratorError::Bundler(Core::CommandFailed { .. }) => vec![
                "Install Inno Setup 6 (EXE) or WiX Toolset v3 (MSI)".to_string(),
                "Or point --iscc / --candle / --light at the compiler executables".to_string(),
            ],
            GeneratorError::Bundler(Core::CompilationFailed { .. }) => vec![
                "Check the compiler output above and the generated setup_script file".to_string(),
            ],
            GeneratorError::Bundler(Core::CompilerTimeout { .. }) => {
                vec!["Increase the compile timeout with --timeout-secs".to_string()]
            }
            GeneratorError::Cli(_) => vec!["Run with --help to see valid arguments".to_string()],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_failures_suggest_installing_toolchain() {
        let err = GeneratorError::from(crate::bundler::Error::CommandFailed {
            command: "ISCC.exe setup_script.iss".into(),
            error: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        });
        assert!(err.recovery_suggestions()[0].contains("Inno Setup"));
    }
}
