//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with validation
//! of the choices the installer form used to collect.

use clap::Parser;
use std::path::PathBuf;

use crate::bundler::InstallerFormat;

/// Windows installer generator
#[derive(Parser, Debug)]
#[command(
    name = "installer_generator",
    version,
    about = "Generates Windows installers (.exe via Inno Setup, .msi via WiX)",
    long_about = "Generates Windows installers from a directory of files.

Renders a build script into the output directory and runs the installer
compiler on it: Inno Setup (ISCC.exe) for EXE, WiX (candle.exe + light.exe)
for MSI.

Usage:
  installer_generator --source-dir C:\\src --output-dir C:\\out --name Demo --format exe --file app.exe
  installer_generator -s ./dist -o ./out -n Demo -f msi -f exe --all-files --shortcut

Exit code 0 = every requested installer was built or skipped with a warning."
)]
pub struct Args {
    /// Directory containing the files to package
    #[arg(short = 's', long, value_name = "DIR")]
    pub source_dir: PathBuf,

    /// Directory receiving the build script and the installer
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Installer name
    #[arg(short = 'n', long, value_name = "NAME", default_value = "")]
    pub name: String,

    /// Installer format to build: exe, msi (repeatable)
    #[arg(
        short = 'f',
        long = "format",
        value_name = "FORMAT",
        required = true,
        value_parser = parse_format
    )]
    pub formats: Vec<InstallerFormat>,

    /// File (relative to the source directory) to include (repeatable)
    #[arg(long = "file", value_name = "FILE", conflicts_with = "all_files")]
    pub files: Vec<String>,

    /// Include every entry in the source directory
    #[arg(long)]
    pub all_files: bool,

    /// Create a desktop shortcut to <output-dir>/<name>.exe
    #[arg(long)]
    pub shortcut: bool,

    /// Directory the shortcut is created in (defaults to the user's desktop)
    #[arg(long, value_name = "DIR", requires = "shortcut")]
    pub desktop_dir: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Per-invocation compiler timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Path to ISCC.exe
    #[arg(long, value_name = "PATH", env = "INSTALLER_GENERATOR_ISCC")]
    pub iscc: Option<PathBuf>,

    /// Path to candle.exe
    #[arg(long, value_name = "PATH", env = "INSTALLER_GENERATOR_CANDLE")]
    pub candle: Option<PathBuf>,

    /// Path to light.exe
    #[arg(long, value_name = "PATH", env = "INSTALLER_GENERATOR_LIGHT")]
    pub light: Option<PathBuf>,

    /// Rotating text log path
    #[arg(long, value_name = "PATH", env = "INSTALLER_GENERATOR_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// JSON-lines log store path
    #[arg(long, value_name = "PATH", env = "INSTALLER_GENERATOR_LOG_STORE")]
    pub log_store: Option<PathBuf>,

    /// Show detailed progress
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_format(value: &str) -> Result<InstallerFormat, String> {
    value.parse().map_err(|e: crate::bundler::Error| e.to_string())
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.source_dir.as_os_str().is_empty() {
            return Err("Source directory cannot be empty".to_string());
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err("Output directory cannot be empty".to_string());
        }
        if self.all_files && !self.source_dir.is_dir() {
            return Err(format!(
                "Source directory does not exist: {}",
                self.source_dir.display()
            ));
        }
        if self.timeout_secs == Some(0) {
            return Err("Timeout must be greater than zero".to_string());
        }

        Ok(())
    }

    /// Requested formats, MSI first, without duplicates.
    pub fn ordered_formats(&self) -> Vec<InstallerFormat> {
        let mut formats = self.formats.clone();
        formats.sort();
        formats.dedup();
        formats
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.verbose, args.quiet),
        }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }
}
