//! TOML configuration file.
//!
//! Every key is optional; anything left out keeps its built-in default.
//!
//! ```toml
//! timeout_secs = 300
//!
//! [inno]
//! compiler = 'D:\Tools\Inno Setup 6\ISCC.exe'
//!
//! [wix]
//! candle = 'D:\Tools\WiX\bin\candle.exe'
//! light = 'D:\Tools\WiX\bin\light.exe'
//! manufacturer = "Contoso"
//!
//! [logging]
//! file = "logs/installer_creator.log"
//! store = "logs/installer_logs.jsonl"
//! max_bytes = 1048576
//! backups = 3
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::bundler::error::{Context, ErrorExt, Result};

/// Parsed configuration file.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    /// Compiler timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// `[inno]` section.
    pub inno: InnoSection,
    /// `[wix]` section.
    pub wix: WixSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[inno]` section.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InnoSection {
    /// Path to `ISCC.exe`.
    pub compiler: Option<PathBuf>,
}

/// `[wix]` section.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WixSection {
    /// Path to `candle.exe`.
    pub candle: Option<PathBuf>,
    /// Path to `light.exe`.
    pub light: Option<PathBuf>,
    /// Product manufacturer.
    pub manufacturer: Option<String>,
    /// Windows language identifier.
    pub language: Option<u16>,
}

/// `[logging]` section.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSection {
    /// Rotating text log path.
    pub file: Option<PathBuf>,
    /// Append-only JSON-lines log store path.
    pub store: Option<PathBuf>,
    /// Size at which the text log is rotated.
    pub max_bytes: Option<u64>,
    /// Number of rotated text logs kept.
    pub backups: Option<usize>,
}

impl SettingsFile {
    /// Reads and parses a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).fs_context("reading configuration file", path)?;
        let display = path.display().to_string();
        Self::parse(&contents).with_context(|| format!("parsing {display}"))
    }

    /// Parses configuration from a TOML string.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}
