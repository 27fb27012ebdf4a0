//! Installer formats.

use std::{fmt, str::FromStr};

use super::error::Error;

/// Supported installer formats.
///
/// Selects both the creation strategy and the build script template:
///
/// - [`Exe`](Self::Exe): self-extracting installer compiled by Inno Setup (`ISCC`)
/// - [`Msi`](Self::Msi): Windows Installer package compiled by WiX (`candle` + `light`)
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum InstallerFormat {
    /// Windows Installer package (.msi).
    ///
    /// Built in two stages: translate (`candle`) then link (`light`).
    Msi,

    /// Self-extracting installer executable (.exe).
    Exe,
}

impl InstallerFormat {
    /// Returns every supported format, in the order they are built.
    pub fn all() -> &'static [InstallerFormat] {
        &[InstallerFormat::Msi, InstallerFormat::Exe]
    }

    /// Returns the lowercase identifier used on the command line.
    pub fn short_name(&self) -> &'static str {
        match self {
            InstallerFormat::Msi => "msi",
            InstallerFormat::Exe => "exe",
        }
    }

    /// Returns the extension of the rendered build script.
    pub fn script_extension(&self) -> &'static str {
        match self {
            InstallerFormat::Msi => "wxs",
            InstallerFormat::Exe => "iss",
        }
    }

    /// Returns the file name of the build script written into the output directory.
    pub fn script_file_name(&self) -> String {
        format!("setup_script.{}", self.script_extension())
    }
}

impl fmt::Display for InstallerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallerFormat::Msi => f.write_str("MSI"),
            InstallerFormat::Exe => f.write_str("EXE"),
        }
    }
}

impl FromStr for InstallerFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "msi" => Ok(InstallerFormat::Msi),
            "exe" => Ok(InstallerFormat::Exe),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("EXE".parse::<InstallerFormat>().unwrap(), InstallerFormat::Exe);
        assert_eq!(" msi ".parse::<InstallerFormat>().unwrap(), InstallerFormat::Msi);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = "dmg".parse::<InstallerFormat>().unwrap_err();
        assert!(err.to_string().contains("dmg"));
    }

    #[test]
    fn script_names_follow_format() {
        assert_eq!(InstallerFormat::Exe.script_file_name(), "setup_script.iss");
        assert_eq!(InstallerFormat::Msi.script_file_name(), "setup_script.wxs");
    }

    #[test]
    fn msi_is_built_before_exe() {
        let mut formats = vec![InstallerFormat::Exe, InstallerFormat::Msi];
        formats.sort();
        assert_eq!(formats, InstallerFormat::all());
    }
}
