//! Builder for constructing Settings.

use super::{InnoSettings, Settings, SettingsFile, WixSettings, core::DEFAULT_COMPILE_TIMEOUT};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

/// Builder for constructing [`Settings`].
///
/// Starts from the built-in defaults (the standard Inno Setup 6 and WiX 3.14
/// install locations, a 10 minute timeout). A configuration file can be
/// layered on with [`apply_file`](Self::apply_file); later setter calls win.
///
/// # Examples
///
/// ```no_run
/// use installer_generator::bundler::SettingsBuilder;
/// use std::time::Duration;
///
/// # fn example() -> installer_generator::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .inno_compiler(r"D:\Inno Setup 6\ISCC.exe")
///     .compile_timeout(Duration::from_secs(120))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    inno: InnoSettings,
    wix: WixSettings,
    compile_timeout: Option<Duration>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Applies every value present in a configuration file.
    pub fn apply_file(mut self, file: &SettingsFile) -> Self {
        if let Some(path) = &file.inno.compiler {
            self.inno.compiler_path = path.clone();
        }
        if let Some(path) = &file.wix.candle {
            self.wix.candle_path = path.clone();
        }
        if let Some(path) = &file.wix.light {
            self.wix.light_path = path.clone();
        }
        if let Some(manufacturer) = &file.wix.manufacturer {
            self.wix.manufacturer = manufacturer.clone();
        }
        if let Some(language) = file.wix.language {
            self.wix.language = language;
        }
        if let Some(secs) = file.timeout_secs {
            self.compile_timeout = Some(Duration::from_secs(secs));
        }
        self
    }

    /// Sets the path to `ISCC.exe`.
    pub fn inno_compiler<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.inno.compiler_path = path.as_ref().to_path_buf();
        self
    }

    /// Sets the path to `candle.exe`.
    pub fn candle<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.wix.candle_path = path.as_ref().to_path_buf();
        self
    }

    /// Sets the path to `light.exe`.
    pub fn light<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.wix.light_path = path.as_ref().to_path_buf();
        self
    }

    /// Sets the MSI manufacturer.
    pub fn manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.wix.manufacturer = manufacturer.into();
        self
    }

    /// Sets the per-invocation compiler timeout.
    pub fn compile_timeout(mut self, timeout: Duration) -> Self {
        self.compile_timeout = Some(timeout);
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is zero or a compiler path is empty.
    pub fn build(self) -> crate::bundler::Result<Settings> {
        let compile_timeout = self.compile_timeout.unwrap_or(DEFAULT_COMPILE_TIMEOUT);
        if compile_timeout.is_zero() {
            crate::bail!("compile timeout must be greater than zero");
        }

        for (name, path) in [
            ("ISCC", &self.inno.compiler_path),
            ("candle", &self.wix.candle_path),
            ("light", &self.wix.light_path),
        ] {
            if path == &PathBuf::new() {
                crate::bail!("{} path must not be empty", name);
            }
        }

        Ok(Settings::new(self.inno, self.wix, compile_timeout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::settings::DEFAULT_ISCC_PATH;

    #[test]
    fn defaults_point_at_standard_install_locations() {
        let settings = SettingsBuilder::new().build().unwrap();
        assert_eq!(
            settings.inno().compiler_path,
            PathBuf::from(DEFAULT_ISCC_PATH)
        );
        assert!(settings.wix().candle_path.ends_with("candle.exe"));
        assert_eq!(settings.compile_timeout(), DEFAULT_COMPILE_TIMEOUT);
    }

    #[test]
    fn setters_override_file_values() {
        let file = SettingsFile::parse("timeout_secs = 30\n[inno]\ncompiler = '/a/ISCC'\n").unwrap();
        let settings = SettingsBuilder::new()
            .apply_file(&file)
            .inno_compiler("/b/ISCC")
            .build()
            .unwrap();
        assert_eq!(settings.inno().compiler_path, PathBuf::from("/b/ISCC"));
        assert_eq!(settings.compile_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(SettingsBuilder::new()
            .compile_timeout(Duration::ZERO)
            .build()
            .is_err());
    }
}
