//! Core settings type.

use std::time::Duration;

use super::{InnoSettings, WixSettings};

/// Default time an external compiler may run before it is killed.
pub const DEFAULT_COMPILE_TIMEOUT: Duration = Duration::from_secs(600);

/// Toolchain configuration shared by the installer creators.
///
/// Build with [`SettingsBuilder`](super::SettingsBuilder).
#[derive(Clone, Debug)]
pub struct Settings {
    inno: InnoSettings,
    wix: WixSettings,
    compile_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            inno: InnoSettings::default(),
            wix: WixSettings::default(),
            compile_timeout: DEFAULT_COMPILE_TIMEOUT,
        }
    }
}

impl Settings {
    pub(super) fn new(inno: InnoSettings, wix: WixSettings, compile_timeout: Duration) -> Self {
        Self {
            inno,
            wix,
            compile_timeout,
        }
    }

    /// Inno Setup settings.
    pub fn inno(&self) -> &InnoSettings {
        &self.inno
    }

    /// WiX settings.
    pub fn wix(&self) -> &WixSettings {
        &self.wix
    }

    /// Per-invocation compiler timeout.
    pub fn compile_timeout(&self) -> Duration {
        self.compile_timeout
    }
}
