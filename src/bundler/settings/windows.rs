//! Windows installer toolchain settings.

use std::path::PathBuf;

/// Default Inno Setup compiler location.
pub const DEFAULT_ISCC_PATH: &str = r"C:\Program Files (x86)\Inno Setup 6\ISCC.exe";

/// Default WiX translate-stage compiler location.
pub const DEFAULT_CANDLE_PATH: &str = r"C:\Program Files (x86)\WiX Toolset v3.14\bin\candle.exe";

/// Default WiX link-stage compiler location.
pub const DEFAULT_LIGHT_PATH: &str = r"C:\Program Files (x86)\WiX Toolset v3.14\bin\light.exe";

/// Inno Setup (EXE installer) configuration.
///
/// # Configuration
///
/// ```toml
/// [inno]
/// compiler = 'C:\Program Files (x86)\Inno Setup 6\ISCC.exe'
/// ```
#[derive(Clone, Debug)]
pub struct InnoSettings {
    /// Path to `ISCC.exe`.
    ///
    /// Default: [`DEFAULT_ISCC_PATH`]
    pub compiler_path: PathBuf,
}

impl Default for InnoSettings {
    fn default() -> Self {
        Self {
            compiler_path: PathBuf::from(DEFAULT_ISCC_PATH),
        }
    }
}

/// WiX Toolset v3 (MSI installer) configuration.
///
/// # Configuration
///
/// ```toml
/// [wix]
/// candle = 'C:\Program Files (x86)\WiX Toolset v3.14\bin\candle.exe'
/// light = 'C:\Program Files (x86)\WiX Toolset v3.14\bin\light.exe'
/// manufacturer = "MyCompany"
/// language = 1033
/// ```
#[derive(Clone, Debug)]
pub struct WixSettings {
    /// Path to `candle.exe` (translate stage).
    pub candle_path: PathBuf,

    /// Path to `light.exe` (link stage).
    pub light_path: PathBuf,

    /// `Manufacturer` attribute of the product.
    ///
    /// Default: "MyCompany"
    pub manufacturer: String,

    /// Windows language identifier of the package.
    ///
    /// Default: 1033 (en-US)
    pub language: u16,
}

impl Default for WixSettings {
    fn default() -> Self {
        Self {
            candle_path: PathBuf::from(DEFAULT_CANDLE_PATH),
            light_path: PathBuf::from(DEFAULT_LIGHT_PATH),
            manufacturer: "MyCompany".to_string(),
            language: 1033,
        }
    }
}
