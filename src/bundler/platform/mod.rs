//! Installer format implementations.
//!
//! | Format | Toolchain | Module |
//! |--------|-----------|--------|
//! | .exe | Inno Setup (`ISCC`) | [`windows::inno`] |
//! | .msi | WiX v3 (`candle`, `light`) | [`windows::wix`] |

pub mod windows;
