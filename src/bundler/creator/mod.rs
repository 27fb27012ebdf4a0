//! Installer creation contract and format selection.
//!
//! Every format implements [`InstallerCreator`]. [`Creator`] picks the
//! implementation for an [`InstallerFormat`], and [`LoggingCreator`] wraps any
//! creator with start/success/error logging.
//!
//! # Example
//!
//! ```no_run
//! use installer_generator::bundler::{
//!     Creator, CreationOutcome, InstallerCreator, InstallerFormat, InstallerRequest,
//!     LoggingCreator, Settings,
//! };
//!
//! # async fn example() -> installer_generator::bundler::Result<()> {
//! let request = InstallerRequest::new(
//!     r"C:\src",
//!     r"C:\out",
//!     vec!["a.txt".into(), "b.txt".into()],
//!     "Demo",
//! );
//!
//! let creator = LoggingCreator::new(Creator::for_format(InstallerFormat::Exe, Settings::default()));
//! match creator.create_installer(request).await? {
//!     CreationOutcome::Created(artifact) => println!("Created {}", artifact.path.display()),
//!     CreationOutcome::Skipped(reason) => println!("{reason}"),
//! }
//! # Ok(())
//! # }
//! ```

pub(crate) mod checksum;
mod logging;
pub(crate) mod tool_detection;

pub use logging::LoggingCreator;

use std::future::Future;

use crate::bundler::{
    CreationOutcome, InstallerFormat, InstallerRequest,
    error::Result,
    platform::windows::{inno::ExeCreator, wix::MsiCreator},
    settings::Settings,
};

/// The installer-creation capability shared by every format.
///
/// Implementations return:
/// - `Ok(CreationOutcome::Created(..))` when the compiler(s) succeeded
/// - `Ok(CreationOutcome::Skipped(..))` for soft failures (nothing compiled,
///   or the MSI link stage was not attempted)
/// - `Err(..)` for hard failures: the compiler could not be spawned, exited
///   non-zero, timed out, or an I/O error occurred
pub trait InstallerCreator {
    /// Format this creator produces.
    fn format(&self) -> InstallerFormat;

    /// Builds an installer from `request`.
    fn create_installer(
        &self,
        request: InstallerRequest,
    ) -> impl Future<Output = Result<CreationOutcome>> + Send;
}

/// One creator per installer format.
#[derive(Clone, Debug)]
pub enum Creator {
    /// Inno Setup `.exe` creator.
    Exe(ExeCreator),
    /// WiX `.msi` creator.
    Msi(MsiCreator),
}

impl Creator {
    /// Selects the creator for `format`.
    pub fn for_format(format: InstallerFormat, settings: Settings) -> Self {
        match format {
            InstallerFormat::Exe => Creator::Exe(ExeCreator::new(settings)),
            InstallerFormat::Msi => Creator::Msi(MsiCreator::new(settings)),
        }
    }
}

impl InstallerCreator for Creator {
    fn format(&self) -> InstallerFormat {
        match self {
            Creator::Exe(creator) => creator.format(),
            Creator::Msi(creator) => creator.format(),
        }
    }

    async fn create_installer(&self, request: InstallerRequest) -> Result<CreationOutcome> {
        match self {
            Creator::Exe(creator) => creator.create_installer(request).await,
            Creator::Msi(creator) => creator.create_installer(request).await,
        }
    }
}
