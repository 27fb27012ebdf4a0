//! Lifecycle logging around any installer creator.

use super::InstallerCreator;
use crate::bundler::{CreationOutcome, InstallerFormat, InstallerRequest, error::Result};

/// Wraps a creator with start, success, and error log events.
///
/// The wrapped creator's outcome passes through untouched: a normal return
/// (including a soft failure) stays a normal return, and an error is logged
/// and then returned as the same value.
#[derive(Clone, Debug)]
pub struct LoggingCreator<C> {
    inner: C,
}

impl<C: InstallerCreator> LoggingCreator<C> {
    /// Wraps `inner`.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// The wrapped creator.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Unwraps the inner creator.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C> InstallerCreator for LoggingCreator<C>
where
    C: InstallerCreator + Sync,
{
    fn format(&self) -> InstallerFormat {
        self.inner.format()
    }

    async fn create_installer(&self, request: InstallerRequest) -> Result<CreationOutcome> {
        let format = self.inner.format();
        log::info!("Starting to create {} installer.", format);

        match self.inner.create_installer(request).await {
            Ok(outcome) => {
                log::info!("{} installer created successfully.", format);
                Ok(outcome)
            }
            Err(e) => {
                log::error!("Error occurred while creating {} installer - {}", format, e);
                Err(e)
            }
        }
    }
}
