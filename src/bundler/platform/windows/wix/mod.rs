//! MSI installer creation with the WiX Toolset.
//!
//! WiX builds in two strictly sequential stages: `candle` translates the
//! `.wxs` source into `installer.wixobj`, then `light` links that object
//! into `<installer_name>.msi`. The link stage only runs once the object
//! file is confirmed on disk.
//!
//! # Module Organization
//!
//! - `template` - WXS source template
//! - `script` - WXS rendering (fresh GUIDs per render)
//! - `build` - candle and light execution

mod build;
mod script;
mod template;

pub use script::render_wxs_script;

use super::utils;
use crate::bundler::{
    CreationOutcome, InstallerCreator, InstallerFormat, InstallerRequest, SoftFailure,
    compiler::registry,
    creator::checksum,
    error::{ErrorExt, Result},
    settings::Settings,
};

/// File name of the translate-stage object file.
pub const WIXOBJ_FILE_NAME: &str = "installer.wixobj";

/// Creates `.msi` packages.
#[derive(Clone, Debug)]
pub struct MsiCreator {
    settings: Settings,
}

impl MsiCreator {
    /// Creates an MSI creator using the given toolchain settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl InstallerCreator for MsiCreator {
    fn format(&self) -> InstallerFormat {
        InstallerFormat::Msi
    }

    async fn create_installer(&self, request: InstallerRequest) -> Result<CreationOutcome> {
        if let Some(failure) = request.validate(InstallerFormat::Msi) {
            log::warn!("{}", failure);
            return Ok(CreationOutcome::Skipped(failure));
        }

        let output_dir = request.output_directory();
        tokio::fs::create_dir_all(output_dir)
            .await
            .fs_context("creating installer output directory", output_dir)?;

        let script = render_wxs_script(&request, self.settings.wix())?;
        let wxs_path = request.script_path(InstallerFormat::Msi);
        utils::write_script(&wxs_path, &script).await?;
        log::debug!("Wrote WiX source to {}", wxs_path.display());

        // The presence check below must only see this run's object file.
        let wixobj_path = output_dir.join(WIXOBJ_FILE_NAME);
        match tokio::fs::remove_file(&wixobj_path).await {
            Ok(()) => log::debug!("Removed stale {}", wixobj_path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e).fs_context("removing stale object file", &wixobj_path),
        }

        let handle = registry().get_handle(InstallerFormat::Msi);
        build::run_candle(&handle, &self.settings, &wxs_path, &wixobj_path).await?;

        if !tokio::fs::try_exists(&wixobj_path)
            .await
            .fs_context("checking for object file", &wixobj_path)?
        {
            let failure = SoftFailure::MissingIntermediate { path: wixobj_path };
            log::warn!("{}", failure);
            return Ok(CreationOutcome::Skipped(failure));
        }

        let msi_path = output_dir.join(format!("{}.msi", request.installer_name()));
        build::run_light(&handle, &self.settings, &wixobj_path, &msi_path).await?;

        let artifact = checksum::describe_artifact(InstallerFormat::Msi, wxs_path, msi_path).await?;

        log::info!(
            "✓ MSI installer created in the output directory: {}",
            artifact.path.display()
        );
        Ok(CreationOutcome::Created(artifact))
    }
}
