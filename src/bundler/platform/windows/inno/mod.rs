//! EXE installer creation with Inno Setup.
//!
//! # Module Organization
//!
//! - `template` - ISS script template
//! - `script` - ISS script rendering
//! - `build` - ISCC execution

mod build;
mod script;
mod template;

pub use script::{output_base_filename, render_iss_script};

use super::utils;
use crate::bundler::{
    CreationOutcome, InstallerCreator, InstallerFormat, InstallerRequest,
    compiler::registry,
    creator::checksum,
    error::{ErrorExt, Result},
    settings::Settings,
};

/// Creates self-extracting `.exe` installers.
///
/// # Process
///
/// 1. Validate the request (soft failure on empty file list or blank name)
/// 2. Render `setup_script.iss` into the output directory
/// 3. Compile it with `ISCC.exe` through the shared EXE compiler handle
/// 4. Report `<installer_name>_installer.exe`
#[derive(Clone, Debug)]
pub struct ExeCreator {
    settings: Settings,
}

impl ExeCreator {
    /// Creates an EXE creator using the given toolchain settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl InstallerCreator for ExeCreator {
    fn format(&self) -> InstallerFormat {
        InstallerFormat::Exe
    }

    async fn create_installer(&self, request: InstallerRequest) -> Result<CreationOutcome> {
        if let Some(failure) = request.validate(InstallerFormat::Exe) {
            log::warn!("{}", failure);
            return Ok(CreationOutcome::Skipped(failure));
        }

        let output_dir = request.output_directory();
        tokio::fs::create_dir_all(output_dir)
            .await
            .fs_context("creating installer output directory", output_dir)?;

        let script = render_iss_script(&request)?;
        let iss_path = request.script_path(InstallerFormat::Exe);
        utils::write_utf8_bom(&iss_path, &script).await?;
        log::debug!("Wrote Inno Setup script to {}", iss_path.display());

        let handle = registry().get_handle(InstallerFormat::Exe);
        build::run_iscc(&handle, &self.settings, &iss_path).await?;

        let installer_path =
            output_dir.join(format!("{}.exe", output_base_filename(request.installer_name())));
        let artifact =
            checksum::describe_artifact(InstallerFormat::Exe, iss_path, installer_path).await?;

        log::info!(
            "✓ EXE installer created in the output directory: {}",
            artifact.path.display()
        );
        Ok(CreationOutcome::Created(artifact))
    }
}
