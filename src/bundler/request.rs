//! User choices for a single installer creation attempt.

use std::path::{Path, PathBuf};

use path_absolutize::Absolutize;

use super::{
    InstallerFormat, SoftFailure,
    error::{ErrorExt, Result},
};

/// Everything a creator needs to build one installer.
///
/// Built fresh for every creation attempt and consumed by the creator that
/// handles it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstallerRequest {
    source_directory: PathBuf,
    output_directory: PathBuf,
    file_list: Vec<String>,
    installer_name: String,
}

impl InstallerRequest {
    /// Creates a request from the user's selections.
    ///
    /// `file_list` entries are relative to `source_directory`, in install order.
    pub fn new(
        source_directory: impl Into<PathBuf>,
        output_directory: impl Into<PathBuf>,
        file_list: Vec<String>,
        installer_name: impl Into<String>,
    ) -> Self {
        Self {
            source_directory: source_directory.into(),
            output_directory: output_directory.into(),
            file_list,
            installer_name: installer_name.into(),
        }
    }

    /// Directory the selected files live in.
    pub fn source_directory(&self) -> &Path {
        &self.source_directory
    }

    /// Directory the build script, intermediates, and installer are written to.
    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    /// Selected files, relative to the source directory.
    pub fn file_list(&self) -> &[String] {
        &self.file_list
    }

    /// Product name; also the base name of the produced installer.
    pub fn installer_name(&self) -> &str {
        &self.installer_name
    }

    /// Checks the request before any script is rendered.
    ///
    /// Returns the soft failure to report, or `None` when the request can be built.
    pub fn validate(&self, format: InstallerFormat) -> Option<SoftFailure> {
        if self.file_list.is_empty() {
            return Some(SoftFailure::EmptyFileList);
        }
        if self.installer_name.trim().is_empty() {
            return Some(SoftFailure::BlankInstallerName { format });
        }
        None
    }

    /// Absolute source paths for each entry of the file list, in order.
    ///
    /// Relative directories resolve against the current working directory.
    pub fn resolved_files(&self) -> Result<Vec<PathBuf>> {
        let source = absolute(&self.source_directory)?;
        Ok(self.file_list.iter().map(|file| source.join(file)).collect())
    }

    /// Absolute form of the output directory.
    pub fn absolute_output_directory(&self) -> Result<PathBuf> {
        absolute(&self.output_directory)
    }

    /// Path the build script for `format` is written to.
    pub fn script_path(&self, format: InstallerFormat) -> PathBuf {
        self.output_directory.join(format.script_file_name())
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    Ok(path
        .absolutize()
        .fs_context("resolving absolute path", path)?
        .into_owned())
}
