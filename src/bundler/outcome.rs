//! Results of an installer creation attempt.

use std::{fmt, path::PathBuf};

use super::{InstallerFormat, WIXOBJ_FILE_NAME};

/// A reported, non-exceptional reason an installer was not built.
///
/// Soft failures halt the creation without raising; callers inspect
/// [`CreationOutcome`] to tell them apart from a built installer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SoftFailure {
    /// No files were selected.
    EmptyFileList,
    /// The installer name was empty or whitespace.
    BlankInstallerName {
        /// Format the name was requested for
        format: InstallerFormat,
    },
    /// The WiX translate stage finished without producing its object file.
    MissingIntermediate {
        /// Where the object file was expected
        path: PathBuf,
    },
}

impl fmt::Display for SoftFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoftFailure::EmptyFileList => f.write_str(
                "No files selected. Please select files to include in the installer.",
            ),
            SoftFailure::BlankInstallerName { format } => {
                write!(f, "Please enter a name for the {format} file.")
            }
            SoftFailure::MissingIntermediate { path } => write!(
                f,
                "{WIXOBJ_FILE_NAME} file not created at {}. Compilation may have failed.",
                path.display()
            ),
        }
    }
}

/// An installer produced by a successful creation.
#[derive(Debug, Clone)]
pub struct BundledArtifact {
    /// Format of the installer.
    pub format: InstallerFormat,

    /// Build script the installer was compiled from (left on disk).
    pub script: PathBuf,

    /// Expected location of the installer.
    pub path: PathBuf,

    /// Size in bytes, `None` if the compiler did not leave a file at `path`.
    pub size: Option<u64>,

    /// SHA-256 of the installer, `None` if the file is missing.
    pub checksum: Option<String>,
}

impl BundledArtifact {
    /// Whether the installer exists where it was expected.
    pub fn exists(&self) -> bool {
        self.size.is_some()
    }
}

/// What `create_installer` returned normally.
#[derive(Debug, Clone)]
pub enum CreationOutcome {
    /// The compiler(s) ran successfully.
    Created(BundledArtifact),
    /// Creation stopped early with a reported message.
    Skipped(SoftFailure),
}

impl CreationOutcome {
    /// The artifact, if one was created.
    pub fn artifact(&self) -> Option<&BundledArtifact> {
        match self {
            CreationOutcome::Created(artifact) => Some(artifact),
            CreationOutcome::Skipped(_) => None,
        }
    }

    /// The soft failure, if creation was skipped.
    pub fn soft_failure(&self) -> Option<&SoftFailure> {
        match self {
            CreationOutcome::Created(_) => None,
            CreationOutcome::Skipped(failure) => Some(failure),
        }
    }
}
