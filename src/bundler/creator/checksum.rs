//! Artifact checksum calculation.
//!
//! Computes the SHA-256 of a produced installer so it can be reported (and
//! published) alongside the artifact.

use crate::bundler::{
    BundledArtifact, InstallerFormat,
    error::{ErrorExt, Result},
};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

/// Calculates the SHA-256 checksum of a file.
///
/// Reads the file in 8KB chunks to handle large installers efficiently.
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash (64 characters)
/// * `Err` - If the file cannot be read
pub async fn calculate_sha256(file_path: &Path) -> Result<String> {
    let mut file = tokio::fs::File::open(file_path)
        .await
        .fs_context("opening installer for hashing", file_path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; 8192];

    loop {
        let n = file
            .read(&mut buffer)
            .await
            .fs_context("reading installer for hash calculation", file_path)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Describes the installer a compiler was expected to produce.
///
/// The compiler decides whether the file really lands at `path`; if it is
/// missing the artifact is still reported, with no size or checksum.
pub async fn describe_artifact(
    format: InstallerFormat,
    script: PathBuf,
    path: PathBuf,
) -> Result<BundledArtifact> {
    let (size, checksum) = match tokio::fs::metadata(&path).await {
        Ok(metadata) if metadata.is_file() => {
            (Some(metadata.len()), Some(calculate_sha256(&path).await?))
        }
        _ => {
            log::warn!(
                "{} compiler reported success but {} was not found",
                format,
                path.display()
            );
            (None, None)
        }
    };

    Ok(BundledArtifact {
        format,
        script,
        path,
        size,
        checksum,
    })
}
