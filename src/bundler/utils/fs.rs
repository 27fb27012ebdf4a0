//! File system utilities for installer generation.

use crate::bundler::error::{ErrorExt, Result};
use std::path::Path;
use walkdir::WalkDir;

/// Lists the entries directly inside `dir`, sorted by name.
///
/// This is the file list offered for selection: both files and
/// subdirectories are returned as names relative to `dir`.
pub fn list_directory(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "not a directory",
        ))
        .fs_context("listing source directory", dir);
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();

    Ok(names)
}
