//! External compiler discovery.
//!
//! The configured compiler paths are fixed install locations. When one does
//! not exist on this machine, the tool is looked up on `PATH` instead.

use std::path::{Path, PathBuf};

/// Resolves the executable to run for a compiler.
///
/// Returns `configured` if it exists, otherwise the first `fallback` found
/// on `PATH`, otherwise `configured` unchanged so that the spawn error names
/// the path the user configured.
pub fn resolve_compiler(configured: &Path, fallback: &str) -> PathBuf {
    if configured.is_file() {
        return configured.to_path_buf();
    }

    match which::which(fallback) {
        Ok(path) => {
            log::debug!(
                "{} not found, using {} from PATH",
                configured.display(),
                path.display()
            );
            path
        }
        Err(e) => {
            log::warn!(
                "{} not found and {} is not on PATH ({}). Install it or set its path in the configuration.",
                configured.display(),
                fallback,
                e
            );
            configured.to_path_buf()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_path_is_used_as_is() {
        let dir = tempfile::tempdir().unwrap();
        let tool = dir.path().join("ISCC.exe");
        std::fs::write(&tool, b"").unwrap();
        assert_eq!(resolve_compiler(&tool, "ISCC"), tool);
    }

    #[test]
    fn unresolvable_tool_keeps_configured_path() {
        let configured = Path::new("/nowhere/candle.exe");
        assert_eq!(
            resolve_compiler(configured, "definitely-not-a-wix-tool"),
            configured
        );
    }
}
