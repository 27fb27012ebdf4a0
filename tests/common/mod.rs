//! Test helpers: stand-in compilers written as shell scripts.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::time::Duration;

use installer_generator::bundler::{InstallerRequest, Settings, SettingsBuilder};

/// Writes an executable script named `name` into `dir`.
///
/// Every run appends its arguments (space separated) to `<dir>/<name>.calls`
/// before executing `body`.
pub fn fake_compiler(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    let calls = calls_path(dir, name);
    let script = format!(
        "#!/bin/sh\nprintf '%s\\n' \"$*\" >> '{}'\n{}\n",
        calls.display(),
        body
    );
    std::fs::write(&path, script).unwrap();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    path
}

fn calls_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.calls"))
}

/// Argument lines recorded by a fake compiler, one per invocation.
pub fn calls(dir: &Path, name: &str) -> Vec<String> {
    match std::fs::read_to_string(calls_path(dir, name)) {
        Ok(contents) => contents.lines().map(String::from).collect(),
        Err(_) => Vec::new(),
    }
}

/// ISCC stand-in that produces `<script dir>/<name>_installer.exe`.
pub fn iscc_producing(dir: &Path, installer_name: &str) -> PathBuf {
    fake_compiler(
        dir,
        "ISCC",
        &format!("echo installer > \"$(dirname \"$1\")/{installer_name}_installer.exe\""),
    )
}

/// candle/light stand-in that writes the file named after `-o`.
pub fn wix_tool_producing_output(dir: &Path, name: &str) -> PathBuf {
    fake_compiler(dir, name, "echo object > \"$3\"")
}

/// Settings pointing every compiler at the given paths.
pub fn settings(iscc: &Path, candle: &Path, light: &Path, timeout: Duration) -> Settings {
    SettingsBuilder::new()
        .inno_compiler(iscc)
        .candle(candle)
        .light(light)
        .compile_timeout(timeout)
        .build()
        .unwrap()
}

/// A source directory with `a.txt` and `b.txt`.
pub fn source_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "alpha").unwrap();
    std::fs::write(dir.path().join("b.txt"), "beta").unwrap();
    dir
}

/// Request for `a.txt` and `b.txt` named `Demo`.
pub fn demo_request(source: &Path, output: &Path) -> InstallerRequest {
    InstallerRequest::new(
        source,
        output,
        vec!["a.txt".into(), "b.txt".into()],
        "Demo",
    )
}
