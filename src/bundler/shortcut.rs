//! Desktop shortcut creation.
//!
//! Creates a shortcut on the user's desktop pointing at
//! `<output_directory>/<installer_name>.exe`. Windows gets an Internet
//! Shortcut (`.url`) file; other platforms get a freedesktop.org
//! `.desktop` entry.

use crate::bundler::error::{Context, ErrorExt, Result};
use std::path::{Path, PathBuf};

/// Shortcut file flavor.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ShortcutKind {
    /// Windows Internet Shortcut (`.url`).
    InternetShortcut,
    /// freedesktop.org desktop entry (`.desktop`).
    DesktopEntry,
}

impl ShortcutKind {
    /// The kind native to the current platform.
    pub fn native() -> Self {
        if cfg!(windows) {
            ShortcutKind::InternetShortcut
        } else {
            ShortcutKind::DesktopEntry
        }
    }

    fn extension(&self) -> &'static str {
        match self {
            ShortcutKind::InternetShortcut => "url",
            ShortcutKind::DesktopEntry => "desktop",
        }
    }
}

/// Renders a shortcut file, returning its file name and contents.
pub fn render_shortcut(
    kind: ShortcutKind,
    installer_name: &str,
    output_directory: &Path,
) -> (String, String) {
    let target = output_directory.join(format!("{installer_name}.exe"));
    let file_name = format!("{installer_name}.{}", kind.extension());

    let contents = match kind {
        ShortcutKind::InternetShortcut => {
            let url_path = target.display().to_string().replace('\\', "/");
            format!(
                "[InternetShortcut]\r\n\
                 URL=file:///{}\r\n\
                 WorkingDirectory={}\r\n\
                 IconFile={}\r\n\
                 IconIndex=0\r\n\
                 ; Shortcut to {}\r\n",
                url_path.trim_start_matches('/'),
                output_directory.display(),
                target.display(),
                installer_name
            )
        }
        ShortcutKind::DesktopEntry => format!(
            "[Desktop Entry]\n\
             Type=Application\n\
             Name={}\n\
             Comment=Shortcut to {}\n\
             Exec=\"{}\"\n\
             Path={}\n\
             Terminal=false\n",
            installer_name,
            installer_name,
            target.display(),
            output_directory.display()
        ),
    };

    (file_name, contents)
}

/// Creates a desktop shortcut to `<output_directory>/<installer_name>.exe`.
///
/// `desktop_dir` overrides the detected desktop directory.
///
/// # Returns
///
/// Path of the created shortcut file.
pub async fn create_desktop_shortcut(
    installer_name: &str,
    output_directory: &Path,
    desktop_dir: Option<&Path>,
) -> Result<PathBuf> {
    let desktop = match desktop_dir {
        Some(dir) => dir.to_path_buf(),
        None => dirs::desktop_dir().context("could not determine the desktop directory")?,
    };

    tokio::fs::create_dir_all(&desktop)
        .await
        .fs_context("creating desktop directory", &desktop)?;

    let (file_name, contents) =
        render_shortcut(ShortcutKind::native(), installer_name, output_directory);
    let shortcut_path = desktop.join(file_name);

    tokio::fs::write(&shortcut_path, contents)
        .await
        .fs_context("writing desktop shortcut", &shortcut_path)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tokio::fs::set_permissions(&shortcut_path, std::fs::Permissions::from_mode(0o755))
            .await
            .fs_context("marking desktop shortcut executable", &shortcut_path)?;
    }

    log::info!("Created desktop shortcut {}", shortcut_path.display());
    Ok(shortcut_path)
}
