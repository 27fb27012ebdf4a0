//! Helpers shared by the Inno Setup and WiX generators.

use crate::bundler::error::{ErrorExt, Result};
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Maximum length of a WiX identifier.
const MAX_WIX_ID_LEN: usize = 72;

/// Write file with UTF-8 BOM.
///
/// Inno Setup 6 reads a script as UTF-8 only when it starts with a BOM;
/// without one it falls back to the ANSI code page.
pub async fn write_utf8_bom(path: &Path, content: &str) -> Result<()> {
    let mut file = tokio::fs::File::create(path)
        .await
        .fs_context("creating build script", path)?;

    file.write_all(&[0xEF, 0xBB, 0xBF])
        .await
        .fs_context("writing UTF-8 BOM", path)?;
    file.write_all(content.as_bytes())
        .await
        .fs_context("writing build script", path)?;
    file.flush().await.fs_context("flushing build script", path)?;

    Ok(())
}

/// Write a build script as plain UTF-8.
pub async fn write_script(path: &Path, content: &str) -> Result<()> {
    tokio::fs::write(path, content)
        .await
        .fs_context("writing build script", path)
}

/// Quote a value for an Inno Setup string parameter.
///
/// Embedded double quotes are doubled, as Inno Setup expects.
pub fn quote_iss(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Escape literal text for an Inno Setup value that expands constants.
///
/// `{` starts a constant such as `{app}`; a literal brace is written `{{`.
pub fn escape_iss_constants(value: &str) -> String {
    value.replace('{', "{{")
}

/// Build a valid WiX identifier from a prefix, an index, and a file name.
///
/// WiX identifiers may contain ASCII letters, digits, `_` and `.`, must start
/// with a letter or underscore, and are at most 72 characters. The index keeps
/// identifiers unique when two selected files share a base name.
pub fn wix_identifier(prefix: &str, index: usize, file_name: &str) -> String {
    let sanitized: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let mut id = format!("{prefix}{index}_{sanitized}");
    id.truncate(MAX_WIX_ID_LEN);
    id
}
