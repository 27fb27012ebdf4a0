//! ISCC execution.

use crate::bundler::{
    compiler::{CompileInvocation, CompilerHandle},
    creator::tool_detection,
    error::Result,
    settings::Settings,
};
use std::path::Path;

/// Compile an `.iss` script with the Inno Setup command-line compiler.
///
/// `ISCC.exe` takes the script path as its only argument; the output
/// directory and installer name come from the script itself.
pub async fn run_iscc(handle: &CompilerHandle, settings: &Settings, iss_path: &Path) -> Result<()> {
    let iscc = tool_detection::resolve_compiler(&settings.inno().compiler_path, "ISCC");
    let invocation = CompileInvocation::new(iscc).arg(iss_path);

    handle
        .compile(&invocation, settings.compile_timeout())
        .await?;

    Ok(())
}
