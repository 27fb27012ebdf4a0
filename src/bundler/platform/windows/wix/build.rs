//! candle/light execution.

use crate::bundler::{
    compiler::{CompileInvocation, CompilerHandle},
    creator::tool_detection,
    error::Result,
    settings::Settings,
};
use std::path::Path;

/// Translate stage: compile `.wxs` source into a `.wixobj` object file.
pub async fn run_candle(
    handle: &CompilerHandle,
    settings: &Settings,
    wxs_path: &Path,
    wixobj_path: &Path,
) -> Result<()> {
    let candle = tool_detection::resolve_compiler(&settings.wix().candle_path, "candle");
    let invocation = CompileInvocation::new(candle)
        .arg(wxs_path)
        .arg("-o")
        .arg(wixobj_path);

    handle
        .compile(&invocation, settings.compile_timeout())
        .await?;
    Ok(())
}

/// Link stage: bind a `.wixobj` object file into the final `.msi`.
pub async fn run_light(
    handle: &CompilerHandle,
    settings: &Settings,
    wixobj_path: &Path,
    msi_path: &Path,
) -> Result<()> {
    let light = tool_detection::resolve_compiler(&settings.wix().light_path, "light");
    let invocation = CompileInvocation::new(light)
        .arg(wixobj_path)
        .arg("-o")
        .arg(msi_path);

    handle
        .compile(&invocation, settings.compile_timeout())
        .await?;
    Ok(())
}
