//! WiX source generation.
//!
//! Every render draws a fresh upgrade code and a fresh GUID per component,
//! so two renders of the same request never produce identical scripts.
//! That is expected: component GUIDs are regenerated on every build.

use super::{super::utils, template::WXS_TEMPLATE};
use crate::bundler::{
    InstallerRequest, PRODUCT_VERSION,
    error::Result,
    settings::WixSettings,
};
use handlebars::Handlebars;
use serde::Serialize;
use std::path::Path;
use uuid::Uuid;

#[derive(Serialize)]
struct WxsData<'a> {
    product_name: &'a str,
    version: &'static str,
    language: u16,
    manufacturer: &'a str,
    upgrade_code: String,
    components: Vec<ComponentData>,
}

/// One `<Component>` with its single `<File>`, referenced once from the feature.
#[derive(Serialize)]
struct ComponentData {
    id: String,
    guid: String,
    file_id: String,
    source: String,
}

fn new_guid() -> String {
    Uuid::new_v4().to_string().to_uppercase()
}

/// Render the WiX source for a validated request.
pub fn render_wxs_script(request: &InstallerRequest, wix: &WixSettings) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);

    let components = request
        .file_list()
        .iter()
        .zip(request.resolved_files()?)
        .enumerate()
        .map(|(index, (file, source))| {
            let base_name = Path::new(file)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.clone());
            ComponentData {
                id: utils::wix_identifier("cmp", index, &base_name),
                guid: new_guid(),
                file_id: utils::wix_identifier("fil", index, &base_name),
                source: source.display().to_string(),
            }
        })
        .collect();

    let data = WxsData {
        product_name: request.installer_name(),
        version: PRODUCT_VERSION,
        language: wix.language,
        manufacturer: &wix.manufacturer,
        upgrade_code: new_guid(),
        components,
    };

    handlebars.register_template_string("setup_script.wxs", WXS_TEMPLATE)?;
    Ok(handlebars.render("setup_script.wxs", &data)?)
}
