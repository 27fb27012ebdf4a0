//! Inno Setup script template.

/// Handlebars template for `setup_script.iss`.
///
/// Values are inserted unescaped; `files` entries arrive already quoted.
pub const ISS_TEMPLATE: &str = r#"[Setup]
AppName={{product_name}}
AppVersion={{version}}
DefaultDirName={{install_dir}}
PrivilegesRequired=admin
OutputDir={{output_dir}}
OutputBaseFilename={{output_base_filename}}
Compression=lzma
SolidCompression=yes

[Files]
{{#each files}}
Source: {{this}}; DestDir: "{app}"
{{/each}}
"#;
