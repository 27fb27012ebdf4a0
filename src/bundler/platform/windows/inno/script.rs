//! Inno Setup script generation.
//!
//! Renders the `.iss` script that `ISCC.exe` compiles into a
//! self-extracting installer.

use super::{super::utils, template::ISS_TEMPLATE};
use crate::bundler::{
    InstallerRequest, PRODUCT_VERSION,
    error::Result,
};
use handlebars::Handlebars;
use serde::Serialize;

#[derive(Serialize)]
struct IssData {
    product_name: String,
    version: &'static str,
    install_dir: String,
    output_dir: String,
    output_base_filename: String,
    files: Vec<String>,
}

/// Base name ISCC gives the installer, without extension.
pub fn output_base_filename(installer_name: &str) -> String {
    format!("{installer_name}_installer")
}

/// Render the Inno Setup script for a validated request.
///
/// Produces one `[Files]` entry per file in the request, each pointing at
/// `source_directory` joined with the entry and installed into `{app}`,
/// which defaults to `{autopf}\<installer_name>`. Directories are written
/// as absolute paths.
pub fn render_iss_script(request: &InstallerRequest) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);

    let name = utils::escape_iss_constants(request.installer_name());
    let data = IssData {
        product_name: name.clone(),
        version: PRODUCT_VERSION,
        install_dir: format!("{{autopf}}\\{name}"),
        output_dir: request.absolute_output_directory()?.display().to_string(),
        output_base_filename: output_base_filename(request.installer_name()),
        files: request
            .resolved_files()?
            .iter()
            .map(|path| utils::quote_iss(&path.display().to_string()))
            .collect(),
    };

    handlebars.register_template_string("setup_script.iss", ISS_TEMPLATE)?;
    Ok(handlebars.render("setup_script.iss", &data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use path_absolutize::Absolutize;
    use std::path::{Path, PathBuf};

    fn absolute(path: &str) -> PathBuf {
        Path::new(path).absolutize().unwrap().into_owned()
    }

    fn request(files: &[&str]) -> InstallerRequest {
        InstallerRequest::new(
            "C:\\src",
            "C:\\out",
            files.iter().map(|f| f.to_string()).collect(),
            "Demo",
        )
    }

    fn source_lines(script: &str) -> Vec<&str> {
        script
            .lines()
            .filter(|line| line.starts_with("Source:"))
            .collect()
    }

    #[test]
    fn one_source_entry_per_file() {
        let req = request(&["a.txt", "b.txt", "lib/c.dll"]);
        let script = render_iss_script(&req).unwrap();
        let lines = source_lines(&script);

        assert_eq!(lines.len(), 3);
        for (line, file) in lines.iter().zip(req.file_list()) {
            let expected = absolute("C:\\src").join(file).display().to_string();
            assert!(line.contains(&expected), "{line} should reference {expected}");
            assert!(line.ends_with(r#"DestDir: "{app}""#));
        }
    }

    #[test]
    fn declares_metadata() {
        let script = render_iss_script(&request(&["a.txt"])).unwrap();
        assert!(script.starts_with("[Setup]"));
        assert!(script.contains("AppName=Demo\n"));
        assert!(script.contains("AppVersion=1.0.0.0\n"));
        assert!(script.contains("DefaultDirName={autopf}\\Demo\n"));
        assert!(script.contains(&format!("OutputDir={}\n", absolute("C:\\out").display())));
        assert!(script.contains("OutputBaseFilename=Demo_installer\n"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let req = request(&["a.txt", "b.txt"]);
        assert_eq!(
            render_iss_script(&req).unwrap(),
            render_iss_script(&req).unwrap()
        );
    }

    #[test]
    fn relative_directories_are_written_absolute() {
        let cwd = std::env::current_dir().unwrap();
        let req = InstallerRequest::new("src", "out", vec!["a.txt".into()], "Demo");
        let script = render_iss_script(&req).unwrap();

        assert!(script.contains(&format!("OutputDir={}\n", cwd.join("out").display())));
        assert_eq!(
            source_lines(&script),
            vec![format!(
                r#"Source: "{}"; DestDir: "{{app}}""#,
                cwd.join("src").join("a.txt").display()
            )]
        );
    }

    #[test]
    fn braces_in_name_are_not_constants() {
        let req = InstallerRequest::new("C:\\src", "C:\\out", vec!["a.txt".into()], "Tool{v2}");
        let script = render_iss_script(&req).unwrap();

        assert!(script.contains("AppName=Tool{{v2}\n"));
        assert!(script.contains("DefaultDirName={autopf}\\Tool{{v2}\n"));
        assert!(script.contains("OutputBaseFilename=Tool{v2}_installer\n"));
    }
}
