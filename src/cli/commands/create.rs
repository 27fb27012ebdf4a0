//! Installer creation command.

use std::path::{Path, PathBuf};
use std::time::Duration;

use path_absolutize::Absolutize;

use crate::bundler::{
    CreationOutcome, Creator, InstallerCreator, InstallerFormat, InstallerRequest, LoggingCreator,
    Settings, SettingsBuilder,
    settings::SettingsFile,
    shortcut::create_desktop_shortcut,
    utils::fs::list_directory,
};
use crate::cli::{Args, OutputManager, RuntimeConfig};
use crate::error::{CliError, GeneratorError, Result};
use crate::logging::{self, LogSettings};

const BLANK_NAME_SHORTCUT: &str =
    "Please enter a name for the installer. Desktop shortcut not created.";

/// Builds every requested installer and, optionally, the desktop shortcut.
///
/// Returns the process exit code: 1 if any hard failure occurred.
pub async fn execute(args: &Args, config: &RuntimeConfig) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let file = match &args.config {
        Some(path) => SettingsFile::load(path)?,
        None => SettingsFile::default(),
    };

    logging::init(log_settings(args, &file))?;

    let settings = build_settings(args, &file)?;
    let output = config.output();

    let source_dir = absolute(&args.source_dir)?;
    let output_dir = absolute(&args.output_dir)?;
    let file_list = if args.all_files {
        list_directory(&source_dir)?
    } else {
        args.files.clone()
    };

    output.verbose(&format!("Source directory: {}", source_dir.display()))?;
    output.verbose(&format!("Output directory: {}", output_dir.display()))?;
    output.verbose(&format!("Files: {}", file_list.join(", ")))?;

    let request = InstallerRequest::new(&source_dir, &output_dir, file_list, args.name.as_str());

    let mut failed = false;
    for format in args.ordered_formats() {
        if !create_one(format, &request, &settings, output).await? {
            failed = true;
        }
    }

    if args.shortcut {
        if args.name.trim().is_empty() {
            output.warn(BLANK_NAME_SHORTCUT)?;
        } else {
            match create_desktop_shortcut(&args.name, &output_dir, args.desktop_dir.as_deref())
                .await
            {
                Ok(path) => {
                    output.success(&format!("Desktop shortcut created: {}", path.display()))?
                }
                Err(e) => {
                    output.error(&format!("Failed to create desktop shortcut: {e}"));
                    failed = true;
                }
            }
        }
    }

    output.info("Installer creation completed.")?;
    Ok(if failed { 1 } else { 0 })
}

/// Runs one format. Returns `false` on a hard failure.
async fn create_one(
    format: InstallerFormat,
    request: &InstallerRequest,
    settings: &Settings,
    output: &OutputManager,
) -> Result<bool> {
    output.verbose(&format!("Creating {format} installer"))?;

    let creator = LoggingCreator::new(Creator::for_format(format, settings.clone()));
    match creator.create_installer(request.clone()).await {
        Ok(CreationOutcome::Created(artifact)) => {
            output.success(&format!(
                "{format} installer created: {}",
                artifact.path.display()
            ))?;
            if let (Some(size), Some(checksum)) = (artifact.size, &artifact.checksum) {
                output.indent(&format!("{size} bytes, sha256 {checksum}"))?;
            } else {
                output.warn(&format!(
                    "{} was not found after compilation",
                    artifact.path.display()
                ))?;
            }
            Ok(true)
        }
        Ok(CreationOutcome::Skipped(reason)) => {
            output.warn(&reason.to_string())?;
            Ok(true)
        }
        Err(e) => {
            let err = GeneratorError::from(e);
            output.error(&format!("Failed to create {format} installer: {err}"));
            for suggestion in err.recovery_suggestions() {
                output.indent(&suggestion)?;
            }
            Ok(false)
        }
    }
}

fn log_settings(args: &Args, file: &SettingsFile) -> LogSettings {
    let defaults = LogSettings::default();
    LogSettings {
        log_file: args
            .log_file
            .clone()
            .or_else(|| file.logging.file.clone())
            .unwrap_or(defaults.log_file),
        store_file: args
            .log_store
            .clone()
            .or_else(|| file.logging.store.clone())
            .unwrap_or(defaults.store_file),
        max_bytes: file.logging.max_bytes.unwrap_or(defaults.max_bytes),
        backups: file.logging.backups.unwrap_or(defaults.backups),
    }
}

fn build_settings(args: &Args, file: &SettingsFile) -> Result<Settings> {
    let mut builder = SettingsBuilder::new().apply_file(file);

    if let Some(path) = &args.iscc {
        builder = builder.inno_compiler(path);
    }
    if let Some(path) = &args.candle {
        builder = builder.candle(path);
    }
    if let Some(path) = &args.light {
        builder = builder.light(path);
    }
    if let Some(secs) = args.timeout_secs {
        builder = builder.compile_timeout(Duration::from_secs(secs));
    }

    Ok(builder.build()?)
}

fn absolute(path: &Path) -> Result<PathBuf> {
    Ok(path.absolutize()?.into_owned())
}
