//! End-to-end installer creation against stand-in compilers.

#![cfg(unix)]

mod common;

use std::time::Duration;

use common::{
    calls, demo_request, fake_compiler, iscc_producing, settings, source_dir,
    wix_tool_producing_output,
};
use installer_generator::bundler::{
    CreationOutcome, Creator, Error, InstallerCreator, InstallerFormat, InstallerRequest,
    LoggingCreator, SoftFailure, WIXOBJ_FILE_NAME,
};

const TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::test]
async fn exe_invokes_iscc_once_with_script_path() {
    let tools = tempfile::tempdir().unwrap();
    let source = source_dir();
    let work = tempfile::tempdir().unwrap();
    let output = work.path().join("out");

    let iscc = iscc_producing(tools.path(), "Demo");
    let settings = settings(&iscc, &tools.path().join("candle"), &tools.path().join("light"), TIMEOUT);

    let creator = Creator::for_format(InstallerFormat::Exe, settings);
    let outcome = creator
        .create_installer(demo_request(source.path(), &output))
        .await
        .unwrap();

    let artifact = outcome.artifact().expect("installer should be created");
    let script = output.join("setup_script.iss");
    assert_eq!(artifact.script, script);
    assert_eq!(artifact.path, output.join("Demo_installer.exe"));
    assert!(artifact.exists());
    assert_eq!(artifact.checksum.as_ref().map(String::len), Some(64));

    assert_eq!(calls(tools.path(), "ISCC"), vec![script.display().to_string()]);

    let bytes = std::fs::read(&script).unwrap();
    assert!(bytes.starts_with(&[0xEF, 0xBB, 0xBF]));
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("AppName=Demo"));
    assert!(text.contains(&format!("OutputDir={}", output.display())));
    assert!(text.contains("OutputBaseFilename=Demo_installer"));
    assert!(text.contains(&format!("\"{}\"", source.path().join("a.txt").display())));
    assert!(text.contains(&format!("\"{}\"", source.path().join("b.txt").display())));
}

#[tokio::test]
async fn empty_file_list_writes_nothing() {
    let tools = tempfile::tempdir().unwrap();
    let source = source_dir();
    let output = tempfile::tempdir().unwrap();
    let iscc = iscc_producing(tools.path(), "Demo");
    let settings = settings(&iscc, &tools.path().join("candle"), &tools.path().join("light"), TIMEOUT);

    let request = InstallerRequest::new(source.path(), output.path(), Vec::new(), "Demo");
    let outcome = Creator::for_format(InstallerFormat::Exe, settings)
        .create_installer(request)
        .await
        .unwrap();

    assert_eq!(outcome.soft_failure(), Some(&SoftFailure::EmptyFileList));
    assert!(!output.path().join("setup_script.iss").exists());
    assert!(calls(tools.path(), "ISCC").is_empty());
}

#[tokio::test]
async fn blank_name_is_reported_per_format() {
    let tools = tempfile::tempdir().unwrap();
    let source = source_dir();
    let output = tempfile::tempdir().unwrap();
    let candle = wix_tool_producing_output(tools.path(), "candle");
    let light = wix_tool_producing_output(tools.path(), "light");
    let settings = settings(&tools.path().join("ISCC"), &candle, &light, TIMEOUT);

    let request =
        InstallerRequest::new(source.path(), output.path(), vec!["a.txt".into()], "   ");
    let outcome = Creator::for_format(InstallerFormat::Msi, settings)
        .create_installer(request)
        .await
        .unwrap();

    let failure = outcome.soft_failure().unwrap();
    assert_eq!(
        failure,
        &SoftFailure::BlankInstallerName {
            format: InstallerFormat::Msi
        }
    );
    assert_eq!(failure.to_string(), "Please enter a name for the MSI file.");
    assert!(!output.path().join("setup_script.wxs").exists());
    assert!(calls(tools.path(), "candle").is_empty());
}

#[tokio::test]
async fn msi_runs_translate_then_link() {
    let tools = tempfile::tempdir().unwrap();
    let source = source_dir();
    let output = tempfile::tempdir().unwrap();
    let candle = wix_tool_producing_output(tools.path(), "candle");
    let light = wix_tool_producing_output(tools.path(), "light");
    let settings = settings(&tools.path().join("ISCC"), &candle, &light, TIMEOUT);

    let outcome = Creator::for_format(InstallerFormat::Msi, settings)
        .create_installer(demo_request(source.path(), output.path()))
        .await
        .unwrap();

    let wxs = output.path().join("setup_script.wxs");
    let wixobj = output.path().join(WIXOBJ_FILE_NAME);
    let msi = output.path().join("Demo.msi");

    let artifact = outcome.artifact().unwrap();
    assert_eq!(artifact.path, msi);
    assert!(artifact.exists());

    assert_eq!(
        calls(tools.path(), "candle"),
        vec![format!("{} -o {}", wxs.display(), wixobj.display())]
    );
    assert_eq!(
        calls(tools.path(), "light"),
        vec![format!("{} -o {}", wixobj.display(), msi.display())]
    );

    let text = std::fs::read_to_string(&wxs).unwrap();
    assert_eq!(text.matches("<Component ").count(), 2);
    assert_eq!(text.matches("<ComponentRef ").count(), 2);
}

#[tokio::test]
async fn missing_object_file_skips_link_stage() {
    let tools = tempfile::tempdir().unwrap();
    let source = source_dir();
    let output = tempfile::tempdir().unwrap();
    let candle = fake_compiler(tools.path(), "candle", "exit 0");
    let light = wix_tool_producing_output(tools.path(), "light");
    let settings = settings(&tools.path().join("ISCC"), &candle, &light, TIMEOUT);

    let outcome = Creator::for_format(InstallerFormat::Msi, settings)
        .create_installer(demo_request(source.path(), output.path()))
        .await
        .unwrap();

    assert!(matches!(
        outcome,
        CreationOutcome::Skipped(SoftFailure::MissingIntermediate { .. })
    ));
    assert_eq!(calls(tools.path(), "candle").len(), 1);
    assert!(calls(tools.path(), "light").is_empty());
}

#[tokio::test]
async fn stale_object_file_does_not_count_as_output() {
    let tools = tempfile::tempdir().unwrap();
    let source = source_dir();
    let output = tempfile::tempdir().unwrap();
    std::fs::write(output.path().join(WIXOBJ_FILE_NAME), "previous run").unwrap();

    let candle = fake_compiler(tools.path(), "candle", "exit 0");
    let light = wix_tool_producing_output(tools.path(), "light");
    let settings = settings(&tools.path().join("ISCC"), &candle, &light, TIMEOUT);

    let outcome = Creator::for_format(InstallerFormat::Msi, settings)
        .create_installer(demo_request(source.path(), output.path()))
        .await
        .unwrap();

    assert!(outcome.soft_failure().is_some());
    assert!(calls(tools.path(), "light").is_empty());
}

#[tokio::test]
async fn failing_translate_stage_is_a_hard_failure() {
    let tools = tempfile::tempdir().unwrap();
    let source = source_dir();
    let output = tempfile::tempdir().unwrap();
    let candle = fake_compiler(
        tools.path(),
        "candle",
        "echo 'error CNDL0104: not a valid source file' >&2\nexit 3",
    );
    let light = wix_tool_producing_output(tools.path(), "light");
    let settings = settings(&tools.path().join("ISCC"), &candle, &light, TIMEOUT);

    let err = Creator::for_format(InstallerFormat::Msi, settings)
        .create_installer(demo_request(source.path(), output.path()))
        .await
        .unwrap_err();

    match err {
        Error::CompilationFailed {
            tool,
            exit_code,
            output,
        } => {
            assert_eq!(tool, "candle");
            assert_eq!(exit_code, Some(3));
            assert!(output.contains("CNDL0104"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(calls(tools.path(), "light").is_empty());
}

#[tokio::test]
async fn missing_compiler_propagates_through_logging_wrapper() {
    let tools = tempfile::tempdir().unwrap();
    let source = source_dir();
    let output = tempfile::tempdir().unwrap();
    let missing = tools.path().join("no-such-dir").join("ISCC.exe");
    let settings = settings(&missing, &tools.path().join("candle"), &tools.path().join("light"), TIMEOUT);

    let creator = LoggingCreator::new(Creator::for_format(InstallerFormat::Exe, settings));
    let err = creator
        .create_installer(demo_request(source.path(), output.path()))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::CommandFailed { .. }), "{err}");
    // The script is written before the compiler is started.
    assert!(output.path().join("setup_script.iss").exists());
}

#[tokio::test]
async fn hung_compiler_is_killed_after_timeout() {
    let tools = tempfile::tempdir().unwrap();
    let source = source_dir();
    let output = tempfile::tempdir().unwrap();
    let iscc = fake_compiler(tools.path(), "ISCC", "exec sleep 30");
    let settings = settings(
        &iscc,
        &tools.path().join("candle"),
        &tools.path().join("light"),
        Duration::from_millis(300),
    );

    let started = std::time::Instant::now();
    let err = Creator::for_format(InstallerFormat::Exe, settings)
        .create_installer(demo_request(source.path(), output.path()))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::CompilerTimeout { .. }), "{err}");
    assert!(started.elapsed() < Duration::from_secs(20));
}
