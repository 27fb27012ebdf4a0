//! Subprocess execution for external installer compilers.

use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
    process::Stdio,
    time::Duration,
};

use tokio::{
    io::{AsyncRead, AsyncReadExt},
    process::Command,
};

use crate::bundler::error::{Error, Result};

/// One compiler call: the executable and its arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileInvocation {
    /// Path to the compiler executable.
    pub executable: PathBuf,
    /// Arguments passed to the compiler, in order.
    pub arguments: Vec<OsString>,
}

impl CompileInvocation {
    /// Starts an invocation of `executable` with no arguments.
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            arguments: Vec::new(),
        }
    }

    /// Appends an argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.arguments.push(arg.as_ref().to_os_string());
        self
    }

    /// File stem of the executable, used as the tool name in logs and errors.
    pub fn tool_name(&self) -> String {
        self.executable
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.executable.display().to_string())
    }

    /// Printable command line.
    pub fn command_line(&self) -> String {
        std::iter::once(self.executable.display().to_string())
            .chain(
                self.arguments
                    .iter()
                    .map(|arg| arg.to_string_lossy().into_owned()),
            )
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Captured result of a finished compiler process.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompilationResult {
    /// Exit code, `None` if the process was terminated by a signal.
    pub exit_code: Option<i32>,
    /// Everything written to stdout.
    pub stdout: String,
    /// Everything written to stderr.
    pub stderr: String,
}

impl CompilationResult {
    /// Whether the process exited with status 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// The most useful diagnostic text: stderr, or stdout if stderr is empty.
    ///
    /// ISCC and the WiX tools print most errors on stdout.
    pub fn diagnostics(&self) -> &str {
        if self.stderr.trim().is_empty() {
            self.stdout.trim()
        } else {
            self.stderr.trim()
        }
    }
}

/// Runs `executable` with `arguments`, blocking the task until it exits.
///
/// Stdout and stderr are captured concurrently so neither pipe can fill up
/// and stall the child. A non-zero exit is NOT an error here; the caller
/// decides what it means. Errors are returned only when the process cannot
/// be spawned or waited on, or when it outlives `timeout` (it is killed).
pub async fn run(
    executable: &Path,
    arguments: &[OsString],
    timeout: Duration,
) -> Result<CompilationResult> {
    let command_line = || {
        CompileInvocation {
            executable: executable.to_path_buf(),
            arguments: arguments.to_vec(),
        }
        .command_line()
    };

    let mut child = Command::new(executable)
        .args(arguments)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|error| Error::CommandFailed {
            command: command_line(),
            error,
        })?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let finished = tokio::time::timeout(timeout, async {
        tokio::join!(read_stream(stdout), read_stream(stderr), child.wait())
    })
    .await;

    match finished {
        Ok((stdout, stderr, status)) => {
            let status = status.map_err(|error| Error::CommandFailed {
                command: command_line(),
                error,
            })?;
            Ok(CompilationResult {
                exit_code: status.code(),
                stdout,
                stderr,
            })
        }
        Err(_elapsed) => {
            if let Err(e) = child.kill().await {
                log::warn!("Failed to kill {}: {}", executable.display(), e);
            }
            Err(Error::CompilerTimeout {
                tool: CompileInvocation::new(executable).tool_name(),
                timeout,
            })
        }
    }
}

async fn read_stream<R: AsyncRead + Unpin>(stream: Option<R>) -> String {
    let mut buffer = Vec::new();
    if let Some(mut stream) = stream {
        if let Err(e) = stream.read_to_end(&mut buffer).await {
            log::debug!("Stopped reading compiler output: {}", e);
        }
    }
    String::from_utf8_lossy(&buffer).into_owned()
}
