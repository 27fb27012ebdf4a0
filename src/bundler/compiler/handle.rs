//! Shared compiler handle reused by every creation of one format.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use super::invoker::{self, CompilationResult, CompileInvocation};
use crate::bundler::{
    InstallerFormat,
    error::{Error, Result},
};

/// Reusable compile helper for one installer format.
///
/// Obtained through [`HandleRegistry::get_handle`](super::HandleRegistry::get_handle);
/// at most one exists per format for the lifetime of the registry. The
/// handle interprets compiler exit status: a non-zero exit becomes
/// [`Error::CompilationFailed`] carrying the captured diagnostics.
#[derive(Debug)]
pub struct CompilerHandle {
    format: InstallerFormat,
    invocations: AtomicU64,
}

impl CompilerHandle {
    pub(super) fn new(format: InstallerFormat) -> Self {
        Self {
            format,
            invocations: AtomicU64::new(0),
        }
    }

    /// Format this handle compiles for.
    pub fn format(&self) -> InstallerFormat {
        self.format
    }

    /// Number of compiler processes started through this handle.
    pub fn invocations(&self) -> u64 {
        self.invocations.load(Ordering::Relaxed)
    }

    /// Runs one compiler invocation and checks its exit status.
    ///
    /// # Errors
    ///
    /// - [`Error::CommandFailed`] if the compiler cannot be started
    /// - [`Error::CompilerTimeout`] if it runs longer than `timeout`
    /// - [`Error::CompilationFailed`] if it exits non-zero
    pub async fn compile(
        &self,
        invocation: &CompileInvocation,
        timeout: Duration,
    ) -> Result<CompilationResult> {
        self.invocations.fetch_add(1, Ordering::Relaxed);
        let tool = invocation.tool_name();
        log::info!("Running {} ({})", tool, invocation.command_line());

        let result = invoker::run(&invocation.executable, &invocation.arguments, timeout).await?;

        if !result.success() {
            log::error!("{} error output: {}", tool, result.diagnostics());
            return Err(Error::CompilationFailed {
                tool,
                exit_code: result.exit_code,
                output: result.diagnostics().to_string(),
            });
        }

        if !result.stdout.trim().is_empty() {
            log::debug!("{} output: {}", tool, result.stdout.trim());
        }

        Ok(result)
    }
}
