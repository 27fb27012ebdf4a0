//! Colored terminal output for installer generation.

use std::io::Write;
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Output manager for consistent colored terminal output
#[derive(Debug)]
pub struct OutputManager {
    stdout: BufferWriter,
    verbose: bool,
    quiet: bool,
}

impl Clone for OutputManager {
    fn clone(&self) -> Self {
        Self::new(self.verbose, self.quiet)
    }
}

impl OutputManager {
    /// Create a new output manager
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            stdout: BufferWriter::stdout(ColorChoice::Auto),
            verbose,
            quiet,
        }
    }

    fn emit(
        writer: &BufferWriter,
        marker: &str,
        color: Color,
        message: &str,
    ) -> std::io::Result<()> {
        let mut buffer = writer.buffer();
        buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(&mut buffer, "{marker}")?;
        buffer.reset()?;
        writeln!(&mut buffer, " {message}")?;
        writer.print(&buffer)
    }

    /// Print an info message
    pub fn info(&self, message: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        Self::emit(&self.stdout, "ℹ", Color::Cyan, message)
    }

    /// Print a success message
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        Self::emit(&self.stdout, "✓", Color::Green, message)
    }

    /// Print a warning message (soft failures)
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        Self::emit(&self.stdout, "⚠", Color::Yellow, message)
    }

    /// Print an error message to stderr (always shown)
    pub fn error(&self, message: &str) {
        let stderr = BufferWriter::stderr(ColorChoice::Auto);
        if Self::emit(&stderr, "✗", Color::Red, message).is_err() {
            eprintln!("✗ {message}");
        }
    }

    /// Print a message only in verbose mode
    pub fn verbose(&self, message: &str) -> std::io::Result<()> {
        if !self.verbose || self.quiet {
            return Ok(());
        }
        Self::emit(&self.stdout, "→", Color::Blue, message)
    }

    /// Print indented text (for sub-items)
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut buffer = self.stdout.buffer();
        writeln!(&mut buffer, "    {message}")?;
        self.stdout.print(&buffer)
    }
}
