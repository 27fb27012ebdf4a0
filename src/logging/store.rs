//! Append-only JSON-lines log store.
//!
//! One record per line: `{"time": ..., "level": ..., "message": ...}`.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A stored log record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Local timestamp, `YYYY-MM-DD HH:MM:SS,mmm`.
    pub time: String,
    /// Level name (e.g. `INFO`).
    pub level: String,
    /// Formatted message.
    pub message: String,
}

/// Writer for the JSON-lines store.
#[derive(Debug)]
pub struct LogStore {
    file: File,
}

impl LogStore {
    /// Opens (or creates) the store at `path`.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self { file })
    }

    /// Appends one record.
    pub fn append(&mut self, entry: &LogEntry) -> io::Result<()> {
        let line = serde_json::to_string(entry).map_err(io::Error::other)?;
        writeln!(self.file, "{line}")
    }

    /// Flushes buffered output.
    pub fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Reads every record from a store file. Malformed lines are skipped.
pub fn read_all(path: &Path) -> io::Result<Vec<LogEntry>> {
    let reader = BufReader::new(File::open(path)?);
    let mut entries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Ok(entry) = serde_json::from_str(&line) {
            entries.push(entry);
        }
    }
    Ok(entries)
}
