//! Log side-channel.
//!
//! [`InstallerLogger`] is the process logger. It forwards every record to
//! `env_logger` for the console (filtered by `RUST_LOG`) and additionally
//! tees records at `Info` or above to:
//!
//! - a rotating text log, one `<time> - <LEVEL> - <message>` line per record
//! - an append-only JSON-lines store ([`LogEntry`] per line)
//!
//! Install it once with [`init`].

mod rotating;
mod store;

pub use rotating::RotatingFile;
pub use store::{LogEntry, LogStore, read_all};

use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::error::{GeneratorError, Result};

/// Default text log location.
pub const DEFAULT_LOG_FILE: &str = "installer_creator.log";
/// Default JSON-lines store location.
pub const DEFAULT_LOG_STORE: &str = "installer_logs.jsonl";
/// Default rotation threshold.
pub const DEFAULT_MAX_BYTES: u64 = 1024 * 1024;
/// Default number of rotated text logs kept.
pub const DEFAULT_BACKUPS: usize = 3;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Where and how the side-channel writes.
#[derive(Clone, Debug)]
pub struct LogSettings {
    /// Rotating text log path.
    pub log_file: PathBuf,
    /// JSON-lines store path.
    pub store_file: PathBuf,
    /// Rotation threshold in bytes.
    pub max_bytes: u64,
    /// Rotated files kept.
    pub backups: usize,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            store_file: PathBuf::from(DEFAULT_LOG_STORE),
            max_bytes: DEFAULT_MAX_BYTES,
            backups: DEFAULT_BACKUPS,
        }
    }
}

/// Console logger plus file and store side-channel.
pub struct InstallerLogger {
    console: env_logger::Logger,
    file: Mutex<RotatingFile>,
    store: Mutex<LogStore>,
    write_failed: AtomicBool,
}

impl InstallerLogger {
    /// Opens the side-channel files and builds the console logger from
    /// `RUST_LOG` (default `warn`).
    pub fn new(settings: &LogSettings) -> Result<Self> {
        let console = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("warn"),
        )
        .build();

        Ok(Self {
            console,
            file: Mutex::new(RotatingFile::open(
                &settings.log_file,
                settings.max_bytes,
                settings.backups,
            )?),
            store: Mutex::new(LogStore::open(&settings.store_file)?),
            write_failed: AtomicBool::new(false),
        })
    }

    /// Level the global `log` facade must let through.
    pub fn max_level(&self) -> LevelFilter {
        self.console.filter().max(LevelFilter::Info)
    }

    fn tee(&self, record: &Record) {
        let time = chrono::Local::now().format(TIME_FORMAT).to_string();
        let level = record.level().to_string();
        let message = record.args().to_string();

        let written = self
            .file
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .write_line(&format!("{time} - {level} - {message}"));
        self.check(written, "log file");

        let stored = self
            .store
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .append(&LogEntry {
                time,
                level,
                message,
            });
        self.check(stored, "log store");
    }

    /// Reports the first side-channel write failure on stderr; later ones are silent.
    fn check(&self, result: io::Result<()>, target: &str) {
        let Err(e) = result else { return };
        if !self.write_failed.swap(true, Ordering::Relaxed) {
            eprintln!(
                "Warning: failed to write {target}: {e} (further write errors are not reported)"
            );
        }
    }
}

impl Log for InstallerLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info || self.console.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if self.console.matches(record) {
            self.console.log(record);
        }
        if record.level() <= Level::Info {
            self.tee(record);
        }
    }

    fn flush(&self) {
        self.console.flush();
        let flushed = self.file.lock().unwrap_or_else(|e| e.into_inner()).flush();
        self.check(flushed, "log file");
        let flushed = self.store.lock().unwrap_or_else(|e| e.into_inner()).flush();
        self.check(flushed, "log store");
    }
}

/// Installs [`InstallerLogger`] as the global logger.
///
/// # Errors
///
/// Fails if the log files cannot be opened or a logger is already set.
pub fn init(settings: LogSettings) -> Result<()> {
    let logger = InstallerLogger::new(&settings)?;
    let max_level = logger.max_level();

    log::set_boxed_logger(Box::new(logger))
        .map_err(|e| GeneratorError::Logging(e.to_string()))?;
    log::set_max_level(max_level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_in(dir: &std::path::Path) -> LogSettings {
        LogSettings {
            log_file: dir.join("installer_creator.log"),
            store_file: dir.join("installer_logs.jsonl"),
            ..LogSettings::default()
        }
    }

    #[test]
    fn info_records_reach_file_and_store() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        let logger = InstallerLogger::new(&settings).unwrap();

        logger.log(
            &Record::builder()
                .args(format_args!("Starting to create EXE installer."))
                .level(Level::Info)
                .build(),
        );
        logger.flush();

        let text = std::fs::read_to_string(&settings.log_file).unwrap();
        assert!(text.ends_with(" - INFO - Starting to create EXE installer.\n"));

        let entries = read_all(&settings.store_file).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, "INFO");
        assert_eq!(entries[0].message, "Starting to create EXE installer.");
        assert_eq!(entries[0].time.len(), "2024-05-01 10:00:00,000".len());
    }

    #[test]
    fn debug_records_are_not_teed() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        let logger = InstallerLogger::new(&settings).unwrap();

        logger.log(
            &Record::builder()
                .args(format_args!("noise"))
                .level(Level::Debug)
                .build(),
        );
        logger.flush();

        assert!(read_all(&settings.store_file).unwrap().is_empty());
        assert!(std::fs::read_to_string(&settings.log_file).unwrap().is_empty());
    }

    #[test]
    fn facade_level_always_admits_info() {
        let dir = tempfile::tempdir().unwrap();
        let logger = InstallerLogger::new(&settings_in(dir.path())).unwrap();
        assert!(logger.max_level() >= LevelFilter::Info);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn first_write_failure_is_flagged_once() {
        let dir = tempfile::tempdir().unwrap();
        let settings = LogSettings {
            log_file: PathBuf::from("/dev/full"),
            ..settings_in(dir.path())
        };
        let logger = InstallerLogger::new(&settings).unwrap();
        assert!(!logger.write_failed.load(Ordering::Relaxed));

        for _ in 0..2 {
            logger.log(
                &Record::builder()
                    .args(format_args!("disk is full"))
                    .level(Level::Error)
                    .build(),
            );
        }

        assert!(logger.write_failed.load(Ordering::Relaxed));
        // The store keeps working when the text log cannot be written.
        assert_eq!(read_all(&settings.store_file).unwrap().len(), 2);
    }
}
