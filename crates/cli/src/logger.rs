//! File-based logging for the sketch host. Each run writes to
//! `~/.sketch/logs/{run_id}/log` and mirrors every record to stderr.

use anyhow::{Context, Result};
use chrono::Local;
use dirs::home_dir;
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use uuid::Uuid;

pub struct SketchLogger {
    level: LevelFilter,
    file: Option<Mutex<File>>,
}

impl SketchLogger {
    /// Creates a logger at `level`. With `to_file` set, opens a fresh log
    /// file for this run and returns its path alongside the logger.
    pub fn new(level: LevelFilter, to_file: bool) -> Result<(Self, Option<PathBuf>)> {
        if !to_file {
            return Ok((Self { level, file: None }, None));
        }

        let dir = Self::log_dir(&Self::run_id())?;
        create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

        let path = dir.join("log");
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening {}", path.display()))?;

        let logger = Self {
            level,
            file: Some(Mutex::new(file)),
        };
        Ok((logger, Some(path)))
    }

    /// `{timestamp}_{first uuid group}`, unique per run.
    fn run_id() -> String {
        let started = Local::now().format("%Y%m%d_%H%M%S");
        let mut suffix = Uuid::new_v4().simple().to_string();
        suffix.truncate(8);
        format!("{started}_{suffix}")
    }

    pub fn log_dir(run_id: &str) -> Result<PathBuf> {
        let home = home_dir().context("no home directory to put logs in")?;
        Ok(home.join(".sketch/logs").join(run_id))
    }

    /// Installs the logger as the global `log` backend.
    pub fn init(level: LevelFilter, to_file: bool) -> Result<()> {
        let (logger, log_path) = Self::new(level, to_file)?;

        log::set_boxed_logger(Box::new(logger)).context("a logger is already installed")?;
        log::set_max_level(level);

        if let Some(path) = log_path {
            log::info!("writing log to {}", path.display());
        }
        Ok(())
    }
}

fn format_record(record: &Record) -> String {
    format!(
        "{} {:<5} [{}] {}",
        Local::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

impl Log for SketchLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        eprintln!("{line}");

        // write errors are dropped
        if let Some(Ok(mut file)) = self.file.as_ref().map(Mutex::lock) {
            let _ = writeln!(file, "{line}");
        }
    }

    fn flush(&self) {
        if let Some(Ok(mut file)) = self.file.as_ref().map(Mutex::lock) {
            let _ = file.flush();
        }
    }
}

/// Marks the start of a command in the log.
pub fn log_section(name: &str) {
    log::info!("---- {name} ----");
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_level_filtering() {
        let (logger, path) = SketchLogger::new(LevelFilter::Info, false).unwrap();
        assert!(path.is_none());

        let info = Metadata::builder().level(Level::Info).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&debug));
    }

    #[test]
    fn test_record_format() {
        let line = format_record(
            &Record::builder()
                .args(format_args!("loaded {} shapes", 3))
                .level(Level::Warn)
                .target("interchange")
                .build(),
        );
        assert!(line.ends_with("WARN  [interchange] loaded 3 shapes"));
    }

    #[test]
    fn test_run_id_shape() {
        let id = SketchLogger::run_id();
        let (timestamp, short) = id.rsplit_once('_').unwrap();
        assert_eq!(timestamp.len(), "20260101_120000".len());
        assert_eq!(short.len(), 8);
    }
}
