//! Rolling Logger
//!
//! Writes `log` and `tracing` records to `<app>.log` in the given directory
//! and mirrors them to stderr. When the file passes `max_file_size` it is
//! shifted to `<app>.1.log`, the older generations move up by one, and
//! anything past `max_files` is dropped.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::{self, format::Writer, time::FormatTime};
use tracing_subscriber::prelude::*;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Rotate once the current file reaches this many bytes
    pub max_file_size: u64,
    /// Generations kept on disk, current file included
    pub max_files: usize,
    pub level: LevelFilter,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            max_file_size: 1024 * 1024,
            max_files: 5,
            level: LevelFilter::INFO,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("log file error: {0}")]
    Io(#[from] io::Error),
    #[error("a global logger is already installed")]
    AlreadyInitialized,
    #[error("logger not initialized")]
    NotInitialized,
}

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Install the global subscriber with default settings
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), LoggerError> {
    init_with_config(log_dir, app_name, LoggerConfig::default())
}

pub fn init_with_config(
    log_dir: impl AsRef<Path>,
    app_name: &str,
    config: LoggerConfig,
) -> Result<(), LoggerError> {
    let file = RollingFile::open(log_dir.as_ref(), app_name, config.max_file_size, config.max_files)?;
    let handle = RollingHandle(Arc::new(Mutex::new(file)));

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_timer(LocalTime)
        .with_target(true)
        .with_writer(move || handle.clone());
    let stderr_layer = fmt::layer().with_timer(LocalTime).with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(config.level)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    let _ = INSTALLED.set(());
    Ok(())
}

/// Log a line at INFO through the installed logger
pub fn info(message: &str) -> Result<(), LoggerError> {
    INSTALLED.get().ok_or(LoggerError::NotInitialized)?;
    log::info!("{}", message);
    Ok(())
}

/// Log a line at ERROR through the installed logger
pub fn error(message: &str) -> Result<(), LoggerError> {
    INSTALLED.get().ok_or(LoggerError::NotInitialized)?;
    log::error!("{}", message);
    Ok(())
}

struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Cloneable writer handed out to the fmt layer
#[derive(Clone)]
struct RollingHandle(Arc<Mutex<RollingFile>>);

impl Write for RollingHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.flush()
    }
}

struct RollingFile {
    dir: PathBuf,
    app_name: String,
    max_file_size: u64,
    max_files: usize,
    file: File,
    size: u64,
}

impl RollingFile {
    fn open(dir: &Path, app_name: &str, max_file_size: u64, max_files: usize) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = generation_path(dir, app_name, 0);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let size = file.metadata()?.len();
        Ok(Self {
            dir: dir.to_path_buf(),
            app_name: app_name.to_string(),
            max_file_size,
            max_files: max_files.max(1),
            file,
            size,
        })
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        let oldest = generation_path(&self.dir, &self.app_name, self.max_files - 1);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for generation in (0..self.max_files - 1).rev() {
            let from = generation_path(&self.dir, &self.app_name, generation);
            if from.exists() {
                fs::rename(&from, generation_path(&self.dir, &self.app_name, generation + 1))?;
            }
        }

        self.file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(generation_path(&self.dir, &self.app_name, 0))?;
        self.size = 0;
        Ok(())
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.size > 0 && self.size + buf.len() as u64 > self.max_file_size {
            self.rotate()?;
        }
        let written = self.file.write(buf)?;
        self.size += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// `<app>.log` for generation 0, `<app>.<n>.log` after that
fn generation_path(dir: &Path, app_name: &str, generation: usize) -> PathBuf {
    if generation == 0 {
        dir.join(format!("{}.log", app_name))
    } else {
        dir.join(format!("{}.{}.log", app_name, generation))
    }
}
