//! Logging
//!
//! Two sinks share one [`Logger`] handle: an in-memory buffer that the log
//! viewer (`G`) reads, and, when enabled in the config, a `fern` dispatch
//! that routes every `log` record to a file in the data directory.

use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME, MAX_LOG_ENTRIES};
use anyhow::{Context, Result};
use chrono::{Local, Utc};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    log_file: Option<PathBuf>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            log_file: None,
        }
    }

    /// Build a logger from the `[logging]` section.
    ///
    /// File output goes to [`Logger::get_log_file_path`] when `enabled`.
    pub fn from_config(enabled: bool) -> Result<Self> {
        if enabled {
            Self::with_log_file(Self::get_log_file_path()?)
        } else {
            Ok(Self::new())
        }
    }

    /// Build a logger that also writes `log` records to `path`
    pub fn with_log_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        let dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(log::LevelFilter::Debug)
            .chain(file);

        // Only one global logger per process; later instances keep the first sink
        if dispatch.apply().is_err() {
            log::debug!("Logger: global logger already installed, keeping it");
        }

        Ok(Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            log_file: Some(path),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.log_file.is_some()
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Add a log entry to the in-memory buffer and forward it to `log`.
    ///
    /// The buffer keeps the newest [`MAX_LOG_ENTRIES`] entries.
    pub fn log(&self, message: String) {
        log::info!("{}", message);

        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
            let excess = logs.len().saturating_sub(MAX_LOG_ENTRIES);
            logs.drain(..excess);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Default log file location in the XDG data directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
