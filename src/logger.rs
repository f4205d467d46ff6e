//! Logging utilities.
//!
//! Two layers: an in-memory [`Logger`] whose entries back the logs dialog,
//! and [`init_file_logging`] which wires the `log` facade through fern to a
//! file under the cache directory when enabled in the configuration.

use anyhow::{Context, Result};
use chrono::Utc;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::LoggingConfig;

/// Shared logger that can be used across the application
#[derive(Clone, Default)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);
        log::debug!("{}", message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    #[must_use]
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            // Reverse to show newest logs first (descending order by timestamp)
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
}

/// Path of the log file used when file logging is enabled
pub fn log_file_path() -> Result<PathBuf> {
    let cache_dir = dirs::cache_dir().context("Could not determine cache directory")?;
    Ok(cache_dir.join("listkeeper").join("listkeeper.log"))
}

/// Route the `log` facade to a file when logging is enabled.
///
/// A no-op when disabled so that `log::debug!` calls stay cheap.
pub fn init_file_logging(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?)
        .apply()
        .context("Failed to initialize file logging")?;

    Ok(())
}
