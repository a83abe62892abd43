//! `log_facade` provides a process-wide, leveled logger that annotates each record with the
//! location of the code that emitted it.
//!
//! It offers:
//! - A [`Logger`] object writing one `key=value` text line per record to a file or the console.
//!   It can be passed explicitly to the components that log.
//! - A global handle, installed with [`init`] or [`configure`], behind eight leveled functions
//!   ([`debug()`], [`debugf()`], [`info()`], [`infof()`], [`warn()`], [`warnf()`], [`error()`],
//!   [`errorf()`]) and their macro counterparts. Before configuration all of them are no-ops.
//! - A [`FacadeLayer`] that forwards [`tracing`] events to the configured logger.
//!
//! Lines look like:
//!
//! ```text
//! time=2025-01-01T08:30:00.000000000Z level=INFO source=src/main.rs:12 msg="hello world" user=42
//! ```
//!
//! # Example
//!
//! ```
//! use log_facade::{LoggerConfig, Level};
//!
//! let dir = tempfile::tempdir()?;
//! log_facade::init(LoggerConfig {
//!     directory: Some(dir.path().to_path_buf()),
//!     file_name: "app.log".to_string(),
//!     level: Level::Debug,
//!     ..LoggerConfig::default()
//! })?;
//!
//! log_facade::info!("service started", "port" => 8080);
//! log_facade::debugf!("hello {}", "world");
//!
//! let contents = std::fs::read_to_string(dir.path().join("app.log"))?;
//! assert_eq!(contents.lines().count(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod bridge;
mod formatter;
mod global;
mod level;
mod logger;
mod macros;
mod source;

use std::path::{Path, PathBuf};

pub use self::{
    bridge::{FacadeLayer, install_tracing_bridge},
    global::{
        configure, debug, debugf, error, errorf, global, info, infof, init, warn, warnf,
    },
    level::{Level, parse_level},
    logger::{Attr, Destination, Logger, Record},
    source::CallSite,
};

mod keys {
    pub(crate) const TIME: &str = "time";
    pub(crate) const LEVEL: &str = "level";
    pub(crate) const SOURCE: &str = "source";
    pub(crate) const MESSAGE: &str = "msg";

    /// The `tracing` target prefix of events emitted by this crate.
    pub(crate) const CRATE_TARGET: &str = env!("CARGO_CRATE_NAME");

    /// The field `tracing` macros record the event message under.
    pub(crate) const TRACING_MESSAGE: &str = "message";
}

/// Configuration for a [`Logger`].
///
/// The rotation, retention, size and compression settings are accepted so existing
/// configuration files keep working, but they are not applied: the log file only grows.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Directory where the log file is stored. If `None` or empty, logs go to standard output.
    pub directory: Option<PathBuf>,

    /// Name of the log file inside [`directory`](Self::directory).
    pub file_name: String,

    /// Rotation unit, such as `"day"`. Not applied.
    pub rotation: String,

    /// Minimum level of emitted records. Deserialized leniently; see [`Level::parse`].
    pub level: Level,

    /// Number of rotated files to keep. Not applied.
    pub max_log_files: u64,

    /// Size in megabytes at which to rotate. Not applied.
    pub max_size_mb: u64,

    /// Hours to wait before compressing rotated files. Not applied.
    pub compress_delay_hours: u64,

    /// Whether records carry a `source=<dir>/<file>:<line>` field.
    pub add_source: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_name: "app.log".to_string(),
            rotation: "day".to_string(),
            level: Level::Info,
            max_log_files: 7,
            max_size_mb: 100,
            compress_delay_hours: 1,
            add_source: true,
        }
    }
}

impl LoggerConfig {
    /// The directory to write to, or `None` when logging to the console.
    pub fn log_directory(&self) -> Option<&Path> {
        self.directory
            .as_deref()
            .filter(|directory| !directory.as_os_str().is_empty())
    }
}

/// Errors that can occur while setting up the logger.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Represents an error in configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Represents an error while creating or opening the log file.
    #[error("Failed to initialize log file appender: {0}")]
    FileAppenderInitialization(#[from] tracing_appender::rolling::InitError),

    /// Represents a failure to install the global `tracing` subscriber.
    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(#[from] tracing_subscriber::util::TryInitError),
}
