//! The process-wide logger handle and the leveled functions that use it.

use std::{fmt, path::PathBuf, sync::Arc};

use arc_swap::ArcSwapOption;

use crate::{Attr, Level, Logger, LoggerConfig, LoggerError};

static GLOBAL: ArcSwapOption<Logger> = ArcSwapOption::const_empty();

/// Builds a [`Logger`] from `config` and installs it as the process-wide handle, replacing any
/// previously installed one.
///
/// The installed logger is also returned, for components that take it explicitly. Threads that
/// are mid-call on the previous logger finish writing to it.
///
/// # Errors
///
/// Returns a [`LoggerError`] if the logger cannot be built. The previous handle, if any, stays
/// installed in that case.
pub fn init(config: LoggerConfig) -> Result<Arc<Logger>, LoggerError> {
    let logger = Arc::new(Logger::new(&config)?);
    GLOBAL.store(Some(Arc::clone(&logger)));

    tracing::debug!(
        destination = ?logger.destination(),
        threshold = %logger.level(),
        add_source = logger.adds_source(),
        rotation = %config.rotation,
        max_log_files = config.max_log_files,
        max_size_mb = config.max_size_mb,
        compress_delay_hours = config.compress_delay_hours,
        "Logger installed; rotation, retention and compression settings are not applied"
    );

    Ok(logger)
}

/// Installs a process-wide logger from positional settings.
///
/// An empty `directory` logs to standard output and ignores the file settings. `level` is
/// parsed with [`Level::parse`], so unrecognized names select [`Level::Info`]. `rotation`,
/// `max_log_files`, `max_size_mb` and `compress_delay_hours` are accepted but not applied.
/// Source annotation is enabled.
///
/// # Errors
///
/// Returns a [`LoggerError`] if the log file cannot be opened; no logger is installed then.
pub fn configure(
    directory: &str,
    file_name: &str,
    rotation: &str,
    level: &str,
    max_log_files: u64,
    max_size_mb: u64,
    compress_delay_hours: u64,
) -> Result<(), LoggerError> {
    init(LoggerConfig {
        directory: (!directory.is_empty()).then(|| PathBuf::from(directory)),
        file_name: file_name.to_string(),
        rotation: rotation.to_string(),
        level: Level::parse(level),
        max_log_files,
        max_size_mb,
        compress_delay_hours,
        add_source: true,
    })
    .map(drop)
}

/// The currently installed logger, if any.
pub fn global() -> Option<Arc<Logger>> {
    GLOBAL.load_full()
}

#[track_caller]
#[inline]
fn log(level: Level, msg: &str, attrs: &[Attr<'_>]) {
    if let Some(logger) = GLOBAL.load().as_deref() {
        logger.log(level, msg, attrs);
    }
}

#[track_caller]
#[inline]
fn logf(level: Level, args: fmt::Arguments<'_>) {
    if let Some(logger) = GLOBAL.load().as_deref() {
        logger.logf(level, args);
    }
}

/// Logs at [`Level::Debug`] through the global logger. A no-op if none is installed.
#[track_caller]
pub fn debug(msg: &str, attrs: &[Attr<'_>]) {
    log(Level::Debug, msg, attrs);
}

/// Logs a formatted message at [`Level::Debug`] through the global logger.
#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    logf(Level::Debug, args);
}

/// Logs at [`Level::Info`] through the global logger. A no-op if none is installed.
#[track_caller]
pub fn info(msg: &str, attrs: &[Attr<'_>]) {
    log(Level::Info, msg, attrs);
}

/// Logs a formatted message at [`Level::Info`] through the global logger.
#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    logf(Level::Info, args);
}

/// Logs at [`Level::Warn`] through the global logger. A no-op if none is installed.
#[track_caller]
pub fn warn(msg: &str, attrs: &[Attr<'_>]) {
    log(Level::Warn, msg, attrs);
}

/// Logs a formatted message at [`Level::Warn`] through the global logger.
#[track_caller]
pub fn warnf(args: fmt::Arguments<'_>) {
    logf(Level::Warn, args);
}

/// Logs at [`Level::Error`] through the global logger. A no-op if none is installed.
#[track_caller]
pub fn error(msg: &str, attrs: &[Attr<'_>]) {
    log(Level::Error, msg, attrs);
}

/// Logs a formatted message at [`Level::Error`] through the global logger.
#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    logf(Level::Error, args);
}
