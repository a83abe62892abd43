//! The [`Logger`] object and the values it emits.

use std::{fmt, io::Write, path::PathBuf};

use tracing_subscriber::fmt::{MakeWriter, writer::BoxMakeWriter};

use crate::{Level, LoggerConfig, LoggerError, formatter, source::CallSite};

/// A structured key/value attribute attached to a record.
///
/// The value is only formatted if the record passes the level check.
#[derive(Clone, Copy)]
pub struct Attr<'a> {
    key: &'a str,
    value: &'a dyn fmt::Display,
}

impl<'a> Attr<'a> {
    /// Creates an attribute.
    pub fn new(key: &'a str, value: &'a dyn fmt::Display) -> Self {
        Self { key, value }
    }

    /// The attribute key.
    pub fn key(&self) -> &'a str {
        self.key
    }

    /// The attribute value.
    pub fn value(&self) -> &'a dyn fmt::Display {
        self.value
    }
}

impl fmt::Debug for Attr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attr")
            .field("key", &self.key)
            .field("value", &format_args!("{}", self.value))
            .finish()
    }
}

/// One log entry, encoded and written as soon as it is built.
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    level: Level,
    message: fmt::Arguments<'a>,
    attrs: &'a [Attr<'a>],
    source: Option<CallSite>,
}

impl<'a> Record<'a> {
    /// Creates a record.
    pub fn new(
        level: Level,
        message: fmt::Arguments<'a>,
        attrs: &'a [Attr<'a>],
        source: Option<CallSite>,
    ) -> Self {
        Self {
            level,
            message,
            attrs,
            source,
        }
    }

    /// The record's severity.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The unformatted message.
    pub fn message(&self) -> fmt::Arguments<'a> {
        self.message
    }

    /// Attributes in call order.
    pub fn attrs(&self) -> &'a [Attr<'a>] {
        self.attrs
    }

    /// Where the record was emitted from, if source annotation applies.
    pub fn source(&self) -> Option<CallSite> {
        self.source
    }
}

/// Where a [`Logger`] writes its lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    /// Standard output.
    Console,

    /// A file opened in append mode.
    File(PathBuf),

    /// A writer supplied through [`Logger::with_writer`].
    Custom,
}

/// A leveled logger writing one text line per record.
///
/// A `Logger` can be passed explicitly (usually as `Arc<Logger>`) to the components that log,
/// or installed as the process-wide handle with [`crate::init`]. Every emitting method is
/// `#[track_caller]`, so the `source` field names the code that called it.
///
/// ```
/// use log_facade::{Attr, Level, Logger};
///
/// let logger = Logger::with_writer(std::io::sink, Level::Info, true);
/// logger.debug("suppressed", &[]);
/// logger.info("request served", &[Attr::new("status", &200)]);
/// logger.warnf(format_args!("retrying in {}s", 5));
/// ```
#[derive(Debug)]
pub struct Logger {
    writer: BoxMakeWriter,
    level: Level,
    add_source: bool,
    destination: Destination,
}

impl Logger {
    /// Builds a logger from `config` without installing it globally.
    ///
    /// A missing or empty directory selects the console. Otherwise the file
    /// `<directory>/<file_name>` is created if needed, along with its parent directories, and
    /// opened for appending.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::Configuration`] if the file name is empty, and
    /// [`LoggerError::FileAppenderInitialization`] if the file cannot be opened.
    pub fn new(config: &LoggerConfig) -> Result<Self, LoggerError> {
        let Some(directory) = config.log_directory() else {
            return Ok(Self {
                writer: BoxMakeWriter::new(std::io::stdout),
                level: config.level,
                add_source: config.add_source,
                destination: Destination::Console,
            });
        };

        if config.file_name.is_empty() {
            return Err(LoggerError::Configuration(
                "a log file name is required when a log directory is set".to_string(),
            ));
        }

        let file_appender = tracing_appender::rolling::RollingFileAppender::builder()
            .rotation(tracing_appender::rolling::Rotation::NEVER)
            .filename_prefix(config.file_name.as_str())
            .build(directory)?;

        Ok(Self {
            writer: BoxMakeWriter::new(file_appender),
            level: config.level,
            add_source: config.add_source,
            destination: Destination::File(directory.join(&config.file_name)),
        })
    }

    /// Builds a logger over any [`MakeWriter`].
    pub fn with_writer<W>(writer: W, level: Level, add_source: bool) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        Self {
            writer: BoxMakeWriter::new(writer),
            level,
            add_source,
            destination: Destination::Custom,
        }
    }

    /// The minimum level that is emitted.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Whether records are annotated with their call site.
    pub fn adds_source(&self) -> bool {
        self.add_source
    }

    /// Where lines are written.
    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Whether a record at `level` would be emitted.
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level
    }

    /// Resolves the caller when source annotation is on. Must be called directly from a
    /// `#[track_caller]` body; a closure would report its own location.
    #[track_caller]
    #[inline]
    fn caller(&self) -> Option<CallSite> {
        if self.add_source {
            Some(CallSite::caller())
        } else {
            None
        }
    }

    /// Logs `msg` with `attrs` at `level`.
    #[track_caller]
    pub fn log(&self, level: Level, msg: &str, attrs: &[Attr<'_>]) {
        if self.enabled(level) {
            let source = self.caller();
            self.emit(&Record::new(level, format_args!("{msg}"), attrs, source));
        }
    }

    /// Logs a formatted message at `level`.
    #[track_caller]
    pub fn logf(&self, level: Level, args: fmt::Arguments<'_>) {
        if self.enabled(level) {
            let source = self.caller();
            self.emit(&Record::new(level, args, &[], source));
        }
    }

    /// Logs at [`Level::Debug`].
    #[track_caller]
    pub fn debug(&self, msg: &str, attrs: &[Attr<'_>]) {
        self.log(Level::Debug, msg, attrs);
    }

    /// Logs a formatted message at [`Level::Debug`].
    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Debug, args);
    }

    /// Logs at [`Level::Info`].
    #[track_caller]
    pub fn info(&self, msg: &str, attrs: &[Attr<'_>]) {
        self.log(Level::Info, msg, attrs);
    }

    /// Logs a formatted message at [`Level::Info`].
    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Info, args);
    }

    /// Logs at [`Level::Warn`].
    #[track_caller]
    pub fn warn(&self, msg: &str, attrs: &[Attr<'_>]) {
        self.log(Level::Warn, msg, attrs);
    }

    /// Logs a formatted message at [`Level::Warn`].
    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Warn, args);
    }

    /// Logs at [`Level::Error`].
    #[track_caller]
    pub fn error(&self, msg: &str, attrs: &[Attr<'_>]) {
        self.log(Level::Error, msg, attrs);
    }

    /// Logs a formatted message at [`Level::Error`].
    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Error, args);
    }

    /// Encodes and writes a prepared record, subject to the level check.
    ///
    /// The record's own `source` is written as given; the source flag is not consulted.
    /// Write failures are ignored.
    pub fn emit(&self, record: &Record<'_>) {
        if !self.enabled(record.level()) {
            return;
        }
        if let Ok(line) = formatter::encode(record) {
            let _ = self.flush(line.as_bytes());
        }
    }

    /// Writes a complete line with a single `write_all` call, so concurrent records are never
    /// interleaved.
    fn flush(&self, line: &[u8]) -> Result<(), std::io::Error> {
        self.writer.make_writer().write_all(line)
    }
}
