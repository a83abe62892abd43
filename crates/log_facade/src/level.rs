//! Severity levels used both to tag records and as the filtering threshold.

use std::fmt;

/// The severity of a log record.
///
/// Levels are ordered from least to most severe: `Debug < Info < Warn < Error`.
/// Note that this is the opposite of the ordering used by [`tracing::Level`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String"))]
pub enum Level {
    /// Verbose diagnostics.
    Debug,

    /// Routine operational messages.
    #[default]
    Info,

    /// Something unexpected that does not stop the application.
    Warn,

    /// A failure.
    Error,
}

impl Level {
    /// Parses a level name case-insensitively.
    ///
    /// Recognizes `debug`, `info`, `warn`, `warning` and `error`. Any other input, including
    /// the empty string, yields [`Level::Info`].
    ///
    /// ```
    /// use log_facade::Level;
    ///
    /// assert_eq!(Level::parse("WARNING"), Level::Warn);
    /// assert_eq!(Level::parse("verbose"), Level::Info);
    /// ```
    pub fn parse(level: &str) -> Self {
        match level.to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "info" => Self::Info,
            "warn" | "warning" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    /// The upper-case name written to the `level` field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

/// Shorthand for [`Level::parse`].
pub fn parse_level(level: &str) -> Level {
    Level::parse(level)
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Level {
    fn from(level: &str) -> Self {
        Self::parse(level)
    }
}

impl From<String> for Level {
    fn from(level: String) -> Self {
        Self::parse(&level)
    }
}

impl From<Level> for tracing::Level {
    fn from(level: Level) -> Self {
        match level {
            Level::Debug => Self::DEBUG,
            Level::Info => Self::INFO,
            Level::Warn => Self::WARN,
            Level::Error => Self::ERROR,
        }
    }
}

impl From<tracing::Level> for Level {
    fn from(level: tracing::Level) -> Self {
        // `TRACE` has no counterpart and is folded into `Debug`.
        if level == tracing::Level::ERROR {
            Self::Error
        } else if level == tracing::Level::WARN {
            Self::Warn
        } else if level == tracing::Level::INFO {
            Self::Info
        } else {
            Self::Debug
        }
    }
}
