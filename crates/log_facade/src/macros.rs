//! Macro front-ends for the global leveled functions.
//!
//! The key/value macros take a message followed by `key => value` pairs; values only need to
//! implement [`Display`](std::fmt::Display). The `f`-suffixed macros take `format!` arguments.
//! Both forms are evaluated lazily: nothing is formatted unless the record is emitted.

/// Logs at [`Level::Debug`](crate::Level::Debug) with optional `key => value` attributes.
///
/// ```
/// log_facade::debug!("cache miss", "key" => "user:42", "attempt" => 2);
/// ```
#[macro_export]
macro_rules! debug {
    ($msg:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::debug($msg, &[$($crate::Attr::new($key, &$value)),*])
    };
}

/// Logs at [`Level::Info`](crate::Level::Info) with optional `key => value` attributes.
#[macro_export]
macro_rules! info {
    ($msg:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::info($msg, &[$($crate::Attr::new($key, &$value)),*])
    };
}

/// Logs at [`Level::Warn`](crate::Level::Warn) with optional `key => value` attributes.
#[macro_export]
macro_rules! warn {
    ($msg:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::warn($msg, &[$($crate::Attr::new($key, &$value)),*])
    };
}

/// Logs at [`Level::Error`](crate::Level::Error) with optional `key => value` attributes.
#[macro_export]
macro_rules! error {
    ($msg:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::error($msg, &[$($crate::Attr::new($key, &$value)),*])
    };
}

/// Logs a formatted message at [`Level::Debug`](crate::Level::Debug).
///
/// ```
/// log_facade::debugf!("hello {}", "world");
/// ```
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::debugf(::std::format_args!($($arg)+))
    };
}

/// Logs a formatted message at [`Level::Info`](crate::Level::Info).
#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::infof(::std::format_args!($($arg)+))
    };
}

/// Logs a formatted message at [`Level::Warn`](crate::Level::Warn).
#[macro_export]
macro_rules! warnf {
    ($($arg:tt)+) => {
        $crate::warnf(::std::format_args!($($arg)+))
    };
}

/// Logs a formatted message at [`Level::Error`](crate::Level::Error).
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::errorf(::std::format_args!($($arg)+))
    };
}
