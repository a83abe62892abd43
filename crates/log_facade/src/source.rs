//! Call-site locations attached to records as the `source` field.

use std::{fmt, panic::Location, path::Path};

/// The file and line a record was emitted from.
///
/// Displays as `<parent-directory>/<file-name>:<line>`, keeping only the last two path
/// segments. A path without a parent directory displays as `<file-name>:<line>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallSite {
    file: &'static str,
    line: u32,
}

impl CallSite {
    /// Creates a call site from a file path and line number.
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Resolves the location of the caller.
    ///
    /// Through a chain of `#[track_caller]` functions this is the first frame outside the
    /// chain.
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    /// Builds a call site from [`tracing`] metadata, if it carries both a file and a line.
    pub fn from_metadata(metadata: &tracing::Metadata<'static>) -> Option<Self> {
        Some(Self::new(metadata.file()?, metadata.line()?))
    }

    /// The full file path, as recorded by the compiler.
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// The line number.
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = Path::new(self.file);
        let file_name = path.file_name().unwrap_or(path.as_os_str());
        let parent = path
            .parent()
            .and_then(Path::file_name)
            .map(|dir| dir.to_string_lossy());

        match parent {
            Some(dir) => write!(
                f,
                "{dir}/{}:{}",
                file_name.to_string_lossy(),
                self.line
            ),
            None => write!(f, "{}:{}", file_name.to_string_lossy(), self.line),
        }
    }
}
