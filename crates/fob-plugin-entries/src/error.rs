//! Error types for entry discovery and options loading.

use miette::Diagnostic;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EntriesError>;

/// Errors produced by the entries plugin
#[derive(Debug, Error, Diagnostic)]
pub enum EntriesError {
    /// The entry directory could not be listed
    #[error("failed to read entry directory {}: {source}", path.display())]
    #[diagnostic(
        code(fob::entries::read_entry_dir),
        help("Check that `entryDir` names an existing, readable directory under `rootDir`")
    )]
    ReadEntryDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A relative root directory needs the current working directory
    #[error("failed to determine current directory: {0}")]
    #[diagnostic(code(fob::entries::current_dir))]
    CurrentDir(#[source] io::Error),

    // Options loading errors
    #[error("invalid entries options: {message}")]
    #[diagnostic(code(fob::entries::invalid_options))]
    InvalidOptions { message: String },

    #[error("invalid TOML in {origin}: {message}")]
    #[diagnostic(code(fob::entries::toml))]
    Toml { origin: String, message: String },

    #[error("I/O error: {0}")]
    #[diagnostic(code(fob::entries::io))]
    Io(#[from] io::Error),
}

impl EntriesError {
    pub(crate) fn read_entry_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadEntryDir {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions {
            message: message.into(),
        }
    }

    /// Kind of the underlying filesystem error, if this error came from the filesystem.
    ///
    /// For a failed entry scan this is `NotFound`, `NotADirectory` or
    /// `PermissionDenied` in the common cases.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::ReadEntryDir { source, .. } | Self::CurrentDir(source) | Self::Io(source) => {
                Some(source.kind())
            }
            Self::InvalidOptions { .. } | Self::Toml { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_kind_is_preserved_for_scan_failures() {
        let err = EntriesError::read_entry_dir(
            "src/entries",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
        assert!(err.to_string().contains("src/entries"));
    }

    #[test]
    fn options_errors_have_no_io_kind() {
        let err = EntriesError::invalid_options("missing field `entryDir`");
        assert_eq!(err.io_kind(), None);
    }
}
