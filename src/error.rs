use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain a reading from one of the kernel's counter sources.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed data in {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("Unexpected table layout in {}: {reason}", path.display())]
    Layout { path: PathBuf, reason: String },

    #[error("No {what} found")]
    NotFound { what: String },
}

impl ReadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ReadError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ReadError::Parse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn layout(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ReadError::Layout {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn not_found(what: impl Into<String>) -> Self {
        ReadError::NotFound { what: what.into() }
    }
}
