//! Error types for the plex sorter.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the plex sorter.
#[derive(Error, Debug)]
pub enum Error {
    // Filename errors
    #[error("Unable to find a season/episode marker in: {0}")]
    NotFound(String),

    #[error("No show directory matches: {0}")]
    NoMatch(String),

    #[error("Source path has no file name: {0}")]
    InvalidSourcePath(String),

    // File system errors
    #[error("Target library unreachable: {path}: {source}")]
    TargetUnreachable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to {op} {path}: {source}")]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Catalog errors
    #[error("Plex token not configured. Pass --token or set PLEX_TOKEN")]
    PlexTokenMissing,

    #[error("Section not found: {0}")]
    SectionNotFound(String),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // XML errors
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::DeError),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Wrap an IO error with the operation and path it failed on.
    pub fn io(op: &'static str, path: &Path, source: std::io::Error) -> Self {
        Error::Io {
            op,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Whether the error means no item in the run can succeed.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::TargetUnreachable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_unreachable_target_is_fatal() {
        let unreachable = Error::TargetUnreachable {
            path: PathBuf::from("/tv"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(unreachable.is_fatal());
        assert!(!Error::NoMatch("x".to_string()).is_fatal());
        assert!(!Error::io(
            "move",
            Path::new("/a"),
            std::io::Error::from(std::io::ErrorKind::PermissionDenied)
        )
        .is_fatal());
    }

    #[test]
    fn test_io_error_message_has_context() {
        let err = Error::io(
            "create directory",
            Path::new("/tv/Show/Season 1"),
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        let msg = err.to_string();
        assert!(msg.contains("create directory"));
        assert!(msg.contains("/tv/Show/Season 1"));
    }
}
