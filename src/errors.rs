//! Shared error types for blastmap.
//!
//! Only failures that abort an operation live here. Dangling references
//! inside a loaded report are never errors; the index resolves them to
//! fallback strings instead.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for blastmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// The report bytes did not match the expected container shape
    #[error("Failed to decode report{}: {source}", display_path(.path))]
    Decode {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    /// File system related errors
    #[error("File system error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A query was issued before any report was loaded
    #[error("No report loaded")]
    NoSnapshot,

    /// Rule id absent from the loaded rule table
    #[error("Unknown keep rule id {0}")]
    UnknownRule(u32),

    /// Filename absent from the file aggregates
    #[error("Unknown origin file '{0}'")]
    UnknownFile(String),

    /// JSON encoding errors on the output side
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" {}", path.display()),
        None => String::new(),
    }
}

impl Error {
    /// Create a decode error without a source path
    pub fn decode(source: serde_json::Error) -> Self {
        Self::Decode { path: None, source }
    }

    /// Attach the path the failing bytes came from
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Decode { source, .. } => Self::Decode {
                path: Some(path.into()),
                source,
            },
            other => other,
        }
    }

    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error came from malformed input rather than the environment
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<u32>("not a number").unwrap_err()
    }

    #[test]
    fn test_decode_message_without_path() {
        let err = Error::decode(json_error());
        assert!(err.to_string().starts_with("Failed to decode report: "));
        assert!(err.is_decode_failure());
    }

    #[test]
    fn test_decode_message_with_path() {
        let err = Error::decode(json_error()).with_path("out/app-blastradius.json");
        assert!(err
            .to_string()
            .starts_with("Failed to decode report out/app-blastradius.json: "));
    }

    #[test]
    fn test_with_path_leaves_other_variants_untouched() {
        let err = Error::UnknownRule(7).with_path("ignored");
        assert_eq!(err.to_string(), "Unknown keep rule id 7");
        assert!(!err.is_decode_failure());
    }
}
