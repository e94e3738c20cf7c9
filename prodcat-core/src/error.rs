/// Structured error types for prodcat-core.
///
/// Uses `thiserror` for better API surface and error composition.
/// The binary crate (prodcat-tui) can still use `anyhow` for convenience,
/// but library consumers get structured, composable errors.
///
/// Only catalog loading can fail. Lookups and filtering never error:
/// a missing association degrades to `None` and an unknown filter id
/// degrades to zero rows.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for prodcat-core operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// JSON parsing or serialization failed
    #[error("JSON error at {context}: {source}")]
    Json {
        context: String,
        source: serde_json::Error,
    },

    /// File or directory not found
    #[error("Path not found: {path:?}")]
    PathNotFound { path: PathBuf },
}

/// Result type alias for prodcat-core operations
pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    /// Create a JSON error with context
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    /// Create a path not found error
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::PathNotFound { path: path.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CatalogError::json("catalog fixture", bad_json);
        assert!(err.to_string().contains("catalog fixture"));

        let err = CatalogError::path_not_found("/tmp/missing.json");
        assert!(err.to_string().contains("/tmp/missing.json"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: CatalogError = io_err.into();

        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
