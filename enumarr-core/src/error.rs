//! Typed error handling for enumarr.
//!
//! Provides structured errors that library consumers can match on,
//! with full context about what went wrong and where.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for enumarr operations.
///
/// This provides typed errors that library consumers can match on,
/// unlike opaque `anyhow::Error` types.
#[derive(Error, Debug)]
pub enum EnumarrError {
    /// I/O error when reading source files or writing generated output
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Syntax error when parsing Go source
    #[error("Parse error in {path}: {message}")]
    Syntax {
        path: PathBuf,
        message: String,
        /// Line number (1-indexed) if available
        line: Option<usize>,
        /// Column number (1-indexed) if available
        column: Option<usize>,
    },

    /// Two input files declared different packages
    #[error("Package mismatch in {path}: expected {expected}, found {found}")]
    PackageMismatch {
        path: PathBuf,
        expected: String,
        found: String,
    },

    /// Invalid configuration provided by the invoking layer
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl EnumarrError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a syntax error with line/column info.
    pub fn syntax_at(
        path: impl Into<PathBuf>,
        message: impl Into<String>,
        line: usize,
        column: usize,
    ) -> Self {
        Self::Syntax {
            path: path.into(),
            message: message.into(),
            line: Some(line),
            column: Some(column),
        }
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Syntax { path, .. } => Some(path),
            Self::PackageMismatch { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Convenience type alias for enumarr results.
pub type EnumarrResult<T> = Result<T, EnumarrError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> EnumarrResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> EnumarrResult<T> {
        self.map_err(|e| EnumarrError::io(path, e))
    }
}
