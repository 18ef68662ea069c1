//! Error types for dashpatch.
//!
//! Library crates use [`DashpatchError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all dashpatch operations.
#[derive(Debug, thiserror::Error)]
pub enum DashpatchError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Target file is not valid UTF-8.
    #[error("{path:?} is not valid UTF-8")]
    Encoding { path: PathBuf },

    /// A removal pattern failed to compile.
    #[error("invalid pattern for step `{step}`: {message}")]
    Pattern { step: String, message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, DashpatchError>;

impl DashpatchError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a pattern error for the named step.
    pub fn pattern(step: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Pattern {
            step: step.into(),
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    ///
    /// `InvalidData` from `read_to_string` means the bytes were not UTF-8,
    /// so it is reported as [`DashpatchError::Encoding`] instead.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::InvalidData {
            return Self::Encoding { path };
        }
        Self::Io { path, source }
    }
}
