//! Error types for solidkit
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::DimensionIssue;

/// Result type alias for solidkit operations
pub type SolidResult<T> = Result<T, SolidError>;

/// Main error type for solidkit operations
#[derive(Error, Debug)]
pub enum SolidError {
    /// A dimension failed validation at construction time.
    ///
    /// This is the only way building a shape (or a vehicle) can fail;
    /// no partially built value is ever produced.
    #[error("invalid dimension for {subject}: {reason}")]
    InvalidDimension {
        subject: String,
        reason: DimensionIssue,
    },

    /// Descriptor names a shape that does not exist
    #[error("unknown shape '{tag}' (expected rectangle, square or circle)")]
    UnknownShape { tag: String },

    /// Descriptor parameter is not a number
    #[error("malformed number '{value}'")]
    MalformedNumber { value: String },

    /// Descriptor line had a tag separator but no tag
    #[error("empty shape descriptor on line {line}")]
    EmptyDescriptor { line: usize },

    /// Invalid argument passed to one of the non-shape demos
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SolidError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
