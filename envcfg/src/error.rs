//! Error types for loading configuration from `.env` files and the environment

use std::path::PathBuf;

/// Errors that can occur while binding configuration values into a struct.
///
/// A missing `.env` file is never an error; it simply contributes nothing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The loading target is not a struct.
    ///
    /// Returned before any field is touched.
    #[error("Loading target must be a struct, got {kind}")]
    InvalidTarget {
        /// Kind of value that was passed instead of a struct
        kind: &'static str,
    },

    /// A non-blank, non-comment line has no `=` separator.
    #[error("{source_name}:{line_number}: key and value must be separated by '=': {line}")]
    MalformedLine {
        /// File path, or `<environment>` for the process environment
        source_name: String,
        /// One-based line number within the source
        line_number: usize,
        /// The offending line, trimmed
        line: String,
    },

    /// A value could not be parsed into the field's type.
    #[error("Failed to parse '{key}' value '{value}' as {type_name}: {message}")]
    TypeCoercion {
        /// Binding key of the field
        key: String,
        /// Raw string value from the source
        value: String,
        /// Type the value was parsed as
        type_name: &'static str,
        /// Error message from the parser
        message: String,
    },

    /// A bound field has a type outside the supported set.
    #[error("Field '{key}' has unsupported type {kind}")]
    UnsupportedFieldType {
        /// Binding key of the field
        key: String,
        /// Kind of the field's type (e.g. `vec`, `option`)
        kind: &'static str,
    },

    /// The `.env` file exists but could not be opened or read.
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        /// Path of the file being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The current working directory could not be determined.
    #[error("Failed to determine the current working directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}

impl Error {
    /// Create a coercion error for a value that failed to parse as `T`
    pub(crate) fn coercion<T>(key: &str, value: &str, message: impl std::fmt::Display) -> Self {
        Self::TypeCoercion {
            key: key.to_string(),
            value: value.to_string(),
            type_name: std::any::type_name::<T>(),
            message: message.to_string(),
        }
    }

    pub(crate) fn unsupported(key: &str, kind: &'static str) -> Self {
        Self::UnsupportedFieldType {
            key: key.to_string(),
            kind,
        }
    }
}

/// Result alias with [`Error`] as the error type
pub type Result<T, E = Error> = std::result::Result<T, E>;
