//! Error types for validator-side parsing.

use thiserror::Error;

/// Structural failures that abort a validation pass with no partial output.
///
/// Field-level failures are never represented here; they accumulate in the
/// report and are returned as data.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// The serialized form is not well-formed.
    #[error("malformed document: {message}")]
    Malformed { message: String },

    /// The root element is neither the container nor a record.
    #[error("unexpected root element: {name}")]
    UnexpectedRoot { name: String },

    /// The container holds a non-record child element.
    #[error("unexpected element in container: {name}")]
    UnexpectedElement { name: String },

    /// The container holds no records.
    #[error("empty container")]
    EmptyContainer,
}

/// Result type alias for validator operations.
pub type Result<T> = std::result::Result<T, ValidateError>;

impl ValidateError {
    /// Create a Malformed error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Create an UnexpectedRoot error.
    pub fn unexpected_root(name: impl Into<String>) -> Self {
        Self::UnexpectedRoot { name: name.into() }
    }

    /// Create an UnexpectedElement error.
    pub fn unexpected_element(name: impl Into<String>) -> Self {
        Self::UnexpectedElement { name: name.into() }
    }
}
