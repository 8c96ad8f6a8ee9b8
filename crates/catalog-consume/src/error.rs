//! Error types for consumer-side parsing.
//!
//! Deliberately a separate taxonomy from the validator's: the two components
//! never share error state, they only read the same bytes.

use thiserror::Error;

/// Structural failures that are fatal to the whole batch.
#[derive(Debug, Error)]
pub enum ConsumeError {
    /// The forwarded payload is not well-formed.
    #[error("malformed payload: {message}")]
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

/// Result type alias for consumer operations.
pub type Result<T> = std::result::Result<T, ConsumeError>;

impl ConsumeError {
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
