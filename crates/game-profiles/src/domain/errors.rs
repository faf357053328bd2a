//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Upstream unreachable: {0}")]
    Unreachable(String),

    #[error("Upstream entity not found: {0}")]
    UpstreamNotFound(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl DomainError {
    pub fn invalid_input<T: Into<String>>(message: T) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn not_found<T: AsRef<str>>(entity_type: T, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }
}
