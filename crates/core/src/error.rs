//! Errors raised while reading backend data into the point of sale model.

use thiserror::Error;

/// Failure decoding a backend value: a selection code or identifier that the
/// receipt crates cannot interpret.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A code outside its selection (e.g. an unknown document type).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier that does not parse as a record id.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
