// File: src/error.rs
// Purpose: Error types for the form core

use thiserror::Error;

use crate::field::FieldKey;

/// Errors raised at the string-keyed boundary of the form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),
}

/// A single field that failed validation, with the message of its first
/// failing rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldValidationFailure {
    pub field: FieldKey,
    pub message: String,
}

impl FieldValidationFailure {
    pub fn new(field: FieldKey, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
