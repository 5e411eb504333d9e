// File: src/form_view.rs
// Purpose: Read-only snapshot of form state for templates

use serde::Serialize;

use crate::field::FieldKey;
use crate::record::Record;
use crate::validator::ValidationErrors;

/// Draft values plus validation errors, as the presentation layer renders
/// them next to each input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormView {
    /// Current draft values
    pub values: Record,
    /// Field keys to error messages, failing fields only
    pub errors: ValidationErrors,
}

impl FormView {
    pub fn new(values: Record, errors: ValidationErrors) -> Self {
        Self { values, errors }
    }

    /// Check if field has an error
    pub fn has_error(&self, field: FieldKey) -> bool {
        self.errors.contains(field)
    }

    pub fn get_error(&self, field: FieldKey) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn get_value(&self, field: FieldKey) -> &str {
        self.values.get(field)
    }
}
