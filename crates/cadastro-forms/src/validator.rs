// File: src/validator.rs
// Purpose: Evaluate a record against a schema

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::FieldValidationFailure;
use crate::field::FieldKey;
use crate::record::Record;
use crate::schema::Schema;

/// Failing fields and the message of each one's first failing rule
///
/// Iterates in the schema's field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: Vec<(FieldKey, String)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field`; a field keeps its first message
    pub fn insert(&mut self, field: FieldKey, message: impl Into<String>) {
        if !self.contains(field) {
            self.entries.push((field, message.into()));
        }
    }

    pub fn get(&self, field: FieldKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn contains(&self, field: FieldKey) -> bool {
        self.get(field).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.entries.iter().map(|(field, _)| *field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> + '_ {
        self.entries
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }

    pub fn failures(&self) -> impl Iterator<Item = FieldValidationFailure> + '_ {
        self.iter()
            .map(|(field, message)| FieldValidationFailure::new(field, message))
    }
}

impl FromIterator<(FieldKey, String)> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = (FieldKey, String)>>(iter: I) -> Self {
        let mut errors = Self::new();
        for (field, message) in iter {
            errors.insert(field, message);
        }
        errors
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, message) in &self.entries {
            map.serialize_entry(field.as_str(), message)?;
        }
        map.end()
    }
}

/// Aggregate result of validating a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(ValidationErrors),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// Errors of an invalid outcome, `None` when valid
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(errors) => Some(errors),
        }
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        match self {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::Invalid(errors) => Err(errors),
        }
    }
}

impl From<ValidationErrors> for ValidationOutcome {
    fn from(errors: ValidationErrors) -> Self {
        if errors.is_empty() {
            ValidationOutcome::Valid
        } else {
            ValidationOutcome::Invalid(errors)
        }
    }
}

/// Validate every field of `record` in schema order
///
/// Rules run in order and stop at the first failure for each field, so each
/// failing field reports exactly one message.
pub fn evaluate(schema: &Schema, record: &Record) -> ValidationOutcome {
    let mut errors = ValidationErrors::new();

    for (field, rules) in schema.iter() {
        let value = record.get(field);
        if let Some(message) = rules.iter().find_map(|rule| rule.check(value).into_result().err()) {
            errors.insert(field, message);
        }
    }

    errors.into()
}
