// File: src/controller.rs
// Purpose: Draft/errors/collection state machine behind the address form

use tracing::{debug, info};

use crate::config::Config;
use crate::error::FormError;
use crate::field::FieldKey;
use crate::form_view::FormView;
use crate::record::Record;
use crate::schema::Schema;
use crate::store::{MemoryStore, RecordStore};
use crate::validator::{evaluate, ValidationErrors, ValidationOutcome};

/// Result of a successful submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitSuccess {
    /// The snapshot that was committed
    pub record: Record,
    /// Position of the snapshot in the collection
    pub index: usize,
}

/// Owns one form's draft, its last validation errors and its collection
///
/// Validation only happens on `submit`. A failed submit keeps the draft so
/// the user does not retype; a successful one commits a copy and starts a
/// fresh draft. Independent controllers share nothing.
#[derive(Debug, Clone)]
pub struct FormController<S = MemoryStore> {
    schema: Schema,
    draft: Record,
    errors: ValidationErrors,
    store: S,
}

impl FormController<MemoryStore> {
    pub fn new(schema: Schema) -> Self {
        Self::with_store(schema, MemoryStore::new())
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Schema::from_config(&config.schema))
    }
}

impl Default for FormController<MemoryStore> {
    fn default() -> Self {
        Self::new(Schema::address())
    }
}

impl<S: RecordStore> FormController<S> {
    pub fn with_store(schema: Schema, store: S) -> Self {
        Self {
            schema,
            draft: Record::empty(),
            errors: ValidationErrors::new(),
            store,
        }
    }

    /// Replace one draft value. Does not validate.
    pub fn set_field_value(&mut self, field: FieldKey, value: impl Into<String>) {
        debug!(field = %field, "draft field updated");
        self.draft.set(field, value);
    }

    /// Same as `set_field_value`, keyed by the field's wire name
    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field: FieldKey = name.parse()?;
        self.set_field_value(field, value);
        Ok(())
    }

    /// Validate the draft and commit it when every field passes
    ///
    /// On failure nothing but the stored errors changes.
    pub fn submit(&mut self) -> Result<SubmitSuccess, ValidationErrors> {
        match evaluate(&self.schema, &self.draft) {
            ValidationOutcome::Valid => {
                let record = std::mem::take(&mut self.draft);
                self.errors = ValidationErrors::new();
                self.store.append(record.clone());

                let index = self.store.len() - 1;
                info!(index, total = self.store.len(), store = self.store.name(), "record committed");
                Ok(SubmitSuccess { record, index })
            }
            ValidationOutcome::Invalid(errors) => {
                let fields: Vec<&str> = errors.fields().map(FieldKey::as_str).collect();
                debug!(?fields, "submit rejected");
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Discard the draft and any errors. The collection is untouched.
    pub fn reset(&mut self) {
        debug!("draft reset");
        self.draft = Record::empty();
        self.errors = ValidationErrors::new();
    }

    pub fn draft(&self) -> &Record {
        &self.draft
    }

    /// Errors from the last rejected submit, empty otherwise
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error_for(&self, field: FieldKey) -> Option<&str> {
        self.errors.get(field)
    }

    /// Committed records in insertion order
    pub fn records(&self) -> &[Record] {
        self.store.all()
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view(&self) -> FormView {
        FormView::new(self.draft.clone(), self.errors.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_valid(form: &mut FormController) {
        for (field, value) in [
            (FieldKey::Nome, "Ana"),
            (FieldKey::Email, "a@b.com"),
            (FieldKey::Cep, "12345"),
            (FieldKey::Rua, "Rua X"),
            (FieldKey::Numero, "10"),
            (FieldKey::Bairro, "Centro"),
            (FieldKey::Cidade, "Recife"),
            (FieldKey::Uf, "PE"),
        ] {
            form.set_field_value(field, value);
        }
    }

    #[test]
    fn test_new_controller_is_blank() {
        let form = FormController::default();
        assert!(form.draft().is_empty());
        assert!(form.errors().is_empty());
        assert!(form.records().is_empty());
    }

    #[test]
    fn test_set_field_does_not_validate() {
        let mut form = FormController::default();
        form.set_field_value(FieldKey::Email, "nope");
        assert!(form.errors().is_empty());
        assert_eq!(form.draft().email, "nope");
    }

    #[test]
    fn test_set_field_by_name() {
        let mut form = FormController::default();
        form.set_field_by_name("cidade", "Recife").unwrap();
        assert_eq!(form.draft().cidade, "Recife");

        let err = form.set_field_by_name("pais", "BR").unwrap_err();
        assert_eq!(err, FormError::UnknownField("pais".to_string()));
        assert_eq!(form.draft().cidade, "Recife");
    }

    #[test]
    fn test_submit_valid_commits_and_clears() {
        let mut form = FormController::default();
        fill_valid(&mut form);
        let expected = form.draft().clone();

        let success = form.submit().unwrap();
        assert_eq!(success.index, 0);
        assert_eq!(success.record, expected);
        assert!(form.draft().is_empty());
        assert_eq!(form.records(), &[expected]);
    }

    #[test]
    fn test_submit_invalid_keeps_draft() {
        let mut form = FormController::default();
        fill_valid(&mut form);
        form.set_field_value(FieldKey::Uf, "PER");
        let before = form.draft().clone();

        let errors = form.submit().unwrap_err();
        assert_eq!(errors.get(FieldKey::Uf), Some("Use 2 letras"));
        assert_eq!(form.error_for(FieldKey::Uf), Some("Use 2 letras"));
        assert_eq!(form.draft(), &before);
        assert!(form.records().is_empty());
    }

    #[test]
    fn test_successful_submit_clears_previous_errors() {
        let mut form = FormController::default();
        assert!(form.submit().is_err());
        assert_eq!(form.errors().len(), 8);

        fill_valid(&mut form);
        form.submit().unwrap();
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_reset_clears_draft_and_errors_only() {
        let mut form = FormController::default();
        fill_valid(&mut form);
        form.submit().unwrap();

        form.set_field_value(FieldKey::Nome, "Bia");
        assert!(form.submit().is_err());

        form.reset();
        assert!(form.draft().is_empty());
        assert!(form.errors().is_empty());
        assert_eq!(form.records().len(), 1);
    }

    #[test]
    fn test_committed_record_is_a_snapshot() {
        let mut form = FormController::default();
        fill_valid(&mut form);
        form.submit().unwrap();

        form.set_field_value(FieldKey::Nome, "Outra");
        assert_eq!(form.records()[0].nome, "Ana");
    }

    #[test]
    fn test_view_reflects_state() {
        let mut form = FormController::default();
        form.set_field_value(FieldKey::Email, "x");
        let _ = form.submit();

        let view = form.view();
        assert_eq!(view.get_value(FieldKey::Email), "x");
        assert_eq!(view.get_error(FieldKey::Email), Some("Email inválido"));
        assert_eq!(view.get_error(FieldKey::Nome), Some("Nome obrigatório"));
    }

    #[test]
    fn test_from_config_relaxed_numero() {
        let mut config = Config::default();
        config.schema.numero_required = false;
        let mut form = FormController::from_config(&config);

        fill_valid(&mut form);
        form.set_field_value(FieldKey::Numero, "");
        assert!(form.submit().is_ok());
        assert_eq!(form.records()[0].numero, "");
    }
}
