// Cadastro Forms - address registration form core
// Validates a draft address against a declarative schema and commits valid
// drafts to an append-only collection.

pub mod config;
pub mod controller;
pub mod error;
pub mod field;
pub mod form_view;
pub mod record;
pub mod schema;
pub mod store;
pub mod validator;

pub use cadastro_validation::{Rule, Verdict};

pub use config::{Config, SchemaConfig, UfLength};
pub use controller::{FormController, SubmitSuccess};
pub use error::{FieldValidationFailure, FormError};
pub use field::FieldKey;
pub use form_view::FormView;
pub use record::Record;
pub use schema::{Schema, SchemaBuilder};
pub use store::{MemoryStore, RecordStore};
pub use validator::{evaluate, ValidationErrors, ValidationOutcome};
