//! Cadastro Validation Core
//!
//! Pure rule primitives for single string fields. Every rule takes the raw
//! field value and answers pass or fail with a human-readable message.
//! Nothing here knows about records or schemas; see `cadastro-forms`.

pub mod email;
pub mod rule;
pub mod string;

// Re-export all validators
pub use email::*;
pub use rule::{Rule, Verdict};
pub use string::*;
