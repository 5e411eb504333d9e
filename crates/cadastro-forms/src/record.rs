// File: src/record.rs
// Purpose: Address record with one string slot per field

use serde::{Deserialize, Serialize};

use crate::field::FieldKey;

/// An address as entered in the form
///
/// Every field is always present; the empty string is the untouched state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    pub nome: String,
    pub email: String,
    pub cep: String,
    pub rua: String,
    pub numero: String,
    pub bairro: String,
    pub cidade: String,
    pub uf: String,
}

impl Record {
    /// All-empty record
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a record from `(field, value)` pairs; unlisted fields stay empty
    pub fn from_pairs<I, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (FieldKey, V)>,
        V: Into<String>,
    {
        let mut record = Self::empty();
        for (field, value) in pairs {
            record.set(field, value);
        }
        record
    }

    pub fn get(&self, field: FieldKey) -> &str {
        match field {
            FieldKey::Nome => &self.nome,
            FieldKey::Email => &self.email,
            FieldKey::Cep => &self.cep,
            FieldKey::Rua => &self.rua,
            FieldKey::Numero => &self.numero,
            FieldKey::Bairro => &self.bairro,
            FieldKey::Cidade => &self.cidade,
            FieldKey::Uf => &self.uf,
        }
    }

    /// Replace the value of `field`
    pub fn set(&mut self, field: FieldKey, value: impl Into<String>) {
        let slot = match field {
            FieldKey::Nome => &mut self.nome,
            FieldKey::Email => &mut self.email,
            FieldKey::Cep => &mut self.cep,
            FieldKey::Rua => &mut self.rua,
            FieldKey::Numero => &mut self.numero,
            FieldKey::Bairro => &mut self.bairro,
            FieldKey::Cidade => &mut self.cidade,
            FieldKey::Uf => &mut self.uf,
        };
        *slot = value.into();
    }

    /// True when every field is the empty string
    pub fn is_empty(&self) -> bool {
        FieldKey::ALL.into_iter().all(|field| self.get(field).is_empty())
    }

    /// `(field, value)` pairs in field order
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> + '_ {
        FieldKey::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// One-line street address as shown in the list of registered addresses
    pub fn summary(&self) -> String {
        format!(
            "{}, {} – {}, {}/{}",
            self.rua, self.numero, self.bairro, self.cidade, self.uf
        )
    }
}
