// File: src/field.rs
// Purpose: The fixed set of address field keys

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Stable key of one address field
///
/// Variant order is the form's display order; `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKey {
    Nome,
    Email,
    Cep,
    Rua,
    Numero,
    Bairro,
    Cidade,
    Uf,
}

impl FieldKey {
    pub const ALL: [FieldKey; 8] = [
        FieldKey::Nome,
        FieldKey::Email,
        FieldKey::Cep,
        FieldKey::Rua,
        FieldKey::Numero,
        FieldKey::Bairro,
        FieldKey::Cidade,
        FieldKey::Uf,
    ];

    /// Wire name used by the presentation layer (`nome`, `email`, ...)
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::Nome => "nome",
            FieldKey::Email => "email",
            FieldKey::Cep => "cep",
            FieldKey::Rua => "rua",
            FieldKey::Numero => "numero",
            FieldKey::Bairro => "bairro",
            FieldKey::Cidade => "cidade",
            FieldKey::Uf => "uf",
        }
    }

    /// Label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            FieldKey::Nome => "Nome",
            FieldKey::Email => "Email",
            FieldKey::Cep => "CEP",
            FieldKey::Rua => "Rua",
            FieldKey::Numero => "Número",
            FieldKey::Bairro => "Bairro",
            FieldKey::Cidade => "Cidade",
            FieldKey::Uf => "UF",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_keys() {
        for key in FieldKey::ALL {
            assert_eq!(key.as_str().parse::<FieldKey>(), Ok(key));
        }
    }

    #[test]
    fn test_parse_unknown_key() {
        assert_eq!(
            "telefone".parse::<FieldKey>(),
            Err(FormError::UnknownField("telefone".to_string()))
        );
        // Case-sensitive, like the form's `name` attributes
        assert!("UF".parse::<FieldKey>().is_err());
    }

    #[test]
    fn test_order_matches_declaration() {
        let mut keys = FieldKey::ALL.to_vec();
        keys.reverse();
        keys.sort();
        assert_eq!(keys, FieldKey::ALL.to_vec());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&FieldKey::Numero).unwrap(), "\"numero\"");
        assert_eq!(FieldKey::Numero.label(), "Número");
    }
}
