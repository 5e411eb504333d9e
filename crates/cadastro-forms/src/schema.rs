// File: src/schema.rs
// Purpose: Ordered field -> rules table

use cadastro_validation::Rule;
use serde::Serialize;

use crate::config::{SchemaConfig, UfLength};
use crate::field::FieldKey;

/// Ordered mapping from field to the rules applied to it, in priority order
///
/// Every `FieldKey` has an entry; a field with no rules is always valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    fields: Vec<(FieldKey, Vec<Rule>)>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// The canonical address schema
    pub fn address() -> Self {
        Self::from_config(&SchemaConfig::default())
    }

    pub fn from_config(config: &SchemaConfig) -> Self {
        let numero = if config.numero_required {
            vec![Rule::required("Número obrigatório")]
        } else {
            Vec::new()
        };

        let bound = config.uf_bound;
        let uf_length = match config.uf_length {
            UfLength::Exact => Rule::exact_length(bound, format!("Use {} letras", bound)),
            UfLength::Max => Rule::max_length(bound, format!("Use até {} letras", bound)),
        };

        Self::builder()
            .field(FieldKey::Nome, [Rule::required("Nome obrigatório")])
            .field(
                FieldKey::Email,
                [
                    Rule::required("Email obrigatório"),
                    Rule::email_shape("Email inválido"),
                ],
            )
            .field(FieldKey::Cep, [Rule::required("CEP obrigatório")])
            .field(FieldKey::Rua, [Rule::required("Rua obrigatória")])
            .field(FieldKey::Numero, numero)
            .field(FieldKey::Bairro, [Rule::required("Bairro obrigatório")])
            .field(FieldKey::Cidade, [Rule::required("Cidade obrigatória")])
            .field(FieldKey::Uf, [Rule::required("UF obrigatória"), uf_length])
            .build()
    }

    /// Rules for `field`, empty when the field has none
    pub fn rules(&self, field: FieldKey) -> &[Rule] {
        self.fields
            .iter()
            .find(|(key, _)| *key == field)
            .map(|(_, rules)| rules.as_slice())
            .unwrap_or(&[])
    }

    /// Fields and their rules in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &[Rule])> + '_ {
        self.fields
            .iter()
            .map(|(field, rules)| (*field, rules.as_slice()))
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::address()
    }
}

/// Builds a `Schema`; fields never mentioned get an empty rule list
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<(FieldKey, Vec<Rule>)>,
}

impl SchemaBuilder {
    /// Set the rules for `field`. Re-declaring a field replaces its rules but
    /// keeps its original position.
    pub fn field(mut self, field: FieldKey, rules: impl IntoIterator<Item = Rule>) -> Self {
        let rules: Vec<Rule> = rules.into_iter().collect();
        match self.fields.iter_mut().find(|(key, _)| *key == field) {
            Some((_, existing)) => *existing = rules,
            None => self.fields.push((field, rules)),
        }
        self
    }

    pub fn build(mut self) -> Schema {
        for field in FieldKey::ALL {
            if !self.fields.iter().any(|(key, _)| *key == field) {
                self.fields.push((field, Vec::new()));
            }
        }
        Schema {
            fields: self.fields,
        }
    }
}
