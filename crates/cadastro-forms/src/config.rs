// File: src/config.rs
// Purpose: Configuration parsing from cadastro.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Form configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub schema: SchemaConfig,
}

/// How the `uf` bound is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UfLength {
    /// `uf` must have exactly `uf_bound` chars
    #[default]
    Exact,
    /// `uf` may have at most `uf_bound` chars
    Max,
}

/// Knobs for the address schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaConfig {
    #[serde(default)]
    pub uf_length: UfLength,

    #[serde(default = "default_uf_bound")]
    pub uf_bound: usize,

    /// When false, `numero` has no rules and is always valid
    #[serde(default = "default_true")]
    pub numero_required: bool,
}

fn default_uf_bound() -> usize {
    2
}

fn default_true() -> bool {
    true
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            uf_length: UfLength::Exact,
            uf_bound: default_uf_bound(),
            numero_required: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./cadastro.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("cadastro.toml")
    }
}
