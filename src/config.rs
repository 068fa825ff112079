//! Configuration loader for piyafmt.
//!
//! `defaults/piyafmt.default.toml` is embedded into the binary so that documentation and
//! runtime behavior stay in sync. Front ends layer user files and command-line overrides on
//! top of those defaults via [`Loader`] before deserializing into [`PiyaConfig`].

use crate::error::Result;
use crate::formatter::FormatRules;
use crate::keywords::KeywordTable;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/piyafmt.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PiyaConfig {
    pub formatting: FormatRules,
    #[serde(default)]
    pub keywords: KeywordsConfig,
}

/// Where the keyword table comes from.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeywordsConfig {
    /// A JSON or YAML table replacing the built-in one.
    pub table: Option<PathBuf>,
}

impl PiyaConfig {
    /// The configured keyword table, or the built-in one.
    pub fn keyword_table(&self) -> Result<Cow<'static, KeywordTable>> {
        match &self.keywords.table {
            Some(path) => Ok(Cow::Owned(KeywordTable::from_path(path)?)),
            None => Ok(Cow::Borrowed(KeywordTable::builtin())),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<PiyaConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<PiyaConfig, ConfigError> {
    Loader::new().build()
}
