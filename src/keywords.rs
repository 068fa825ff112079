//! Keyword mapping table
//!
//! A bidirectional dictionary between localized (Thai) keywords and standard (Python)
//! keywords. Both directions must be one-to-one: round-trip conversion depends on it, so the
//! table refuses to build when a keyword is mapped twice on either side.
//!
//! The built-in table lives in `assets/keywords.json`, is embedded at compile time and parsed
//! once per process. Custom tables use the same shape, in JSON or YAML:
//!
//! ```text
//! { "keywords": [ { "localized": "ถ้า", "standard": "if" }, ... ] }
//! ```

use crate::substitution::is_single_word;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

const BUILTIN_JSON: &str = include_str!("../assets/keywords.json");

static BUILTIN: Lazy<KeywordTable> = Lazy::new(|| {
    KeywordTable::from_json_str(BUILTIN_JSON).expect("built-in keyword table is valid")
});

/// Which way a substitution goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Localized keywords become standard keywords.
    ToStandard,
    /// Standard keywords become localized keywords.
    ToLocalized,
}

/// Error raised while building or loading a keyword table.
#[derive(Debug, thiserror::Error)]
pub enum KeywordError {
    #[error("localized keyword `{0}` is mapped more than once")]
    DuplicateLocalized(String),

    #[error("standard keyword `{0}` is mapped more than once")]
    DuplicateStandard(String),

    #[error("`{0}` is not a single word and could never be substituted")]
    NotAWord(String),

    #[error("failed to read keyword table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid keyword table: {0}")]
    Parse(String),

    #[error("unsupported keyword table format `{0}` (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),
}

/// One row of a keyword table file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub localized: String,
    pub standard: String,
}

#[derive(Debug, Deserialize)]
struct TableFile {
    keywords: Vec<KeywordEntry>,
}

/// Immutable bidirectional keyword mapping.
#[derive(Debug, Clone, Default)]
pub struct KeywordTable {
    to_standard: HashMap<String, String>,
    to_localized: HashMap<String, String>,
}

impl KeywordTable {
    /// The table shipped with the crate.
    pub fn builtin() -> &'static KeywordTable {
        &BUILTIN
    }

    /// Build a table from `(localized, standard)` pairs.
    pub fn from_pairs<I, L, S>(pairs: I) -> Result<Self, KeywordError>
    where
        I: IntoIterator<Item = (L, S)>,
        L: Into<String>,
        S: Into<String>,
    {
        let mut table = KeywordTable::default();
        for (localized, standard) in pairs {
            let (localized, standard) = (localized.into(), standard.into());
            for word in [&localized, &standard] {
                if !is_single_word(word) {
                    return Err(KeywordError::NotAWord(word.clone()));
                }
            }
            if table.to_standard.contains_key(&localized) {
                return Err(KeywordError::DuplicateLocalized(localized));
            }
            if table.to_localized.contains_key(&standard) {
                return Err(KeywordError::DuplicateStandard(standard));
            }
            table
                .to_standard
                .insert(localized.clone(), standard.clone());
            table.to_localized.insert(standard, localized);
        }
        Ok(table)
    }

    pub fn from_entries(entries: Vec<KeywordEntry>) -> Result<Self, KeywordError> {
        Self::from_pairs(entries.into_iter().map(|e| (e.localized, e.standard)))
    }

    pub fn from_json_str(source: &str) -> Result<Self, KeywordError> {
        let file: TableFile =
            serde_json::from_str(source).map_err(|e| KeywordError::Parse(e.to_string()))?;
        Self::from_entries(file.keywords)
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, KeywordError> {
        let file: TableFile =
            serde_yaml::from_str(source).map_err(|e| KeywordError::Parse(e.to_string()))?;
        Self::from_entries(file.keywords)
    }

    /// Load a table file, picking the parser from the file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, KeywordError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let source = std::fs::read_to_string(path).map_err(|source| KeywordError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = match extension.as_str() {
            "json" => Self::from_json_str(&source)?,
            "yaml" | "yml" => Self::from_yaml_str(&source)?,
            other => return Err(KeywordError::UnsupportedFormat(other.to_string())),
        };
        debug!(path = %path.display(), keywords = table.len(), "loaded keyword table");
        Ok(table)
    }

    /// Map `word` in the given direction, if it is a keyword on the source side.
    pub fn lookup(&self, word: &str, direction: Direction) -> Option<&str> {
        let map = match direction {
            Direction::ToStandard => &self.to_standard,
            Direction::ToLocalized => &self.to_localized,
        };
        map.get(word).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.to_standard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_standard.is_empty()
    }

    /// All entries, sorted by standard keyword.
    pub fn entries(&self) -> Vec<KeywordEntry> {
        let mut entries: Vec<_> = self
            .to_standard
            .iter()
            .map(|(localized, standard)| KeywordEntry {
                localized: localized.clone(),
                standard: standard.clone(),
            })
            .collect();
        entries.sort_by(|a, b| a.standard.cmp(&b.standard));
        entries
    }
}
