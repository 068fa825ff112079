//! Errors for the fallible surface of the crate.
//!
//! Scanning, substitution and line formatting are total and never produce these. Errors
//! come from loading keyword tables and configuration, from file I/O in front ends, and from
//! pluggable formatters.

use crate::keywords::KeywordError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Keywords(#[from] KeywordError),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("formatter `{name}` failed: {message}")]
    Formatter { name: String, message: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
