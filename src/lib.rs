//! # piyathon-fmt
//!
//! Keyword translation and formatting for Python sources written with Thai keywords.
//!
//! The crate rewrites localized (Thai) keywords to standard (English) Python keywords and
//! back, touching code only: strings, comments and docstrings are carried through byte for
//! byte. A line-oriented formatter normalizes indentation and spacing of the standard form.
//!
//! ```text
//! localized ──scan──> spans ──to_standard──> standard ──format──> standard ──to_localized──> localized
//! ```
//!
//! - [scanner]: lossless partition of source into code/string/comment/docstring/newline spans.
//! - [substitution]: whole-word keyword rewriting over code spans.
//! - [keywords]: the bidirectional keyword table.
//! - [formatter]: the line formatter.
//! - [pipeline]: the composition used by front ends, with a pluggable formatter.
//! - [config]: layered configuration for front ends.

pub mod config;
pub mod error;
pub mod formatter;
pub mod keywords;
pub mod pipeline;
pub mod scanner;
pub mod substitution;

pub use error::{Error, Result};
pub use formatter::{format, format_with, FormatRules};
pub use keywords::{Direction, KeywordError, KeywordTable};
pub use pipeline::{LineFormatter, Pipeline, StandardFormatter};
pub use scanner::{scan, Scanner, Span, SpanKind};
pub use substitution::{substitute, to_localized, to_standard};
