//! Localized formatting pipeline
//!
//! Composes the pieces the way an editor integration or CLI uses them: localized source is
//! rewritten to standard keywords, handed to a [`StandardFormatter`], and the result is
//! rewritten back to localized keywords.
//!
//! The built-in [`LineFormatter`] wraps [format](crate::formatter). Other formatters (for
//! example one that shells out to an external tool) implement the same trait; they are the
//! only fallible step.

use crate::error::Result;
use crate::formatter::{format_with, FormatRules};
use crate::keywords::KeywordTable;
use crate::substitution::{to_localized, to_standard};
use tracing::debug;

/// Formats standard-keyword source.
pub trait StandardFormatter: Send + Sync {
    /// The name of this formatter (e.g., "line")
    fn name(&self) -> &str;

    fn format(&self, standard: &str) -> Result<String>;
}

/// The built-in line-oriented formatter.
#[derive(Debug, Clone, Default)]
pub struct LineFormatter {
    rules: FormatRules,
}

impl LineFormatter {
    pub fn new(rules: FormatRules) -> Self {
        LineFormatter { rules }
    }

    pub fn rules(&self) -> &FormatRules {
        &self.rules
    }
}

impl StandardFormatter for LineFormatter {
    fn name(&self) -> &str {
        "line"
    }

    fn format(&self, standard: &str) -> Result<String> {
        Ok(format_with(standard, &self.rules))
    }
}

/// to-standard, format, to-localized.
pub struct Pipeline<'t> {
    table: &'t KeywordTable,
    formatter: Box<dyn StandardFormatter>,
}

impl<'t> Pipeline<'t> {
    /// A pipeline using the line formatter with default rules.
    pub fn new(table: &'t KeywordTable) -> Self {
        Pipeline {
            table,
            formatter: Box::new(LineFormatter::default()),
        }
    }

    pub fn with_formatter<F: StandardFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    pub fn table(&self) -> &KeywordTable {
        self.table
    }

    pub fn to_standard(&self, localized: &str) -> String {
        to_standard(localized, self.table)
    }

    pub fn to_localized(&self, standard: &str) -> String {
        to_localized(standard, self.table)
    }

    /// Format localized source, returning localized source.
    pub fn format_localized(&self, localized: &str) -> Result<String> {
        let standard = self.to_standard(localized);
        debug!(formatter = self.formatter.name(), "formatting standard form");
        let formatted = self.formatter.format(&standard)?;
        Ok(self.to_localized(&formatted))
    }
}
