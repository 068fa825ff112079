//! Keyword substitution engine
//!
//! Rewrites keywords in one direction of a [`KeywordTable`], touching code spans only.
//!
//! The input is scanned first (see [scanner](crate::scanner)); string, comment, docstring
//! and newline spans pass through untouched. Each code span is split by a small logos lexer
//! into whitespace, single punctuation characters and words. A word is replaced only when
//! it is exactly a keyword of the source side of the table, so identifiers that merely
//! contain a keyword (`ถ้าx`, `iffy`, `obj.print`) are never clobbered. Separators are kept
//! verbatim, which is what makes the conversion round-trip.

use crate::keywords::{Direction, KeywordTable};
use crate::scanner::{Scanner, SpanKind};
use logos::Logos;

/// Pieces of a code span, as far as substitution is concerned.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordToken {
    #[regex(r"\s+")]
    Whitespace,

    #[regex(r"[()\[\]{}:,;=+\-*/%<>!&|^~@]")]
    Punctuation,

    // Anything else, except quotes and `#` which the scanner never leaves in code
    #[regex(r##"[^\s()\[\]{}:,;=+\-*/%<>!&|^~@"'#]+"##)]
    Word,
}

/// True if `text` lexes as exactly one word.
pub fn is_single_word(text: &str) -> bool {
    let mut lexer = WordToken::lexer(text);
    matches!(lexer.next(), Some(Ok(WordToken::Word))) && lexer.next().is_none()
}

/// Rewrite keywords in `source` in the given direction.
pub fn substitute(source: &str, table: &KeywordTable, direction: Direction) -> String {
    let mut out = String::with_capacity(source.len());
    for span in Scanner::new(source) {
        match span.kind {
            SpanKind::Code => substitute_code(span.text, table, direction, &mut out),
            _ => out.push_str(span.text),
        }
    }
    out
}

/// Localized keywords to standard keywords.
pub fn to_standard(source: &str, table: &KeywordTable) -> String {
    substitute(source, table, Direction::ToStandard)
}

/// Standard keywords to localized keywords.
pub fn to_localized(source: &str, table: &KeywordTable) -> String {
    substitute(source, table, Direction::ToLocalized)
}

fn substitute_code(code: &str, table: &KeywordTable, direction: Direction, out: &mut String) {
    let mut lexer = WordToken::lexer(code);
    while let Some(token) = lexer.next() {
        let text = lexer.slice();
        match token {
            Ok(WordToken::Word) => out.push_str(table.lookup(text, direction).unwrap_or(text)),
            _ => out.push_str(text),
        }
    }
}
