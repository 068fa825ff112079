//! Line formatter
//!
//!     Re-emits standard-keyword source with normalized indentation (one level per block
//!     opener, `indent_width` spaces per level) and normalized spacing around `(`, `)`, `,`,
//!     `:` and `=`. It works line by line and never builds a syntax tree.
//!
//! Lines
//!
//!     The formatter walks logical lines: physical lines are joined while a newline sits
//!     inside an open string or docstring, so multi-line literals are carried through byte
//!     for byte. Each logical line is one of:
//!
//!     - blank: emitted empty.
//!     - comment-only: emitted trimmed, indented to the surrounding block when
//!       [`FormatRules::reindent_comments`] is set, flush-left otherwise.
//!     - docstring-first: emitted at the current depth, content untouched.
//!     - code: spacing normalized, a trailing comment re-attached after two spaces, and the
//!       depth advanced if the code ends with `:`.
//!
//!     Comments are found through the scanner rather than a raw split on `#`, so a `#` inside
//!     a string literal is left alone. Literal spans are opaque to the spacing pass.
//!
//! Indentation is a heuristic; see [indentation](self::indentation).

pub mod indentation;
pub mod line_tokens;

use crate::scanner::{Scanner, Span, SpanKind};
use indentation::IndentTracker;
use line_tokens::LineToken;
use logos::Logos;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::debug;

/// Keywords after which a `(` keeps its preceding space (`if (x)`, `return (a, b)`).
const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "case", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "match", "nonlocal", "not", "or", "pass", "raise",
    "return", "try", "while", "with", "yield",
];

/// Knobs for the line formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatRules {
    pub indent_width: usize,
    pub space_after_comma: bool,
    pub space_after_colon: bool,
    pub reindent_comments: bool,
}

impl Default for FormatRules {
    fn default() -> Self {
        FormatRules {
            indent_width: 4,
            space_after_comma: false,
            space_after_colon: false,
            reindent_comments: true,
        }
    }
}

/// Format standard-keyword source with the default rules.
pub fn format(source: &str) -> String {
    format_with(source, &FormatRules::default())
}

/// Format standard-keyword source.
pub fn format_with(source: &str, rules: &FormatRules) -> String {
    let mut tracker = IndentTracker::new(rules.indent_width);
    let lines = logical_lines(source);
    debug!(lines = lines.len(), "formatting");
    lines
        .iter()
        .map(|line| format_line(line, rules, &mut tracker))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One or more physical lines that belong together.
struct LogicalLine<'a> {
    text: &'a str,
    // Byte offset of `text` in the source
    offset: usize,
    spans: Vec<Span<'a>>,
}

impl<'a> LogicalLine<'a> {
    fn slice(&self, range: &Range<usize>) -> &'a str {
        &self.text[range.start - self.offset..range.end - self.offset]
    }
}

fn logical_lines(source: &str) -> Vec<LogicalLine<'_>> {
    let mut lines = Vec::new();
    let mut scanner = Scanner::new(source);
    let mut start = 0;
    let mut spans = Vec::new();

    while let Some(span) = scanner.next() {
        if span.kind == SpanKind::Newline && !scanner.in_literal() {
            lines.push(LogicalLine {
                text: &source[start..span.range.start],
                offset: start,
                spans: std::mem::take(&mut spans),
            });
            start = span.range.end;
        } else {
            spans.push(span);
        }
    }
    lines.push(LogicalLine {
        text: &source[start..],
        offset: start,
        spans,
    });
    lines
}

fn format_line(line: &LogicalLine<'_>, rules: &FormatRules, tracker: &mut IndentTracker) -> String {
    if line.text.trim().is_empty() {
        return String::new();
    }
    let leading = tracker.leading_width(line.text);
    let first = line
        .spans
        .iter()
        .find(|s| s.kind != SpanKind::Code || !s.text.trim().is_empty())
        .map(|s| s.kind);

    match first {
        Some(SpanKind::Comment) => {
            let depth = if rules.reindent_comments {
                tracker.comment_depth(leading)
            } else {
                0
            };
            format!("{}{}", tracker.prefix(depth), line.text.trim())
        }
        Some(SpanKind::Docstring) => {
            let depth = tracker.observe(leading);
            format!("{}{}", tracker.prefix(depth), content_of(line))
        }
        _ => {
            let (code, comment) = normalize_code(line, rules);
            let depth = tracker.observe(leading);
            let mut out = tracker.prefix(depth);
            out.push_str(&code);
            if let Some(comment) = comment {
                if !code.is_empty() {
                    out.push_str("  ");
                }
                out.push_str(comment.trim_end());
            }
            if code.ends_with(':') {
                tracker.open_block();
            }
            out
        }
    }
}

/// The line without its indentation; trailing whitespace is kept if it belongs to an open
/// literal.
fn content_of<'a>(line: &LogicalLine<'a>) -> &'a str {
    let content = line.text.trim_start();
    match line.spans.last() {
        Some(span) if span.kind.is_literal() => content,
        _ => content.trim_end(),
    }
}

/// A spacing unit: a lexed token, or `None` for an opaque string/docstring.
type Piece<'a> = (Option<LineToken>, &'a str);

/// Normalized code portion of a line and its trailing comment, if any.
fn normalize_code<'a>(line: &LogicalLine<'a>, rules: &FormatRules) -> (String, Option<&'a str>) {
    let mut ranges: Vec<(Option<LineToken>, Range<usize>)> = Vec::new();
    let mut comment = None;

    for span in &line.spans {
        match span.kind {
            SpanKind::Code => {
                let mut lexer = LineToken::lexer(span.text);
                while let Some(token) = lexer.next() {
                    let local = lexer.span();
                    let range = span.range.start + local.start..span.range.start + local.end;
                    ranges.push((Some(token.unwrap_or(LineToken::Word)), range));
                }
            }
            SpanKind::Comment => comment = Some(span.text),
            SpanKind::String | SpanKind::Docstring | SpanKind::Newline => {
                // Pieces of one literal split across physical lines become one atom
                if let Some((None, previous)) = ranges.last_mut() {
                    if previous.end == span.range.start {
                        previous.end = span.range.end;
                        continue;
                    }
                }
                ranges.push((None, span.range.clone()));
            }
        }
    }

    let pieces: Vec<Piece<'a>> = ranges
        .iter()
        .map(|(kind, range)| (*kind, line.slice(range)))
        .collect();
    (join_pieces(&pieces, rules), comment)
}

fn join_pieces(pieces: &[Piece<'_>], rules: &FormatRules) -> String {
    let mut out = String::new();
    let mut previous: Option<Piece<'_>> = None;
    let mut had_space = false;

    for &piece in pieces {
        if piece.0 == Some(LineToken::Whitespace) {
            had_space = true;
            continue;
        }
        if let Some(previous) = previous {
            if needs_space(previous, piece, had_space, rules) {
                out.push(' ');
            }
        }
        out.push_str(piece.1);
        previous = Some(piece);
        had_space = false;
    }
    out
}

fn needs_space(previous: Piece<'_>, next: Piece<'_>, had_space: bool, rules: &FormatRules) -> bool {
    use LineToken::*;

    let closes_group = next.1.starts_with([')', ']', '}']);
    match (previous.0, next.0) {
        (Some(Assign), _) | (_, Some(Assign)) => true,
        (Some(OpenParen), _) => false,
        (_, Some(CloseParen | Comma | Colon)) => false,
        (Some(Comma), _) => rules.space_after_comma && !closes_group,
        (Some(Colon), _) => rules.space_after_colon && !closes_group,
        (Some(Word), Some(OpenParen)) => had_space && PYTHON_KEYWORDS.contains(&previous.1),
        (Some(CloseParen), Some(OpenParen)) => false,
        _ => had_space,
    }
}
