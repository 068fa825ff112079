//! Lexical scanner
//!
//!     Splits source text into typed spans: code, string literal, comment, docstring and
//!     newline. The classification is what makes keyword substitution safe: only code spans
//!     are ever rewritten, everything else is carried through byte for byte.
//!
//! Modes
//!
//!     The scanner is a single left-to-right pass over the input with four mutually exclusive
//!     modes (code, string, comment, docstring). Triple-quote detection looks ahead three
//!     characters; nothing else needs lookahead.
//!
//!     - A docstring opens on `"""` or `'''` in code mode and closes on the same delimiter.
//!     - A comment opens on `#` in code mode and ends before the next newline.
//!     - A string opens on `"` or `'` in code mode and closes on the same quote. A backslash
//!       escapes the next character unless that character is a newline.
//!     - A newline is always its own span. It ends a comment but not a string or docstring:
//!       the partial literal is flushed and the scanner stays inside it.
//!
//! Spans borrow from the input and carry their byte range, so concatenating all span texts
//! reconstructs the input exactly. Unterminated literals at end of input are flushed as a
//! final span of the literal's kind; scanning never fails.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// Lexical category of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    Code,
    String,
    Comment,
    Docstring,
    Newline,
}

impl SpanKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SpanKind::Code => "code",
            SpanKind::String => "string",
            SpanKind::Comment => "comment",
            SpanKind::Docstring => "docstring",
            SpanKind::Newline => "newline",
        }
    }

    /// String and docstring spans: content that must never be rewritten or re-spaced.
    pub fn is_literal(self) -> bool {
        matches!(self, SpanKind::String | SpanKind::Docstring)
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A maximal run of source text with a single lexical category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span<'a> {
    pub kind: SpanKind,
    pub text: &'a str,
    pub range: Range<usize>,
}

impl<'a> Span<'a> {
    fn new(kind: SpanKind, source: &'a str, range: Range<usize>) -> Self {
        Span {
            kind,
            text: &source[range.clone()],
            range,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Code,
    String { quote: char },
    Comment,
    Docstring { delimiter: &'static str },
}

impl Mode {
    fn span_kind(self) -> SpanKind {
        match self {
            Mode::Code => SpanKind::Code,
            Mode::String { .. } => SpanKind::String,
            Mode::Comment => SpanKind::Comment,
            Mode::Docstring { .. } => SpanKind::Docstring,
        }
    }
}

/// Returns the docstring delimiter if `rest` starts with one.
fn docstring_delimiter(rest: &str) -> Option<&'static str> {
    if rest.starts_with("\"\"\"") {
        Some("\"\"\"")
    } else if rest.starts_with("'''") {
        Some("'''")
    } else {
        None
    }
}

/// Span iterator over a source string.
///
/// Besides yielding spans, the scanner exposes its current mode through
/// [`Scanner::in_literal`], which lets line-oriented consumers tell a newline that ends a
/// line from one that sits inside a multi-line string or docstring.
pub struct Scanner<'a> {
    source: &'a str,
    // Start of the span being accumulated.
    start: usize,
    pos: usize,
    mode: Mode,
    // A newline span waiting behind a flushed buffer.
    queued: Option<Span<'a>>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Scanner {
            source,
            start: 0,
            pos: 0,
            mode: Mode::Code,
            queued: None,
        }
    }

    /// True while inside an open string or docstring.
    pub fn in_literal(&self) -> bool {
        matches!(self.mode, Mode::String { .. } | Mode::Docstring { .. })
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    /// Emit the accumulated buffer up to `end`, if any.
    fn flush(&mut self, end: usize, kind: SpanKind) -> Option<Span<'a>> {
        if self.start >= end {
            return None;
        }
        let span = Span::new(kind, self.source, self.start..end);
        self.start = end;
        Some(span)
    }

    /// Handle a newline at `at`: flush what came before it, then the newline itself.
    fn newline(&mut self, at: usize) -> Option<Span<'a>> {
        let flushed = self.flush(at, self.mode.span_kind());
        if self.mode == Mode::Comment {
            self.mode = Mode::Code;
        }
        let newline = Span::new(SpanKind::Newline, self.source, at..at + 1);
        self.pos = at + 1;
        self.start = self.pos;
        match flushed {
            Some(span) => {
                self.queued = Some(newline);
                Some(span)
            }
            None => Some(newline),
        }
    }

    /// Switch into `mode` at `at`, flushing any pending code first.
    fn open(&mut self, at: usize, mode: Mode, width: usize) -> Option<Span<'a>> {
        let flushed = self.flush(at, SpanKind::Code);
        self.mode = mode;
        self.pos = at + width;
        flushed
    }

    /// Close the current literal after `width` more bytes and emit it.
    fn close(&mut self, width: usize) -> Option<Span<'a>> {
        let kind = self.mode.span_kind();
        self.pos += width;
        self.mode = Mode::Code;
        self.flush(self.pos, kind)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Span<'a>> {
        if let Some(span) = self.queued.take() {
            return Some(span);
        }

        while let Some(c) = self.peek() {
            let at = self.pos;
            match self.mode {
                Mode::Code => {
                    if let Some(delimiter) = docstring_delimiter(&self.source[at..]) {
                        if let Some(span) = self.open(at, Mode::Docstring { delimiter }, 3) {
                            return Some(span);
                        }
                        continue;
                    }
                    let opened = match c {
                        '#' => self.open(at, Mode::Comment, 1),
                        '"' | '\'' => self.open(at, Mode::String { quote: c }, 1),
                        '\n' => return self.newline(at),
                        _ => {
                            self.bump(c);
                            None
                        }
                    };
                    if opened.is_some() {
                        return opened;
                    }
                }
                Mode::Comment => {
                    if c == '\n' {
                        return self.newline(at);
                    }
                    self.bump(c);
                }
                Mode::String { quote } => match c {
                    '\n' => return self.newline(at),
                    '\\' => {
                        self.bump(c);
                        match self.peek() {
                            Some(escaped) if escaped != '\n' => self.bump(escaped),
                            _ => {}
                        }
                    }
                    c if c == quote => return self.close(1),
                    _ => self.bump(c),
                },
                Mode::Docstring { delimiter } => {
                    if self.source[at..].starts_with(delimiter) {
                        return self.close(3);
                    }
                    if c == '\n' {
                        return self.newline(at);
                    }
                    self.bump(c);
                }
            }
        }

        let kind = self.mode.span_kind();
        self.flush(self.source.len(), kind)
    }
}

/// Scan `source` into spans in document order.
pub fn scan(source: &str) -> Vec<Span<'_>> {
    Scanner::new(source).collect()
}
