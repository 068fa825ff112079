//! Indentation depth tracking for the line formatter.
//!
//! The depth only grows through block openers (lines ending in `:`). It shrinks when a
//! line's raw leading whitespace is narrower than the previous tracked line's, in which case
//! it is recomputed as `leading / width`. This is a heuristic over raw columns, not a
//! re-parse: mixed or misaligned indentation is normalized on a best-effort basis.
use tracing::trace;

#[derive(Debug, Clone)]
pub struct IndentTracker {
    width: usize,
    depth: usize,
    previous_leading: Option<usize>,
}

impl IndentTracker {
    pub fn new(width: usize) -> Self {
        IndentTracker {
            width: width.max(1),
            depth: 0,
            previous_leading: None,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Raw leading-whitespace width of `line`; a tab counts as one indentation level.
    pub fn leading_width(&self, line: &str) -> usize {
        line.chars()
            .take_while(|c| *c == ' ' || *c == '\t')
            .map(|c| if c == '\t' { self.width } else { 1 })
            .sum()
    }

    /// Record a code or docstring line and return the depth it is emitted at.
    pub fn observe(&mut self, leading: usize) -> usize {
        if let Some(previous) = self.previous_leading {
            if leading < previous {
                let depth = self.depth.min(leading / self.width);
                trace!(leading, previous, from = self.depth, to = depth, "dedent");
                self.depth = depth;
            }
        }
        self.previous_leading = Some(leading);
        self.depth
    }

    /// Enter the block opened by the line just emitted.
    pub fn open_block(&mut self) {
        self.depth += 1;
    }

    /// Depth for a comment-only line, which does not move the tracker.
    pub fn comment_depth(&self, leading: usize) -> usize {
        self.depth.min(leading / self.width)
    }

    /// The whitespace prefix for `depth` levels.
    pub fn prefix(&self, depth: usize) -> String {
        " ".repeat(depth * self.width)
    }
}
