//! Source ranges and line/column lookup.
//!
//! A `TextRange` is the provenance a parser attaches to a node. It is always
//! optional on nodes: trees built programmatically carry no ranges at all.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open range of character offsets `[pos, end)` in the source text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    /// Start position (character index)
    pub pos: u32,
    /// End position (character index, exclusive)
    pub end: u32,
}

impl TextRange {
    #[inline]
    pub const fn new(pos: u32, end: u32) -> TextRange {
        TextRange { pos, end }
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.pos)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.pos
    }

    /// Check whether `offset` falls inside this range.
    #[inline]
    pub const fn contains(&self, offset: u32) -> bool {
        self.pos <= offset && offset < self.end
    }

    /// Check whether `other` lies entirely within this range.
    #[inline]
    pub const fn contains_range(&self, other: TextRange) -> bool {
        self.pos <= other.pos && other.end <= self.end
    }

    /// The smallest range covering both `self` and `other`.
    #[must_use]
    pub fn cover(self, other: TextRange) -> TextRange {
        TextRange {
            pos: self.pos.min(other.pos),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.pos, self.end)
    }
}

/// A zero-based line/character position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub const fn new(line: u32, character: u32) -> Position {
        Position { line, character }
    }
}

/// Maps character offsets to line/character positions.
///
/// Built once per source text; lookups are a binary search over line starts.
/// The first line always starts at offset 0, so `line_starts` is never empty.
#[derive(Clone, Debug)]
pub struct LineMap {
    line_starts: Vec<u32>,
}

/// The map of an empty text: one line.
impl Default for LineMap {
    fn default() -> Self {
        LineMap { line_starts: vec![0] }
    }
}

impl LineMap {
    /// Build a line map for `text`. `\n`, `\r\n` and a lone `\r` all end a line.
    pub fn build(text: &str) -> LineMap {
        let mut line_starts = vec![0];
        let mut chars = text.chars().peekable();
        let mut offset: u32 = 0;
        while let Some(ch) = chars.next() {
            offset += 1;
            match ch {
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                        offset += 1;
                    }
                    line_starts.push(offset);
                }
                '\n' => line_starts.push(offset),
                _ => {}
            }
        }
        LineMap { line_starts }
    }

    /// Number of lines in the mapped text.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a character offset to a zero-based position.
    pub fn position(&self, offset: u32) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next.saturating_sub(1),
        };
        let start = self.line_starts.get(line).copied().unwrap_or(0);
        Position {
            line: line as u32,
            character: offset.saturating_sub(start),
        }
    }
}

#[cfg(test)]
#[path = "../tests/span_tests.rs"]
mod tests;
