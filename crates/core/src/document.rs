//! Line index over an immutable text buffer.
//!
//! Lines are split on `\n` only. A trailing `\r` stays part of its line, and a
//! document ending in `\n` has a final empty line, so line offsets always
//! cover the whole buffer.

use std::ops::Range;

/// Borrowed document text with precomputed line start offsets.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    text: &'a str,
    starts: Vec<usize>,
}

impl<'a> Document<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut starts = vec![0];
        starts.extend(text.match_indices('\n').map(|(i, _)| i + 1));
        Self { text, starts }
    }

    /// The full document text.
    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// Line text without its terminating `\n`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn line(&self, index: usize) -> &'a str {
        let start = self.starts[index];
        let end = self.starts.get(index + 1).map_or(self.text.len(), |next| next - 1);
        &self.text[start..end]
    }

    /// Byte offset where `index` begins. One past the last line maps to the
    /// end of the buffer.
    pub fn line_offset(&self, index: usize) -> usize {
        self.starts.get(index).copied().unwrap_or(self.text.len())
    }

    /// Byte range covering lines `lines.start..lines.end`, including the
    /// newline of the last covered line when there is one.
    pub fn byte_span(&self, lines: Range<usize>) -> Range<usize> {
        self.line_offset(lines.start)..self.line_offset(lines.end)
    }

    /// Iterate over `(index, line)` pairs.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        (0..self.line_count()).map(move |i| (i, self.line(i)))
    }
}
