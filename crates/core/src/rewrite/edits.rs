//! Byte-range edits and the forward splice that applies them.

use std::ops::Range;

/// Replace `range` of the source text with `replacement`.
///
/// An empty range is an insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub range: Range<usize>,
    pub replacement: String,
}

impl Edit {
    pub fn replace(range: Range<usize>, replacement: impl Into<String>) -> Self {
        Self { range, replacement: replacement.into() }
    }

    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self::replace(at..at, text)
    }
}

/// Apply `edits` to `content` in one forward pass.
///
/// Edits are sorted by start offset. Ranges must not overlap; an edit that
/// starts inside an earlier one, or falls outside the text, is dropped.
pub fn splice(content: &str, mut edits: Vec<Edit>) -> String {
    edits.sort_by_key(|e| (e.range.start, e.range.end));

    let extra: usize = edits.iter().map(|e| e.replacement.len()).sum();
    let mut result = String::with_capacity(content.len() + extra);
    let mut cursor = 0;

    for edit in edits {
        let Range { start, end } = edit.range;
        if start < cursor || end > content.len() || start > end {
            tracing::debug!(start, end, cursor, "dropping overlapping edit");
            continue;
        }
        result.push_str(&content[cursor..start]);
        result.push_str(&edit.replacement);
        cursor = end;
    }

    result.push_str(&content[cursor..]);
    result
}
