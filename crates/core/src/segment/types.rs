//! Data structures for section segmentation.

use std::ops::Range;

use serde::Deserialize;
use thiserror::Error;

use crate::labels::HeadingElement;

/// Reasons a document cannot be segmented safely.
///
/// Every variant means "leave the document unchanged".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Unresolvable {
    #[error("expected 5 standard headings, found {found}")]
    SectionCount { found: usize },

    #[error("heading '{label}' appears more than once")]
    DuplicateLabel { label: String },

    #[error("two standard headings share line {line}")]
    SharedHeadingLine { line: usize },

    #[error("line {line} closes or opens a block before its heading")]
    HeadingLineNesting { line: usize },

    #[error("nesting opened after line {heading_line} did not close within {scanned} lines")]
    UnterminatedNesting { heading_line: usize, scanned: usize },

    #[error("line {line} closes both the last section and its container")]
    AmbiguousClose { line: usize },

    #[error("section at line {heading_line} runs to the end of a document without a final newline")]
    OpenEndedSpan { heading_line: usize },

    #[error("relabeled vocabulary is invalid: {0}")]
    Vocabulary(String),
}

/// Tunables for boundary inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SegmentOptions {
    /// Maximum number of lines scanned past the last heading.
    pub tail_window: usize,
    /// Number of lines searched before the first heading for an intro.
    pub intro_lookback: usize,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self { tail_window: 100, intro_lookback: 15 }
    }
}

/// One of the five standard sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Position of the label in its vocabulary.
    pub canonical_index: usize,
    pub label: String,
    pub heading: HeadingElement,
    pub heading_line: usize,
    /// First body line (the line after the heading).
    pub body_start: usize,
    /// First line past the section.
    pub body_end: usize,
}

impl Section {
    /// Lines covered by the section, heading included.
    pub fn lines(&self) -> Range<usize> {
        self.heading_line..self.body_end
    }
}

/// Non-standard heading directly preceding the first standard section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroSection {
    pub heading: HeadingElement,
    pub text: String,
    pub heading_line: usize,
    /// First standard heading line.
    pub body_end: usize,
}

impl IntroSection {
    pub fn lines(&self) -> Range<usize> {
        self.heading_line..self.body_end
    }
}

/// Sections in textual order plus the optional intro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    pub sections: Vec<Section>,
    pub intro: Option<IntroSection>,
}

impl Segmentation {
    /// Lines from the first heading to the end of the last section.
    pub fn lines(&self) -> Range<usize> {
        let start = self.sections.first().map_or(0, |s| s.heading_line);
        let end = self.sections.last().map_or(0, |s| s.body_end);
        start..end
    }

    pub fn by_canonical(&self, index: usize) -> Option<&Section> {
        self.sections.iter().find(|s| s.canonical_index == index)
    }
}
