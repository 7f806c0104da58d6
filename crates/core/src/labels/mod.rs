//! Heading recognition.
//!
//! Finds guide headings line by line. A heading is an element of the
//! grammar's heading tag whose class matches one of the known signatures and
//! whose text equals a vocabulary label exactly. Attribute noise appended by
//! earlier rewrite passes is tolerated through the signature patterns.

mod vocabulary;

use std::ops::Range;

use regex::{Regex, escape};

use crate::document::Document;
use crate::markup::{Grammar, GrammarError};

pub use vocabulary::{HeadingVocabulary, SECTION_COUNT, VocabularyError};

/// A heading-shaped element with absolute byte ranges into its document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingElement {
    /// Line holding the element.
    pub line: usize,
    /// Range of the class attribute value.
    pub class: Range<usize>,
    /// Range of the enclosed text.
    pub text: Range<usize>,
}

/// A recognised standard heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingOccurrence {
    /// Position of the label in its vocabulary.
    pub canonical_index: usize,
    pub label: String,
    pub element: HeadingElement,
}

impl HeadingOccurrence {
    pub fn line(&self) -> usize {
        self.element.line
    }
}

/// Compiled heading pattern for one grammar.
#[derive(Debug, Clone)]
pub struct HeadingMatcher {
    pattern: Regex,
}

impl HeadingMatcher {
    pub fn new(grammar: &Grammar) -> Result<Self, GrammarError> {
        grammar.validate()?;

        let alternatives = grammar
            .signatures
            .iter()
            .map(|s| format!("{}[^\"]*{}", escape(&s.leading), escape(&s.trailing)))
            .collect::<Vec<_>>()
            .join("|");
        let tag = escape(&grammar.heading_tag);

        // Captures:
        // 1: class value
        // 2: enclosed text
        let pattern = Regex::new(&format!(
            r#"<{tag}\s+class="((?:{alternatives})[^"]*)"\s*>([^<]*)</{tag}\s*>"#
        ))?;

        Ok(Self { pattern })
    }

    /// All heading-shaped elements on one line, in textual order.
    pub fn elements(&self, doc: &Document, line: usize) -> Vec<HeadingElement> {
        let offset = doc.line_offset(line);
        self.pattern
            .captures_iter(doc.line(line))
            .filter_map(|cap| {
                let class = cap.get(1)?.range();
                let text = cap.get(2)?.range();
                Some(HeadingElement {
                    line,
                    class: offset + class.start..offset + class.end,
                    text: offset + text.start..offset + text.end,
                })
            })
            .collect()
    }
}

/// Locate every standard heading of `vocabulary` in textual order.
///
/// Duplicates are returned as found; deciding whether the set is usable is
/// left to the segmenter.
pub fn locate_headings(
    doc: &Document,
    vocabulary: &HeadingVocabulary,
    matcher: &HeadingMatcher,
) -> Vec<HeadingOccurrence> {
    let mut occurrences = Vec::new();

    for (line, _) in doc.lines() {
        for element in matcher.elements(doc, line) {
            let text = &doc.text()[element.text.clone()];
            if let Some(canonical_index) = vocabulary.index_of(text) {
                occurrences.push(HeadingOccurrence {
                    canonical_index,
                    label: text.to_string(),
                    element,
                });
            }
        }
    }

    tracing::debug!(found = occurrences.len(), "located standard headings");
    occurrences
}
