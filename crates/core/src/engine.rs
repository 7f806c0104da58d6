//! Immutable engine configuration shared by every document transformation.

use crate::labels::HeadingMatcher;
use crate::markup::{Grammar, GrammarError};
use crate::segment::SegmentOptions;

/// Compiled grammar plus segmentation tunables.
///
/// Holds no per-document state, so one engine can serve any number of
/// documents.
#[derive(Debug, Clone)]
pub struct Engine {
    grammar: Grammar,
    matcher: HeadingMatcher,
    options: SegmentOptions,
}

impl Engine {
    pub fn new(grammar: Grammar, options: SegmentOptions) -> Result<Self, GrammarError> {
        let matcher = HeadingMatcher::new(&grammar)?;
        Ok(Self { grammar, matcher, options })
    }

    /// Engine for the default guide markup and tunables.
    pub fn with_defaults() -> Result<Self, GrammarError> {
        Self::new(Grammar::default(), SegmentOptions::default())
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn matcher(&self) -> &HeadingMatcher {
        &self.matcher
    }

    pub fn options(&self) -> &SegmentOptions {
        &self.options
    }
}
