//! Canonical heading vocabularies.

use std::collections::{BTreeMap, HashSet};

use thiserror::Error;

/// Number of standard guide sections.
pub const SECTION_COUNT: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VocabularyError {
    #[error("a vocabulary needs exactly {SECTION_COUNT} labels, got {0}")]
    WrongSize(usize),

    #[error("label {0} is empty")]
    EmptyLabel(usize),

    #[error("label '{0}' appears more than once")]
    DuplicateLabel(String),
}

/// Ordered set of the five standard section labels for one language.
///
/// Order is the standard position of each section, which is also the
/// canonical index a permutation refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingVocabulary {
    labels: Vec<String>,
}

impl HeadingVocabulary {
    pub fn new<I, S>(labels: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();

        if labels.len() != SECTION_COUNT {
            return Err(VocabularyError::WrongSize(labels.len()));
        }
        if let Some(idx) = labels.iter().position(String::is_empty) {
            return Err(VocabularyError::EmptyLabel(idx));
        }

        let mut seen = HashSet::new();
        for label in &labels {
            if !seen.insert(label.as_str()) {
                return Err(VocabularyError::DuplicateLabel(label.clone()));
            }
        }

        Ok(Self { labels })
    }

    /// Korean guide headings.
    pub fn korean() -> Self {
        Self::from_static(["주요 기능", "사용 방법", "활용 사례", "팁과 주의사항", "자주 묻는 질문"])
    }

    /// English guide headings.
    pub fn english() -> Self {
        Self::from_static([
            "Key Features",
            "How to Use",
            "Common Use Cases",
            "Tips and Notes",
            "Frequently Asked Questions",
        ])
    }

    fn from_static(labels: [&str; SECTION_COUNT]) -> Self {
        Self { labels: labels.iter().map(ToString::to_string).collect() }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Label at canonical position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= SECTION_COUNT`.
    pub fn label(&self, index: usize) -> &str {
        &self.labels[index]
    }

    /// Canonical index of an exact label.
    pub fn index_of(&self, text: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == text)
    }

    /// Vocabulary after applying a label map. Labels without an entry keep
    /// their text; canonical positions are unchanged.
    pub fn relabeled(&self, map: &BTreeMap<String, String>) -> Result<Self, VocabularyError> {
        Self::new(self.labels.iter().map(|l| map.get(l).unwrap_or(l).clone()))
    }
}
