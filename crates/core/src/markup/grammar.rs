//! Markup vocabulary the engine recognises: which tags are headings, which
//! are nesting blocks, and which class signatures mark a guide heading.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("tag name for {0} must be a non-empty alphanumeric name, got '{1}'")]
    InvalidTag(&'static str, String),

    #[error("at least one heading signature is required")]
    NoSignatures,

    #[error("heading signature {0} has an empty leading class run")]
    EmptySignature(usize),

    #[error("failed to compile heading pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// A class signature for guide headings.
///
/// A `class` value matches when it starts with `leading` and contains
/// `trailing` somewhere after it. Extra class tokens may appear between the
/// two runs and after `trailing`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeadingSignature {
    pub leading: String,
    #[serde(default)]
    pub trailing: String,
}

impl HeadingSignature {
    pub fn new(leading: impl Into<String>, trailing: impl Into<String>) -> Self {
        Self { leading: leading.into(), trailing: trailing.into() }
    }
}

/// Tag and class conventions of the documents being rewritten.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Grammar {
    /// Element holding a section label.
    pub heading_tag: String,
    /// Known class signatures for section headings.
    pub signatures: Vec<HeadingSignature>,
    /// Block element whose open/close tags drive the depth scan.
    pub block_tag: String,
    /// List elements restyled by list-scoped rules.
    pub list_tags: Vec<String>,
    /// Question element of the Q&A block.
    pub question_tag: String,
    /// Answer element following a question.
    pub answer_tag: String,
}

impl Default for Grammar {
    fn default() -> Self {
        Self {
            heading_tag: "h3".to_string(),
            signatures: vec![
                HeadingSignature::new("text-lg font-semibold", "mt-6 mb-3"),
                HeadingSignature::new("text-lg font-bold", "mt-8 mb-2"),
                HeadingSignature::new("text-base font-bold", "mt-6 mb-2"),
            ],
            block_tag: "div".to_string(),
            list_tags: vec!["ul".to_string(), "ol".to_string()],
            question_tag: "h4".to_string(),
            answer_tag: "p".to_string(),
        }
    }
}

impl Grammar {
    pub fn validate(&self) -> Result<(), GrammarError> {
        check_tag("heading_tag", &self.heading_tag)?;
        check_tag("block_tag", &self.block_tag)?;
        check_tag("question_tag", &self.question_tag)?;
        check_tag("answer_tag", &self.answer_tag)?;
        for tag in &self.list_tags {
            check_tag("list_tags", tag)?;
        }

        if self.signatures.is_empty() {
            return Err(GrammarError::NoSignatures);
        }
        if let Some(idx) = self.signatures.iter().position(|s| s.leading.is_empty()) {
            return Err(GrammarError::EmptySignature(idx));
        }
        Ok(())
    }

    pub fn is_list_tag(&self, name: &str) -> bool {
        self.list_tags.iter().any(|t| t.eq_ignore_ascii_case(name))
    }
}

fn check_tag(field: &'static str, tag: &str) -> Result<(), GrammarError> {
    let valid = tag.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && tag.chars().all(|c| c.is_ascii_alphanumeric());
    if valid { Ok(()) } else { Err(GrammarError::InvalidTag(field, tag.to_string())) }
}
