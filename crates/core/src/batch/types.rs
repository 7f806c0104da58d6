use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::markup::GrammarError;
use crate::variants::{VariantError, VariantKey};

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("invalid markup grammar: {0}")]
    Markup(#[from] GrammarError),

    #[error(transparent)]
    Locale(#[from] VariantError),
}

/// What happened to one document on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum DocumentOutcome {
    /// Rewritten (or, in dry run, would have been).
    Transformed,
    /// Variant A, or nothing in the guide matched a rule.
    Unchanged,
    /// The guide already reads in the variant's labels.
    AlreadyApplied,
    /// The guide could not be segmented safely.
    Unresolved(String),
    /// Reading or writing the file failed.
    Failed(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub path: PathBuf,
    pub locale: String,
    pub outcome: DocumentOutcome,
    /// Whether new bytes were written to `path`.
    pub written: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageReport {
    pub relative_path: String,
    pub variant: VariantKey,
    pub primary: DocumentReport,
    pub companion: Option<DocumentReport>,
}

impl PageReport {
    pub fn documents(&self) -> impl Iterator<Item = &DocumentReport> {
        std::iter::once(&self.primary).chain(self.companion.as_ref())
    }

    /// True when no document of this page was unresolved or failed.
    pub fn is_clean(&self) -> bool {
        self.documents().all(|d| {
            !matches!(d.outcome, DocumentOutcome::Unresolved(_) | DocumentOutcome::Failed(_))
        })
    }
}

/// Document counts plus pages per variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    pub pages: usize,
    pub documents: usize,
    pub transformed: usize,
    pub unchanged: usize,
    pub already_applied: usize,
    pub unresolved: usize,
    pub failed: usize,
    pub written: usize,
    pub per_variant: BTreeMap<VariantKey, usize>,
}

impl BatchStats {
    pub fn record(&mut self, page: &PageReport) {
        self.pages += 1;
        *self.per_variant.entry(page.variant).or_default() += 1;

        for doc in page.documents() {
            self.documents += 1;
            if doc.written {
                self.written += 1;
            }
            match doc.outcome {
                DocumentOutcome::Transformed => self.transformed += 1,
                DocumentOutcome::Unchanged => self.unchanged += 1,
                DocumentOutcome::AlreadyApplied => self.already_applied += 1,
                DocumentOutcome::Unresolved(_) => self.unresolved += 1,
                DocumentOutcome::Failed(_) => self.failed += 1,
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub dry_run: bool,
    pub pages: Vec<PageReport>,
    pub stats: BatchStats,
}
