//! Batch driver: assigns variants to pages and persists the rewrites.
//!
//! Pages are handled one at a time in enumeration order. A page's position
//! picks its variant; the primary page and its companion translation share
//! that variant and are rewritten with their own locale tables. One failing
//! document never stops the batch.

mod types;

use std::fs;
use std::path::Path;

pub use types::*;

use crate::config::ResolvedConfig;
use crate::engine::Engine;
use crate::rewrite::{Outcome, rewrite};
use crate::site::SitePage;
use crate::variants::{Locale, VariantKey};

pub struct BatchRunner {
    engine: Engine,
    primary: Locale,
    companion: Option<Locale>,
    dry_run: bool,
}

impl BatchRunner {
    pub fn new(engine: Engine, primary: Locale, companion: Option<Locale>) -> Self {
        Self { engine, primary, companion, dry_run: false }
    }

    /// Runner for a resolved profile.
    pub fn from_config(config: &ResolvedConfig) -> Result<Self, BatchError> {
        let engine = Engine::new(config.markup.clone(), config.segmentation)?;
        let primary = Locale::builtin(&config.primary_locale)?;
        let companion = config.companion.as_ref().map(|c| Locale::builtin(&c.locale)).transpose()?;
        Ok(Self::new(engine, primary, companion))
    }

    /// Report what would change without writing anything.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn run(&self, pages: &[SitePage]) -> BatchReport {
        self.run_with(pages, |_| {})
    }

    /// Process every page, calling `on_page` as each one finishes.
    pub fn run_with<F>(&self, pages: &[SitePage], mut on_page: F) -> BatchReport
    where
        F: FnMut(&PageReport),
    {
        let mut stats = BatchStats::default();
        let mut reports = Vec::with_capacity(pages.len());

        for (position, page) in pages.iter().enumerate() {
            let report = self.process_page(VariantKey::for_position(position), page);
            stats.record(&report);
            on_page(&report);
            reports.push(report);
        }

        tracing::info!(
            pages = stats.pages,
            transformed = stats.transformed,
            unresolved = stats.unresolved,
            failed = stats.failed,
            dry_run = self.dry_run,
            "batch finished"
        );

        BatchReport { dry_run: self.dry_run, pages: reports, stats }
    }

    pub fn process_page(&self, variant: VariantKey, page: &SitePage) -> PageReport {
        let primary = self.process_document(&page.primary_path, &self.primary, variant);

        let companion = match (&page.companion_path, &self.companion) {
            (Some(path), Some(locale)) => Some(self.process_document(path, locale, variant)),
            _ => None,
        };

        PageReport { relative_path: page.relative_path.clone(), variant, primary, companion }
    }

    fn process_document(&self, path: &Path, locale: &Locale, variant: VariantKey) -> DocumentReport {
        let report = |outcome, written| DocumentReport {
            path: path.to_path_buf(),
            locale: locale.name().to_string(),
            outcome,
            written,
        };

        let original = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to read page");
                return report(DocumentOutcome::Failed(e.to_string()), false);
            }
        };

        let result =
            rewrite(&self.engine, &original, locale.vocabulary(), locale.variant(variant));

        match result.outcome {
            Outcome::Identity | Outcome::Unchanged => report(DocumentOutcome::Unchanged, false),
            Outcome::AlreadyApplied => {
                tracing::debug!(path = %path.display(), %variant, "variant already applied");
                report(DocumentOutcome::AlreadyApplied, false)
            }
            Outcome::Unresolved(reason) => {
                tracing::warn!(path = %path.display(), %variant, %reason, "left unchanged");
                report(DocumentOutcome::Unresolved(reason.to_string()), false)
            }
            Outcome::Rewritten if self.dry_run => {
                tracing::info!(path = %path.display(), %variant, "would rewrite");
                report(DocumentOutcome::Transformed, false)
            }
            Outcome::Rewritten => match fs::write(path, result.text.as_bytes()) {
                Ok(()) => {
                    tracing::info!(path = %path.display(), %variant, "rewrote page");
                    report(DocumentOutcome::Transformed, true)
                }
                Err(e) => {
                    tracing::error!(path = %path.display(), error = %e, "failed to write page");
                    report(DocumentOutcome::Failed(e.to_string()), false)
                }
            },
        }
    }
}
