//! Span rewriting.
//!
//! A rewrite runs in two passes. The in-place pass renames headings and
//! restyles class attributes inside the located sections. The reorder pass
//! then re-locates the sections under their new labels and emits them in
//! permuted order. Any unresolvable document comes back untouched.

pub mod edits;
pub mod relabel;
pub mod reorder;
pub mod restyle;

use std::borrow::Cow;

use serde::Serialize;

use crate::document::Document;
use crate::engine::Engine;
use crate::labels::{HeadingVocabulary, locate_headings};
use crate::segment::{Unresolvable, segment};
use crate::variants::VariantSpec;

use edits::splice;

/// What a rewrite did to its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The variant changes nothing; the input was not inspected.
    Identity,
    Rewritten,
    /// The document segmented but no rule applied.
    Unchanged,
    /// The document already reads in the variant's labels.
    AlreadyApplied,
    Unresolved(Unresolvable),
}

impl Outcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::Identity => OutcomeKind::Identity,
            Outcome::Rewritten => OutcomeKind::Rewritten,
            Outcome::Unchanged => OutcomeKind::Unchanged,
            Outcome::AlreadyApplied => OutcomeKind::AlreadyApplied,
            Outcome::Unresolved(_) => OutcomeKind::Unresolved,
        }
    }
}

/// Payload-free form of [`Outcome`], for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Identity,
    Rewritten,
    Unchanged,
    AlreadyApplied,
    Unresolved,
}

/// Result of [`rewrite`]. Borrows the input whenever nothing changed.
#[derive(Debug, Clone)]
pub struct Rewrite<'a> {
    pub text: Cow<'a, str>,
    pub outcome: Outcome,
}

impl Rewrite<'_> {
    pub fn changed(&self) -> bool {
        matches!(self.text, Cow::Owned(_))
    }

    pub fn into_string(self) -> String {
        self.text.into_owned()
    }
}

/// Rewrite one document into `variant`.
pub fn rewrite<'a>(
    engine: &Engine,
    text: &'a str,
    vocabulary: &HeadingVocabulary,
    variant: &VariantSpec,
) -> Rewrite<'a> {
    if variant.is_identity() {
        return Rewrite { text: Cow::Borrowed(text), outcome: Outcome::Identity };
    }

    let unchanged = |outcome| Rewrite { text: Cow::Borrowed(text), outcome };

    match apply(engine, text, vocabulary, variant) {
        Ok(out) if out == text => unchanged(Outcome::Unchanged),
        Ok(out) => Rewrite { text: Cow::Owned(out), outcome: Outcome::Rewritten },
        Err(reason) if already_applied(engine, text, vocabulary, variant, &reason) => {
            unchanged(Outcome::AlreadyApplied)
        }
        Err(reason) => {
            tracing::debug!(variant = %variant.key, %reason, "document left unchanged");
            unchanged(Outcome::Unresolved(reason))
        }
    }
}

/// Text-only form of [`rewrite`].
pub fn rewrite_text(
    engine: &Engine,
    text: &str,
    vocabulary: &HeadingVocabulary,
    variant: &VariantSpec,
) -> String {
    rewrite(engine, text, vocabulary, variant).into_string()
}

fn apply(
    engine: &Engine,
    text: &str,
    vocabulary: &HeadingVocabulary,
    variant: &VariantSpec,
) -> Result<String, Unresolvable> {
    let doc = Document::new(text);
    let occurrences = locate_headings(&doc, vocabulary, engine.matcher());
    let segmentation = segment(&doc, &occurrences, engine)?;

    let substituted = if variant.substitutes() {
        let mut edits = relabel::label_edits(&segmentation, variant);
        edits.extend(restyle::style_edits(engine, &doc, &segmentation, variant));
        splice(text, edits)
    } else {
        text.to_string()
    };

    match variant.reorders() {
        Some(permutation) => {
            let relabeled = variant
                .relabeled_vocabulary(vocabulary)
                .map_err(|e| Unresolvable::Vocabulary(e.to_string()))?;
            reorder::reorder(engine, &substituted, &relabeled, permutation)
        }
        None => Ok(substituted),
    }
}

/// A document with none of the canonical labels that segments cleanly
/// under the relabeled vocabulary has been rewritten before.
fn already_applied(
    engine: &Engine,
    text: &str,
    vocabulary: &HeadingVocabulary,
    variant: &VariantSpec,
    reason: &Unresolvable,
) -> bool {
    if *reason != (Unresolvable::SectionCount { found: 0 }) {
        return false;
    }
    let Ok(relabeled) = variant.relabeled_vocabulary(vocabulary) else {
        return false;
    };
    if relabeled == *vocabulary {
        return false;
    }

    let doc = Document::new(text);
    let occurrences = locate_headings(&doc, &relabeled, engine.matcher());
    segment(&doc, &occurrences, engine).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::{Locale, VariantKey};

    const GUIDE: &str = r#"<section>
<h3 class="text-lg font-semibold mt-6 mb-3">What is Base64?</h3>
<p>Encode and decode.</p>
<h3 class="text-lg font-semibold mt-6 mb-3">Key Features</h3>
<ul class="list-disc list-inside space-y-2"><li>Fast</li></ul>
<h3 class="text-lg font-semibold mt-6 mb-3">How to Use</h3>
<p>Paste.</p>
<h3 class="text-lg font-semibold mt-6 mb-3">Common Use Cases</h3>
<p>APIs.</p>
<h3 class="text-lg font-semibold mt-6 mb-3">Tips and Notes</h3>
<p>Not encryption.</p>
<h3 class="text-lg font-semibold mt-6 mb-3">Frequently Asked Questions</h3>
<div class="space-y-4">
<div>
<h4 class="font-medium">Is it free?</h4>
<p>Yes.</p>
</div>
</div>
</section>
"#;

    fn en() -> Locale {
        Locale::builtin("en").unwrap()
    }

    #[test]
    fn test_identity_variant_borrows_input() {
        let engine = Engine::with_defaults().unwrap();
        let locale = en();
        let out = rewrite(&engine, GUIDE, locale.vocabulary(), locale.variant(VariantKey::A));
        assert_eq!(out.outcome, Outcome::Identity);
        assert!(!out.changed());
        assert_eq!(out.text, GUIDE);
    }

    #[test]
    fn test_variant_b_relabels_and_reorders() {
        let engine = Engine::with_defaults().unwrap();
        let locale = en();
        let out = rewrite(&engine, GUIDE, locale.vocabulary(), locale.variant(VariantKey::B));

        assert_eq!(out.outcome, Outcome::Rewritten);
        let headings: Vec<_> = out
            .text
            .lines()
            .filter_map(|l| l.strip_prefix(r#"<h3 class="text-lg font-bold mt-8 mb-2">"#))
            .map(|l| l.trim_end_matches("</h3>"))
            .collect();
        assert_eq!(
            headings,
            vec![
                "User Guide",
                "Core Features",
                "When This Comes in Handy",
                "Common Questions",
                "Good to Know",
            ]
        );
        // The intro keeps its class and only changes text.
        assert!(out.text.contains(r#"<h3 class="text-lg font-semibold mt-6 mb-3">About Base64</h3>"#));
        assert!(out.text.ends_with(">Good to Know</h3>\n<p>Not encryption.</p>\n</section>\n"));
    }

    #[test]
    fn test_second_application_is_already_applied() {
        let engine = Engine::with_defaults().unwrap();
        let locale = en();
        for key in [VariantKey::B, VariantKey::C, VariantKey::D] {
            let variant = locale.variant(key);
            let once = rewrite_text(&engine, GUIDE, locale.vocabulary(), variant);
            let twice = rewrite(&engine, &once, locale.vocabulary(), variant);
            assert_eq!(twice.outcome, Outcome::AlreadyApplied, "variant {key}");
            assert_eq!(twice.text, once);
        }
    }

    #[test]
    fn test_unresolved_document_is_returned_verbatim() {
        let engine = Engine::with_defaults().unwrap();
        let locale = en();
        let broken = GUIDE.replace(">Tips and Notes<", ">Tips<");
        let out = rewrite(&engine, &broken, locale.vocabulary(), locale.variant(VariantKey::C));

        assert_eq!(out.outcome, Outcome::Unresolved(Unresolvable::SectionCount { found: 4 }));
        assert!(!out.changed());
        assert_eq!(out.text, broken);
    }

    #[test]
    fn test_document_without_guide_is_unresolved() {
        let engine = Engine::with_defaults().unwrap();
        let locale = en();
        let text = "<html><body><p>No guide here.</p></body></html>\n";
        let out = rewrite(&engine, text, locale.vocabulary(), locale.variant(VariantKey::B));
        assert_eq!(out.outcome, Outcome::Unresolved(Unresolvable::SectionCount { found: 0 }));
    }
}
