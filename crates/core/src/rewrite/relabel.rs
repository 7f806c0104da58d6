//! Heading text substitution.

use crate::segment::Segmentation;
use crate::variants::VariantSpec;

use super::edits::Edit;

/// Edits renaming each section heading per the label map, plus the intro
/// heading when the intro rule matches.
pub fn label_edits(segmentation: &Segmentation, variant: &VariantSpec) -> Vec<Edit> {
    let mut edits: Vec<Edit> = segmentation
        .sections
        .iter()
        .filter_map(|section| {
            let replacement = variant.labels.get(&section.label)?;
            (replacement != &section.label)
                .then(|| Edit::replace(section.heading.text.clone(), replacement.as_str()))
        })
        .collect();

    if let (Some(intro), Some(rule)) = (&segmentation.intro, &variant.intro) {
        match rule.apply(&intro.text) {
            Some(text) => edits.push(Edit::replace(intro.heading.text.clone(), text)),
            None => tracing::debug!(
                line = intro.heading_line + 1,
                text = %intro.text,
                "intro heading does not match intro rule"
            ),
        }
    }

    edits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::engine::Engine;
    use crate::labels::{HeadingVocabulary, locate_headings};
    use crate::rewrite::edits::splice;
    use crate::segment::segment;
    use crate::variants::{IntroRule, VariantKey};

    const TEXT: &str = r#"<h3 class="text-lg font-semibold mt-6 mb-3">What is Base64?</h3>
<p>Intro</p>
<h3 class="text-lg font-semibold mt-6 mb-3">Key Features</h3>
<p>a</p>
<h3 class="text-lg font-semibold mt-6 mb-3">How to Use</h3>
<p>b</p>
<h3 class="text-lg font-semibold mt-6 mb-3">Common Use Cases</h3>
<p>c</p>
<h3 class="text-lg font-semibold mt-6 mb-3">Tips and Notes</h3>
<p>d</p>
<h3 class="text-lg font-semibold mt-6 mb-3">Frequently Asked Questions</h3>
<p>e</p>
</div>
"#;

    fn edits_for(variant: &VariantSpec) -> String {
        let engine = Engine::with_defaults().unwrap();
        let doc = Document::new(TEXT);
        let occ = locate_headings(&doc, &HeadingVocabulary::english(), engine.matcher());
        let seg = segment(&doc, &occ, &engine).unwrap();
        splice(TEXT, label_edits(&seg, variant))
    }

    #[test]
    fn test_relabels_mapped_headings_only() {
        let variant = VariantSpec::identity(VariantKey::B)
            .with_labels([("How to Use", "User Guide"), ("Tips and Notes", "Tips and Notes")]);
        let out = edits_for(&variant);

        assert!(out.contains(">User Guide</h3>"));
        assert!(out.contains(">Tips and Notes</h3>"));
        assert_eq!(out.replace("User Guide", "How to Use"), TEXT);
    }

    #[test]
    fn test_intro_rule_rewrites_intro() {
        let variant = VariantSpec::identity(VariantKey::B)
            .with_intro(IntroRule::new("What is ", "?", "About ", ""));
        let out = edits_for(&variant);
        assert!(out.starts_with(r#"<h3 class="text-lg font-semibold mt-6 mb-3">About Base64</h3>"#));
    }

    #[test]
    fn test_unmatched_intro_rule_is_noop() {
        let variant = VariantSpec::identity(VariantKey::B)
            .with_intro(IntroRule::new("", "이란?", "", " 소개"));
        assert_eq!(edits_for(&variant), TEXT);
    }
}
