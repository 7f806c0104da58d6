//! Class attribute substitution inside section spans.
//!
//! Heading rules look at the section's own heading element. The other
//! scopes scan open tags inside the section span. Per element, the first
//! rule that applies wins, so a rule's output is never fed to another rule.

use crate::document::Document;
use crate::engine::Engine;
use crate::markup::{OpenTag, close_tags, open_tags};
use crate::segment::{Section, Segmentation};
use crate::variants::{RuleScope, VariantSpec};

use super::edits::Edit;

/// Edits for every attribute rule of `variant` that applies within the
/// located sections.
pub fn style_edits(
    engine: &Engine,
    doc: &Document,
    segmentation: &Segmentation,
    variant: &VariantSpec,
) -> Vec<Edit> {
    if variant.rules.is_empty() {
        return Vec::new();
    }

    let mut edits = Vec::new();
    for section in &segmentation.sections {
        if let Some(edit) = heading_edit(doc, section, variant) {
            edits.push(edit);
        }
        edits.extend(body_edits(engine, doc, section, variant));
    }
    edits
}

fn heading_edit(doc: &Document, section: &Section, variant: &VariantSpec) -> Option<Edit> {
    let range = section.heading.class.clone();
    let class = &doc.text()[range.clone()];
    variant
        .rules_for(RuleScope::Heading)
        .find_map(|rule| rule.rewrite_class(class))
        .map(|class| Edit::replace(range, class))
}

fn body_edits(engine: &Engine, doc: &Document, section: &Section, variant: &VariantSpec) -> Vec<Edit> {
    let grammar = engine.grammar();
    let span = doc.byte_span(section.lines());
    let offset = span.start;
    let body = &doc.text()[span];

    // Offsets right after each question close tag, for answer detection.
    let question_ends: Vec<usize> = close_tags(body, &grammar.question_tag).map(|r| r.end).collect();
    let follows_question = |tag: &OpenTag| {
        let before = body[..tag.range.start].trim_end().len();
        question_ends.binary_search(&before).is_ok()
    };

    let mut edits = Vec::new();
    for tag in open_tags(body) {
        let scope = if grammar.is_list_tag(tag.name) {
            RuleScope::List
        } else if tag.is(&grammar.block_tag) {
            RuleScope::QaContainer
        } else if tag.is(&grammar.question_tag) {
            RuleScope::QaQuestion
        } else if tag.is(&grammar.answer_tag) && follows_question(&tag) {
            RuleScope::QaAnswer
        } else {
            continue;
        };

        let Some(class) = variant.rules_for(scope).find_map(|r| r.rewrite_class(tag.class_value()))
        else {
            continue;
        };

        let edit = match &tag.class {
            Some((range, _)) => Edit::replace(offset + range.start..offset + range.end, class),
            None => Edit::insert(offset + tag.name_end, format!(r#" class="{class}""#)),
        };
        edits.push(edit);
    }
    edits
}
