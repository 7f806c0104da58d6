//! Section segmentation.
//!
//! Turns heading occurrences into line spans. Sections 0..3 end where the
//! next heading starts. The last section has no following heading, so its
//! end comes from the depth scan in [`depth`]. Anything ambiguous is
//! reported as [`Unresolvable`] and never guessed.

pub mod depth;
mod types;

use std::collections::HashSet;

pub use types::*;

use crate::document::Document;
use crate::engine::Engine;
use crate::labels::{HeadingOccurrence, SECTION_COUNT};
use crate::markup::tag_balance;

/// Compute the spans of the five standard sections and the optional intro.
pub fn segment(
    doc: &Document,
    occurrences: &[HeadingOccurrence],
    engine: &Engine,
) -> Result<Segmentation, Unresolvable> {
    let mut sorted: Vec<&HeadingOccurrence> = occurrences.iter().collect();
    sorted.sort_by_key(|o| (o.line(), o.element.text.start));

    let mut seen = [false; SECTION_COUNT];
    for occ in &sorted {
        let slot = seen.get_mut(occ.canonical_index).ok_or(Unresolvable::SectionCount {
            found: occurrences.len(),
        })?;
        if *slot {
            return Err(Unresolvable::DuplicateLabel { label: occ.label.clone() });
        }
        *slot = true;
    }

    if sorted.len() != SECTION_COUNT {
        return Err(Unresolvable::SectionCount { found: sorted.len() });
    }

    if let Some(pair) = sorted.windows(2).find(|w| w[0].line() == w[1].line()) {
        return Err(Unresolvable::SharedHeadingLine { line: pair[0].line() });
    }

    // Spans are whole lines, so a heading line must not carry another
    // section's unbalanced blocks in front of the heading.
    let block_tag = &engine.grammar().block_tag;
    if let Some(occ) = sorted.iter().find(|o| {
        let (opens, closes) = tag_balance(depth::heading_prefix(doc, &o.element), block_tag);
        opens != closes
    }) {
        return Err(Unresolvable::HeadingLineNesting { line: occ.line() });
    }

    let last = &sorted[SECTION_COUNT - 1].element;
    let tail = depth::tail_end(doc, last, block_tag, engine.options().tail_window)?;

    let sections = sorted
        .iter()
        .enumerate()
        .map(|(i, occ)| {
            let body_end = sorted.get(i + 1).map_or(tail, |next| next.line());
            Section {
                canonical_index: occ.canonical_index,
                label: occ.label.clone(),
                heading: occ.element.clone(),
                heading_line: occ.line(),
                body_start: occ.line() + 1,
                body_end,
            }
        })
        .collect::<Vec<_>>();

    let labels: HashSet<&str> = sorted.iter().map(|o| o.label.as_str()).collect();
    let intro = find_intro(doc, sections[0].heading_line, &labels, engine);

    tracing::debug!(
        first = sections[0].heading_line,
        end = tail,
        intro = intro.as_ref().map(|i| i.heading_line),
        "segmented guide sections"
    );

    Ok(Segmentation { sections, intro })
}

/// Nearest heading-shaped element above `first_line`, within the lookback
/// window, whose text is not a standard label.
fn find_intro(
    doc: &Document,
    first_line: usize,
    labels: &HashSet<&str>,
    engine: &Engine,
) -> Option<IntroSection> {
    let floor = first_line.saturating_sub(engine.options().intro_lookback);

    (floor..first_line).rev().find_map(|line| {
        engine.matcher().elements(doc, line).into_iter().rev().find_map(|element| {
            let text = &doc.text()[element.text.clone()];
            (!labels.contains(text)).then(|| IntroSection {
                text: text.to_string(),
                heading: element,
                heading_line: line,
                body_end: first_line,
            })
        })
    })
}
