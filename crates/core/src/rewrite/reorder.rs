//! Whole-section permutation.

use crate::document::Document;
use crate::engine::Engine;
use crate::labels::{HeadingVocabulary, SECTION_COUNT, locate_headings};
use crate::segment::{Unresolvable, segment};
use crate::variants::Permutation;

/// Rebuild `text` with its sections in `permutation` order.
///
/// Sections are located with `vocabulary`, which must be the vocabulary the
/// text currently reads in. Spans are picked by canonical index, so a text
/// that is already in permuted order comes back identical.
pub fn reorder(
    engine: &Engine,
    text: &str,
    vocabulary: &HeadingVocabulary,
    permutation: &Permutation,
) -> Result<String, Unresolvable> {
    let doc = Document::new(text);
    let occurrences = locate_headings(&doc, vocabulary, engine.matcher());
    let segmentation = segment(&doc, &occurrences, engine)?;
    let region = doc.byte_span(segmentation.lines());

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..region.start]);

    for (position, &index) in permutation.order().iter().enumerate() {
        let section = segmentation
            .by_canonical(index)
            .ok_or(Unresolvable::SectionCount { found: segmentation.sections.len() })?;
        let span = &text[doc.byte_span(section.lines())];

        if position + 1 < SECTION_COUNT && !span.ends_with('\n') {
            return Err(Unresolvable::OpenEndedSpan { heading_line: section.heading_line });
        }
        out.push_str(span);
    }

    out.push_str(&text[region.end..]);
    Ok(out)
}
