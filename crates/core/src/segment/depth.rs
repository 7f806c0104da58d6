//! Depth balancing for the open-ended last section.
//!
//! The scan keeps a signed balance of block opens minus closes, starting
//! with the delta of the heading line from the heading element onwards.
//! Markup before the heading on its line belongs to the previous section and
//! is not counted. The scan stops at the first line after the heading that
//! brings the balance down to zero or below:
//!
//! * positive to exactly zero: the line closes the section's outermost
//!   block and belongs to the section;
//! * zero to negative: the line closes a container the section does not
//!   own and stays outside;
//! * positive to negative: one line closes both, which is ambiguous.

use crate::document::Document;
use crate::labels::HeadingElement;
use crate::markup::tag_balance;
use crate::segment::types::Unresolvable;

/// Outcome of feeding one line to the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStep {
    Continue,
    /// Section ends before or after the fed line.
    Closed { include_line: bool },
    Ambiguous,
}

#[derive(Debug, Clone)]
pub struct DepthScan {
    balance: i64,
    scanned: usize,
    window: usize,
}

impl DepthScan {
    pub fn new(heading_opens: usize, heading_closes: usize, window: usize) -> Self {
        Self { balance: signed(heading_opens) - signed(heading_closes), scanned: 0, window }
    }

    pub fn scanned(&self) -> usize {
        self.scanned
    }

    pub fn exhausted(&self) -> bool {
        self.scanned >= self.window
    }

    pub fn feed(&mut self, opens: usize, closes: usize) -> ScanStep {
        let before = self.balance;
        self.balance += signed(opens) - signed(closes);
        self.scanned += 1;

        match (before, self.balance) {
            (b, a) if a < 0 && b > 0 => ScanStep::Ambiguous,
            (_, a) if a < 0 => ScanStep::Closed { include_line: false },
            (b, 0) if b > 0 => ScanStep::Closed { include_line: true },
            _ => ScanStep::Continue,
        }
    }
}

fn signed(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// Part of the heading's line before the heading element.
pub fn heading_prefix<'a>(doc: &Document<'a>, heading: &HeadingElement) -> &'a str {
    let (head, _) = split_heading_line(doc, heading);
    head
}

fn split_heading_line<'a>(doc: &Document<'a>, heading: &HeadingElement) -> (&'a str, &'a str) {
    let line = doc.line(heading.line);
    let start = doc.line_offset(heading.line);
    // The class value sits inside the heading's opening tag.
    let at = line[..heading.class.start.saturating_sub(start).min(line.len())]
        .rfind('<')
        .unwrap_or(0);
    line.split_at(at)
}

/// Find the first line past the section headed by `heading`.
pub fn tail_end(
    doc: &Document,
    heading: &HeadingElement,
    block_tag: &str,
    window: usize,
) -> Result<usize, Unresolvable> {
    let heading_line = heading.line;
    let (_, own) = split_heading_line(doc, heading);
    let (opens, closes) = tag_balance(own, block_tag);
    let mut scan = DepthScan::new(opens, closes, window);

    let mut line = heading_line + 1;
    while line < doc.line_count() && !scan.exhausted() {
        let (opens, closes) = tag_balance(doc.line(line), block_tag);
        match scan.feed(opens, closes) {
            ScanStep::Continue => {}
            ScanStep::Closed { include_line: true } => return Ok(line + 1),
            ScanStep::Closed { include_line: false } => return Ok(line),
            ScanStep::Ambiguous => return Err(Unresolvable::AmbiguousClose { line }),
        }
        line += 1;
    }

    Err(Unresolvable::UnterminatedNesting { heading_line, scanned: scan.scanned() })
}
