//! Markup conventions and tag scanning shared by the matcher, the segmenter
//! and the rewriters.

pub mod grammar;
pub mod tags;

pub use grammar::{Grammar, GrammarError, HeadingSignature};
pub use tags::{OpenTag, close_tags, open_tags, tag_balance};
