//! Deterministic rewriting of the guide sections of generated tool pages.
//!
//! The pure engine lives in [`labels`], [`segment`] and [`rewrite`]. The
//! [`config`], [`site`] and [`batch`] modules wrap it for whole-site runs.

pub mod batch;
pub mod config;
pub mod document;
pub mod engine;
pub mod labels;
pub mod markup;
pub mod rewrite;
pub mod segment;
pub mod site;
pub mod variants;

pub use document::Document;
pub use engine::Engine;
pub use labels::{HeadingOccurrence, HeadingVocabulary, locate_headings};
pub use rewrite::{Outcome, Rewrite, rewrite, rewrite_text};
pub use segment::{Segmentation, Unresolvable, segment};
pub use variants::{Locale, VariantKey, VariantSpec};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
