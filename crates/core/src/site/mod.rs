//! Site layout: which pages exist and where their translations live.

pub mod walker;

pub use walker::{SitePage, SiteWalker, SiteWalkerError};
