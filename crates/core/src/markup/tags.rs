//! Lightweight open/close tag scanning.
//!
//! This is not a parser. It finds `<name ...>` and `</name>` tokens on a
//! slice of text and exposes the `class` attribute of open tags with byte
//! ranges relative to the scanned slice.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static OPEN_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Captures:
    // 1: tag name
    // 2: attribute text (leading whitespace included)
    Regex::new(r"<([A-Za-z][A-Za-z0-9]*)(\s[^>]*)?>").unwrap()
});

static CLOSE_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</([A-Za-z][A-Za-z0-9]*)\s*>").unwrap());

static CLASS_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?:^|\s)class="([^"]*)""#).unwrap());

/// An opening tag found in scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenTag<'a> {
    pub name: &'a str,
    /// Whole `<...>` token.
    pub range: Range<usize>,
    /// Offset right after the tag name, where a missing class attribute
    /// would be inserted.
    pub name_end: usize,
    /// Range and value of the `class` attribute, if present.
    pub class: Option<(Range<usize>, &'a str)>,
}

impl OpenTag<'_> {
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Class value, treating a missing attribute as empty.
    pub fn class_value(&self) -> &str {
        self.class.as_ref().map_or("", |(_, value)| value)
    }
}

/// Iterate over the opening tags in `text`.
pub fn open_tags(text: &str) -> impl Iterator<Item = OpenTag<'_>> {
    OPEN_TAG_RE.captures_iter(text).filter_map(|cap| {
        let whole = cap.get(0)?;
        let name = cap.get(1)?;
        let class = cap.get(2).and_then(|attrs| {
            let value = CLASS_ATTR_RE.captures(attrs.as_str())?.get(1)?;
            let start = attrs.start() + value.start();
            Some((start..start + value.len(), value.as_str()))
        });

        Some(OpenTag { name: name.as_str(), range: whole.range(), name_end: name.end(), class })
    })
}

/// Count opening and closing tags named `tag` in `text`.
pub fn tag_balance(text: &str, tag: &str) -> (usize, usize) {
    let opens = open_tags(text).filter(|t| t.is(tag)).count();
    let closes = CLOSE_TAG_RE
        .captures_iter(text)
        .filter(|cap| cap.get(1).is_some_and(|m| m.as_str().eq_ignore_ascii_case(tag)))
        .count();
    (opens, closes)
}

/// Byte range of every `</tag>` token in `text`.
pub fn close_tags<'t>(text: &'t str, tag: &'t str) -> impl Iterator<Item = Range<usize>> + 't {
    CLOSE_TAG_RE
        .captures_iter(text)
        .filter(move |cap| cap.get(1).is_some_and(|m| m.as_str().eq_ignore_ascii_case(tag)))
        .filter_map(|cap| cap.get(0).map(|m| m.range()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_tag_with_class() {
        let line = r#"  <ul class="list-disc list-inside space-y-2">"#;
        let tags: Vec<_> = open_tags(line).collect();
        assert_eq!(tags.len(), 1);
        let tag = &tags[0];
        assert_eq!(tag.name, "ul");
        assert_eq!(tag.class_value(), "list-disc list-inside space-y-2");
        let (range, _) = tag.class.clone().unwrap();
        assert_eq!(&line[range], "list-disc list-inside space-y-2");
    }

    #[test]
    fn test_open_tag_without_attributes() {
        let tags: Vec<_> = open_tags("<p>Answer</p>").collect();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "p");
        assert_eq!(tags[0].name_end, 2);
        assert!(tags[0].class.is_none());
        assert_eq!(tags[0].class_value(), "");
    }

    #[test]
    fn test_data_class_is_not_class() {
        let tags: Vec<_> = open_tags(r#"<div data-class="x">"#).collect();
        assert!(tags[0].class.is_none());
    }

    #[test]
    fn test_tag_balance_ignores_similar_names() {
        let (opens, closes) =
            tag_balance(r#"<div class="a"><divider></divider></div></div>"#, "div");
        assert_eq!(opens, 1);
        assert_eq!(closes, 2);
    }

    #[test]
    fn test_close_tags_ranges() {
        let text = "<h4>Q</h4>\n<p>A</p>";
        let ranges: Vec<_> = close_tags(text, "h4").collect();
        assert_eq!(ranges, vec![5..10]);
    }
}
