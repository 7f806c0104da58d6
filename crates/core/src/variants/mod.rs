//! Presentation variants and locale tables.
//!
//! A variant bundles everything needed to rewrite one guide: a label map,
//! an optional section permutation, an optional intro text rule and a list
//! of class attribute rules. A locale pairs a heading vocabulary with the
//! four variants `A` to `D` expressed in that language.

mod builtin;

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::labels::{HeadingVocabulary, SECTION_COUNT, VocabularyError};

/// Names accepted by [`Locale::builtin`].
pub const BUILTIN_LOCALES: [&str; 2] = ["ko", "en"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VariantError {
    #[error("unknown variant key '{0}' (expected A, B, C or D)")]
    UnknownKey(String),

    #[error("invalid permutation {0:?}: expected each of 0..5 exactly once")]
    InvalidPermutation(Vec<usize>),

    #[error("unknown locale '{0}' (built-in: ko, en)")]
    UnknownLocale(String),

    #[error("variant {key} maps '{label}', which is not a standard heading")]
    LabelNotInVocabulary { key: VariantKey, label: String },

    #[error("variant {key} produces an invalid vocabulary: {source}")]
    Vocabulary {
        key: VariantKey,
        #[source]
        source: VocabularyError,
    },

    #[error("locale '{locale}' defines variant {found} in slot {expected}")]
    MisplacedVariant { locale: String, expected: VariantKey, found: VariantKey },
}

/// One of the four presentation variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VariantKey {
    A,
    B,
    C,
    D,
}

impl VariantKey {
    pub const ALL: [VariantKey; 4] = [VariantKey::A, VariantKey::B, VariantKey::C, VariantKey::D];

    /// Variant for the page at `position` in sorted enumeration order.
    pub fn for_position(position: usize) -> Self {
        Self::ALL[position % Self::ALL.len()]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VariantKey::A => "A",
            VariantKey::B => "B",
            VariantKey::C => "C",
            VariantKey::D => "D",
        }
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariantKey {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(VariantKey::A),
            "B" => Ok(VariantKey::B),
            "C" => Ok(VariantKey::C),
            "D" => Ok(VariantKey::D),
            _ => Err(VariantError::UnknownKey(s.to_string())),
        }
    }
}

/// Section order: entry `i` is the canonical index emitted at position `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permutation([usize; SECTION_COUNT]);

impl Permutation {
    pub fn new(order: &[usize]) -> Result<Self, VariantError> {
        let invalid = || VariantError::InvalidPermutation(order.to_vec());

        let slots: [usize; SECTION_COUNT] = order.try_into().map_err(|_| invalid())?;
        let distinct: HashSet<usize> = slots.iter().copied().collect();
        if distinct.len() != SECTION_COUNT || slots.iter().any(|&i| i >= SECTION_COUNT) {
            return Err(invalid());
        }

        Ok(Self(slots))
    }

    pub fn order(&self) -> &[usize] {
        &self.0
    }

    pub fn is_identity(&self) -> bool {
        self.0.iter().enumerate().all(|(pos, &idx)| pos == idx)
    }
}

/// Rewrites an intro heading of the form `prefix + middle + suffix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroRule {
    pub prefix: String,
    pub suffix: String,
    pub replacement_prefix: String,
    pub replacement_suffix: String,
}

impl IntroRule {
    pub fn new(
        prefix: impl Into<String>,
        suffix: impl Into<String>,
        replacement_prefix: impl Into<String>,
        replacement_suffix: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
            replacement_prefix: replacement_prefix.into(),
            replacement_suffix: replacement_suffix.into(),
        }
    }

    /// New heading text, or `None` if `text` does not have the expected shape.
    pub fn apply(&self, text: &str) -> Option<String> {
        let middle = text.strip_prefix(&self.prefix)?.strip_suffix(&self.suffix)?;
        if middle.is_empty() {
            return None;
        }
        Some(format!("{}{middle}{}", self.replacement_prefix, self.replacement_suffix))
    }
}

/// Which elements an attribute rule looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleScope {
    /// The section heading element; substring match.
    Heading,
    /// List open tags; substring match.
    List,
    /// Block open tags; exact class match.
    QaContainer,
    /// Question open tags; exact class match.
    QaQuestion,
    /// Answer open tag right after a question close; exact class match,
    /// where an empty `from` means "no class attribute".
    QaAnswer,
}

impl RuleScope {
    /// Whether `from` must equal the whole class value.
    pub fn is_exact(self) -> bool {
        matches!(self, RuleScope::QaContainer | RuleScope::QaQuestion | RuleScope::QaAnswer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRule {
    pub scope: RuleScope,
    pub from: String,
    pub to: String,
}

impl AttributeRule {
    pub fn new(scope: RuleScope, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self { scope, from: from.into(), to: to.into() }
    }

    /// Rewritten class value, or `None` when the rule does not apply.
    ///
    /// Substring rules replace the first occurrence and skip classes that
    /// already carry the replacement, which keeps them from compounding.
    pub fn rewrite_class(&self, class: &str) -> Option<String> {
        if self.scope.is_exact() {
            return (class == self.from).then(|| self.to.clone());
        }
        if self.from.is_empty() || class.contains(self.to.as_str()) {
            return None;
        }
        class.contains(self.from.as_str()).then(|| class.replacen(&self.from, &self.to, 1))
    }
}

/// Everything one presentation variant changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSpec {
    pub key: VariantKey,
    /// Canonical label to replacement label.
    pub labels: BTreeMap<String, String>,
    pub permutation: Option<Permutation>,
    pub intro: Option<IntroRule>,
    pub rules: Vec<AttributeRule>,
}

impl VariantSpec {
    /// A variant that changes nothing.
    pub fn identity(key: VariantKey) -> Self {
        Self { key, labels: BTreeMap::new(), permutation: None, intro: None, rules: Vec::new() }
    }

    pub fn with_labels<I, K, V>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels.extend(labels.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn with_permutation(mut self, permutation: Permutation) -> Self {
        self.permutation = Some(permutation);
        self
    }

    pub fn with_intro(mut self, intro: IntroRule) -> Self {
        self.intro = Some(intro);
        self
    }

    pub fn with_rule(mut self, scope: RuleScope, from: &str, to: &str) -> Self {
        self.rules.push(AttributeRule::new(scope, from, to));
        self
    }

    pub fn with_rules(mut self, rules: impl IntoIterator<Item = AttributeRule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// True when applying this variant cannot change a document.
    pub fn is_identity(&self) -> bool {
        self.labels.iter().all(|(from, to)| from == to)
            && self.permutation.is_none_or(|p| p.is_identity())
            && self.intro.is_none()
            && self.rules.is_empty()
    }

    /// Whether the in-place pass has anything to do.
    pub fn substitutes(&self) -> bool {
        self.labels.iter().any(|(from, to)| from != to)
            || self.intro.is_some()
            || !self.rules.is_empty()
    }

    /// Permutation that actually moves sections.
    pub fn reorders(&self) -> Option<&Permutation> {
        self.permutation.as_ref().filter(|p| !p.is_identity())
    }

    pub fn rules_for(&self, scope: RuleScope) -> impl Iterator<Item = &AttributeRule> {
        self.rules.iter().filter(move |r| r.scope == scope)
    }

    /// Vocabulary as it reads after the label map is applied.
    pub fn relabeled_vocabulary(
        &self,
        vocabulary: &HeadingVocabulary,
    ) -> Result<HeadingVocabulary, VariantError> {
        vocabulary
            .relabeled(&self.labels)
            .map_err(|source| VariantError::Vocabulary { key: self.key, source })
    }

    /// Check the variant against the vocabulary it will be used with.
    pub fn validate(&self, vocabulary: &HeadingVocabulary) -> Result<(), VariantError> {
        if let Some(label) = self.labels.keys().find(|l| vocabulary.index_of(l).is_none()) {
            return Err(VariantError::LabelNotInVocabulary { key: self.key, label: label.clone() });
        }
        self.relabeled_vocabulary(vocabulary).map(|_| ())
    }
}

/// A heading vocabulary with its four variants.
#[derive(Debug, Clone)]
pub struct Locale {
    name: String,
    vocabulary: HeadingVocabulary,
    variants: [VariantSpec; 4],
}

impl Locale {
    pub fn new(
        name: impl Into<String>,
        vocabulary: HeadingVocabulary,
        variants: [VariantSpec; 4],
    ) -> Result<Self, VariantError> {
        let name = name.into();
        for (expected, spec) in VariantKey::ALL.into_iter().zip(&variants) {
            if spec.key != expected {
                return Err(VariantError::MisplacedVariant {
                    locale: name,
                    expected,
                    found: spec.key,
                });
            }
            spec.validate(&vocabulary)?;
        }
        Ok(Self { name, vocabulary, variants })
    }

    /// One of the built-in locales (`ko`, `en`).
    pub fn builtin(name: &str) -> Result<Self, VariantError> {
        match name {
            "ko" => Self::new("ko", HeadingVocabulary::korean(), builtin::korean_variants()),
            "en" => Self::new("en", HeadingVocabulary::english(), builtin::english_variants()),
            other => Err(VariantError::UnknownLocale(other.to_string())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vocabulary(&self) -> &HeadingVocabulary {
        &self.vocabulary
    }

    pub fn variant(&self, key: VariantKey) -> &VariantSpec {
        &self.variants[key.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_assignment_cycles() {
        let keys: Vec<_> = (0..6).map(VariantKey::for_position).collect();
        use VariantKey::*;
        assert_eq!(keys, vec![A, B, C, D, A, B]);
    }

    #[test]
    fn test_variant_key_parse() {
        assert_eq!("c".parse::<VariantKey>(), Ok(VariantKey::C));
        assert_eq!(" D ".parse::<VariantKey>(), Ok(VariantKey::D));
        assert_eq!("E".parse::<VariantKey>(), Err(VariantError::UnknownKey("E".to_string())));
        assert_eq!(VariantKey::B.to_string(), "B");
    }

    #[test]
    fn test_permutation_validation() {
        assert!(Permutation::new(&[1, 0, 2, 4, 3]).is_ok());
        assert!(Permutation::new(&[0, 1, 2, 3]).is_err());
        assert!(Permutation::new(&[0, 0, 1, 2, 3]).is_err());
        assert!(Permutation::new(&[0, 1, 2, 3, 5]).is_err());
        assert!(Permutation::new(&[0, 1, 2, 3, 4]).unwrap().is_identity());
    }

    #[test]
    fn test_intro_rule_needs_middle() {
        let rule = IntroRule::new("What is ", "?", "About ", "");
        assert_eq!(rule.apply("What is JSON Formatter?"), Some("About JSON Formatter".into()));
        assert_eq!(rule.apply("What is ?"), None);
        assert_eq!(rule.apply("Why JSON?"), None);

        let ko = IntroRule::new("", "이란?", "", " 소개");
        assert_eq!(ko.apply("JSON 포맷터란?"), None);
        assert_eq!(ko.apply("JSON 포맷터이란?"), Some("JSON 포맷터 소개".into()));
        assert_eq!(ko.apply("이란?"), None);
    }

    #[test]
    fn test_substring_rule_does_not_compound() {
        let rule = AttributeRule::new(
            RuleScope::Heading,
            "text-lg font-semibold mt-6 mb-3",
            "text-lg font-semibold mt-6 mb-3 pb-2 border-b",
        );
        let once = rule.rewrite_class("text-lg font-semibold mt-6 mb-3").unwrap();
        assert_eq!(once, "text-lg font-semibold mt-6 mb-3 pb-2 border-b");
        assert_eq!(rule.rewrite_class(&once), None);
    }

    #[test]
    fn test_exact_rule_requires_whole_class() {
        let rule = AttributeRule::new(RuleScope::QaQuestion, "font-medium", "font-semibold");
        assert_eq!(rule.rewrite_class("font-medium"), Some("font-semibold".into()));
        assert_eq!(rule.rewrite_class("font-medium text-gray-900"), None);
    }

    #[test]
    fn test_identity_detection() {
        assert!(VariantSpec::identity(VariantKey::A).is_identity());
        let noop = VariantSpec::identity(VariantKey::B)
            .with_labels([("Key Features", "Key Features")])
            .with_permutation(Permutation::new(&[0, 1, 2, 3, 4]).unwrap());
        assert!(noop.is_identity());
        let relabel = VariantSpec::identity(VariantKey::B).with_labels([("FAQ", "Q&A")]);
        assert!(!relabel.is_identity());
    }

    #[test]
    fn test_builtin_locales() {
        for name in BUILTIN_LOCALES {
            let locale = Locale::builtin(name).unwrap();
            assert!(locale.variant(VariantKey::A).is_identity());
            for key in [VariantKey::B, VariantKey::C, VariantKey::D] {
                assert_eq!(locale.variant(key).key, key);
                assert!(!locale.variant(key).is_identity());
            }
        }
        assert_eq!(
            Locale::builtin("fr").unwrap_err(),
            VariantError::UnknownLocale("fr".to_string())
        );
    }

    #[test]
    fn test_label_outside_vocabulary_is_rejected() {
        let spec = VariantSpec::identity(VariantKey::B).with_labels([("Nope", "Still nope")]);
        let err = spec.validate(&HeadingVocabulary::english()).unwrap_err();
        assert!(matches!(err, VariantError::LabelNotInVocabulary { .. }));
    }

    #[test]
    fn test_colliding_relabel_is_rejected() {
        let spec = VariantSpec::identity(VariantKey::B).with_labels([("Key Features", "How to Use")]);
        let err = spec.validate(&HeadingVocabulary::english()).unwrap_err();
        assert!(matches!(err, VariantError::Vocabulary { key: VariantKey::B, .. }));
    }
}
