//! Built-in variant tables for the guide pages.
//!
//! Label maps and intro rules are per language. Class rules depend only on
//! the markup, so both locales share them.

use super::{AttributeRule, IntroRule, Permutation, RuleScope, VariantKey, VariantSpec};

const HEADING: &str = "text-lg font-semibold mt-6 mb-3";
const HEADING_ALT: &str = "text-lg font-semibold text-gray-900 dark:text-white mt-6 mb-3";
const UL: &str = "list-disc list-inside space-y-2";
const OL: &str = "list-decimal list-inside space-y-2";
const QA_CONTAINER: &str = "space-y-4";
const QUESTION: &str = "font-medium";
const QUESTION_ALT: &str = "font-medium text-gray-900 dark:text-white";
const ANSWER_BARE: &str = "";
const ANSWER: &str = "text-gray-600 dark:text-gray-400";

fn order(slots: [usize; 5]) -> Permutation {
    Permutation(slots)
}

fn style_rules(key: VariantKey) -> Vec<AttributeRule> {
    use RuleScope::*;

    let rule = AttributeRule::new;
    match key {
        VariantKey::A => Vec::new(),
        VariantKey::B => {
            let heading = "text-lg font-bold mt-8 mb-2";
            let question = "font-semibold text-gray-800 dark:text-gray-200";
            let answer = "text-gray-500 dark:text-gray-400 mt-1";
            vec![
                rule(Heading, HEADING_ALT, heading),
                rule(Heading, HEADING, heading),
                rule(List, UL, "list-disc pl-5 space-y-1.5"),
                rule(List, OL, "list-decimal pl-5 space-y-1.5"),
                rule(QaContainer, QA_CONTAINER, "space-y-3"),
                rule(QaQuestion, QUESTION, question),
                rule(QaQuestion, QUESTION_ALT, question),
                rule(QaAnswer, ANSWER_BARE, answer),
                rule(QaAnswer, ANSWER, answer),
            ]
        }
        VariantKey::C => {
            let heading = "text-base font-bold text-gray-800 dark:text-gray-200 mt-6 mb-2";
            let answer = "text-gray-600 dark:text-gray-400 pb-1";
            vec![
                rule(Heading, HEADING_ALT, heading),
                rule(Heading, HEADING, heading),
                rule(QaContainer, QA_CONTAINER, "divide-y divide-gray-100 dark:divide-gray-700"),
                rule(QaQuestion, QUESTION, "font-medium pt-3 first:pt-0"),
                rule(
                    QaQuestion,
                    QUESTION_ALT,
                    "font-medium pt-3 first:pt-0 text-gray-900 dark:text-white",
                ),
                rule(QaAnswer, ANSWER_BARE, answer),
                rule(QaAnswer, ANSWER, answer),
            ]
        }
        VariantKey::D => {
            let heading =
                "text-lg font-semibold mt-6 mb-3 pb-2 border-b border-gray-100 dark:border-gray-700";
            let answer = "text-gray-600 dark:text-gray-400 text-sm mt-1";
            vec![
                rule(Heading, HEADING_ALT, heading),
                rule(Heading, HEADING, heading),
                rule(List, UL, "list-disc ml-5 space-y-2"),
                rule(List, OL, "list-decimal ml-5 space-y-2"),
                rule(QaContainer, QA_CONTAINER, "space-y-5"),
                rule(QaQuestion, QUESTION, "font-semibold text-sm"),
                rule(QaQuestion, QUESTION_ALT, "font-semibold text-sm"),
                rule(QaAnswer, ANSWER_BARE, answer),
                rule(QaAnswer, ANSWER, answer),
            ]
        }
    }
}

fn variant(key: VariantKey, canonical: [&str; 5], labels: [&str; 5]) -> VariantSpec {
    VariantSpec::identity(key)
        .with_labels(canonical.into_iter().zip(labels))
        .with_rules(style_rules(key))
}

pub(super) fn korean_variants() -> [VariantSpec; 4] {
    let canonical = ["주요 기능", "사용 방법", "활용 사례", "팁과 주의사항", "자주 묻는 질문"];
    let intro = |replacement: &str| IntroRule::new("", "이란?", "", replacement);

    [
        VariantSpec::identity(VariantKey::A),
        variant(
            VariantKey::B,
            canonical,
            ["핵심 기능", "이용 가이드", "이런 상황에서 유용해요", "알아두면 좋은 점", "궁금한 점 모음"],
        )
        .with_intro(intro(" 소개"))
        .with_permutation(order([1, 0, 2, 4, 3])),
        variant(
            VariantKey::C,
            canonical,
            ["무엇을 할 수 있나요?", "사용 가이드", "추천 활용법", "참고사항", "Q&A"],
        )
        .with_intro(intro(" 알아보기")),
        variant(
            VariantKey::D,
            canonical,
            ["기능 소개", "시작하기", "활용 팁", "주의할 점", "자주 하는 질문"],
        )
        .with_intro(intro("에 대해서"))
        .with_permutation(order([1, 0, 3, 2, 4])),
    ]
}

pub(super) fn english_variants() -> [VariantSpec; 4] {
    let canonical = [
        "Key Features",
        "How to Use",
        "Common Use Cases",
        "Tips and Notes",
        "Frequently Asked Questions",
    ];
    let intro = |replacement: &str| IntroRule::new("What is ", "?", replacement, "");

    [
        VariantSpec::identity(VariantKey::A),
        variant(
            VariantKey::B,
            canonical,
            ["Core Features", "User Guide", "When This Comes in Handy", "Good to Know", "Common Questions"],
        )
        .with_intro(intro("About "))
        .with_permutation(order([1, 0, 2, 4, 3])),
        variant(
            VariantKey::C,
            canonical,
            [
                "What Can You Do?",
                "Getting Started Guide",
                "Recommended Uses",
                "Things to Keep in Mind",
                "Q&A",
            ],
        )
        .with_intro(intro("Understanding ")),
        variant(
            VariantKey::D,
            canonical,
            ["Feature Overview", "Quick Start", "Usage Tips", "Important Notes", "FAQ"],
        )
        .with_intro(intro("All About "))
        .with_permutation(order([1, 0, 3, 2, 4])),
    ]
}
