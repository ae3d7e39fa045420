//! Property-based integration tests for the deterministic matchers.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use proptest::prelude::*;
use siteguide_core::matching::{
    match_faq, match_navigation, FAQ_SCORE_THRESHOLD, NAVIGATION_SCORE_THRESHOLD,
};
use siteguide_core::{FaqEntry, Lexicon, NavigationEntry};

// =============================================================================
// Generators
// =============================================================================

/// Generates a lowercase word long enough to survive tokenization.
fn arb_word() -> impl Strategy<Value = String> {
    "[a-z]{3,10}"
}

/// Generates a keyword phrase of 1-3 words.
fn arb_keyword() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_word(), 1..=3).prop_map(|words| words.join(" "))
}

/// Generates a small valid lexicon.
fn arb_lexicon() -> impl Strategy<Value = Lexicon> {
    (
        prop::collection::vec(prop::collection::vec(arb_keyword(), 1..=4), 1..=5),
        prop::collection::vec(prop::collection::vec(arb_keyword(), 1..=4), 1..=5),
    )
        .prop_map(|(nav_keywords, faq_keywords)| {
            let navigation = nav_keywords
                .into_iter()
                .enumerate()
                .map(|(i, keywords)| NavigationEntry {
                    url: format!("/section-{}", i),
                    intent: format!("Section {}", i),
                    keywords,
                })
                .collect();
            let faqs = faq_keywords
                .into_iter()
                .enumerate()
                .map(|(i, keywords)| FaqEntry {
                    id: format!("faq-{}", i),
                    question: format!("Question {}?", i),
                    category: "Umumiy".to_string(),
                    answer: format!("Answer {}", i),
                    keywords,
                })
                .collect();
            Lexicon::new(navigation, faqs).unwrap()
        })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Matching is a pure function: the same query always produces the same
    /// candidate, entry and score included.
    #[test]
    fn matchers_are_deterministic(lexicon in arb_lexicon(), query in "[a-z ]{0,40}") {
        let first_faq = match_faq(&lexicon, &query);
        let second_faq = match_faq(&lexicon, &query);
        prop_assert_eq!(first_faq, second_faq);

        let first_nav = match_navigation(&lexicon, &query);
        let second_nav = match_navigation(&lexicon, &query);
        prop_assert_eq!(first_nav, second_nav);
    }

    /// A query exactly equal to a stored FAQ keyword (case aside) always
    /// matches that FAQ with at least the exact-match score.
    #[test]
    fn exact_faq_keyword_always_matches(lexicon in arb_lexicon(), index in 0usize..5, keyword_index in 0usize..4) {
        let faqs = lexicon.faqs();
        let faq = &faqs[index % faqs.len()];
        let keyword = &faq.keywords[keyword_index % faq.keywords.len()];

        let candidate = match_faq(&lexicon, &keyword.to_uppercase());
        prop_assert!(candidate.is_some());
        prop_assert!(candidate.unwrap().score >= 100);
    }

    /// Accepted candidates never fall below their tier's threshold.
    #[test]
    fn accepted_scores_meet_thresholds(lexicon in arb_lexicon(), query in "[a-z ]{0,40}") {
        if let Some(candidate) = match_faq(&lexicon, &query) {
            prop_assert!(candidate.score >= FAQ_SCORE_THRESHOLD);
            prop_assert!(!candidate.matched_keywords.is_empty());
        }
        if let Some(candidate) = match_navigation(&lexicon, &query) {
            prop_assert!(candidate.score >= NAVIGATION_SCORE_THRESHOLD);
            prop_assert!(!candidate.matched_keywords.is_empty());
        }
    }

    /// With every entry sharing one keyword set, the first entry wins.
    #[test]
    fn identical_entries_tie_break_to_first(keywords in prop::collection::vec(arb_word(), 1..=3), query_extra in arb_word()) {
        let navigation = (0..3)
            .map(|i| NavigationEntry {
                url: format!("/tie-{}", i),
                intent: format!("Tie {}", i),
                keywords: keywords.clone(),
            })
            .collect();
        let faqs = vec![FaqEntry {
            id: "faq-0".to_string(),
            question: "Q?".to_string(),
            category: "Umumiy".to_string(),
            answer: "A".to_string(),
            keywords: vec!["zzzz".to_string()],
        }];
        let lexicon = Lexicon::new(navigation, faqs).unwrap();

        let query = format!("{} {}", keywords[0], query_extra);
        if let Some(candidate) = match_navigation(&lexicon, &query) {
            prop_assert_eq!(candidate.entry.url.as_str(), "/tie-0");
        }
    }
}
