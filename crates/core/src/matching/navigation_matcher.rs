//! Navigation matcher - scores the lexicon's navigation entries against a query.
//!
//! Related to the FAQ matcher but deliberately fuzzier: navigation keywords
//! are short, so word-level matching uses substring containment in either
//! direction (the truncated token "monitor" still hits the keyword
//! "monitoring") and the acceptance threshold sits at a single-word hit.

use log::debug;

use super::matching_model::{
    best_candidate, MatchCandidate, SCORE_ALL_WORDS, SCORE_EXACT, SCORE_PARTIAL, SCORE_SUBSTRING,
};
use super::tokenize::{normalize, query_tokens, NAVIGATION_STOP_WORDS};
use crate::lexicon::{Lexicon, NavigationEntry};

/// Minimum total score a navigation entry needs to be accepted. One fuzzy
/// single-word hit is enough.
pub const NAVIGATION_SCORE_THRESHOLD: u32 = 10;

/// Match a query against the lexicon's navigation entries.
///
/// Returns the strictly-highest-scoring entry at or above
/// [`NAVIGATION_SCORE_THRESHOLD`], or `None` when every entry falls below
/// it. Entries earlier in the lexicon win ties.
pub fn match_navigation<'a>(
    lexicon: &'a Lexicon,
    query: &str,
) -> Option<MatchCandidate<'a, NavigationEntry>> {
    let q = normalize(query);
    let tokens = query_tokens(&q, NAVIGATION_STOP_WORDS);

    let best = best_candidate(
        lexicon
            .navigation()
            .iter()
            .map(|entry| score_entry(entry, &q, &tokens)),
    )
    .filter(|candidate| candidate.score >= NAVIGATION_SCORE_THRESHOLD);

    if let Some(candidate) = &best {
        debug!(
            "Navigation match: {} (score: {}, keywords: {})",
            candidate.entry.intent,
            candidate.score,
            candidate.matched_keywords.join(", ")
        );
    }

    best
}

fn score_entry<'a>(
    entry: &'a NavigationEntry,
    query: &str,
    tokens: &[&str],
) -> MatchCandidate<'a, NavigationEntry> {
    let mut score = 0;
    let mut matched_keywords = Vec::new();

    for keyword in &entry.keywords {
        let keyword_lower = normalize(keyword);
        if let Some(points) = score_keyword(&keyword_lower, query, tokens) {
            score += points;
            matched_keywords.push(keyword.clone());
        }
    }

    MatchCandidate {
        entry,
        score,
        matched_keywords,
    }
}

/// Score one keyword against the query; first applicable rule wins.
fn score_keyword(keyword: &str, query: &str, tokens: &[&str]) -> Option<u32> {
    if query == keyword {
        return Some(SCORE_EXACT);
    }
    if query.contains(keyword) || keyword.contains(query) {
        return Some(SCORE_SUBSTRING);
    }

    let keyword_words: Vec<&str> = keyword.split_whitespace().collect();
    if keyword_words.len() > 1
        && keyword_words
            .iter()
            .all(|word| tokens.iter().any(|token| fuzzy_word_match(token, word)))
    {
        return Some(SCORE_ALL_WORDS * keyword_words.len() as u32);
    }
    if keyword_words.len() == 1
        && tokens
            .iter()
            .any(|token| fuzzy_word_match(token, keyword_words[0]))
    {
        return Some(SCORE_PARTIAL);
    }
    None
}

/// Word-level fuzzy match: substring containment in either direction.
fn fuzzy_word_match(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}
