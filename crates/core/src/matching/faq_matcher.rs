//! FAQ matcher - scores the lexicon's FAQ entries against a query.

use log::debug;

use super::matching_model::{
    best_candidate, MatchCandidate, SCORE_ALL_WORDS, SCORE_EXACT, SCORE_PARTIAL, SCORE_SUBSTRING,
};
use super::tokenize::{normalize, query_tokens, FAQ_STOP_WORDS};
use crate::lexicon::{FaqEntry, Lexicon};

/// Minimum total score an FAQ entry needs to be accepted. Higher than the
/// navigation threshold: FAQ keywords are longer phrases and a weak overlap
/// should fall through to the navigation tier instead.
pub const FAQ_SCORE_THRESHOLD: u32 = 30;

/// Match a query against the lexicon's FAQ entries.
///
/// Returns the strictly-highest-scoring entry at or above
/// [`FAQ_SCORE_THRESHOLD`], or `None` when every entry falls below it.
/// Entries earlier in the lexicon win ties.
pub fn match_faq<'a>(lexicon: &'a Lexicon, query: &str) -> Option<MatchCandidate<'a, FaqEntry>> {
    let q = normalize(query);
    let tokens = query_tokens(&q, FAQ_STOP_WORDS);

    let best = best_candidate(
        lexicon
            .faqs()
            .iter()
            .map(|faq| score_entry(faq, &q, &tokens)),
    )
    .filter(|candidate| candidate.score >= FAQ_SCORE_THRESHOLD);

    if let Some(candidate) = &best {
        debug!(
            "FAQ match: {} (score: {}, keywords: {})",
            candidate.entry.question,
            candidate.score,
            candidate.matched_keywords.join(", ")
        );
    }

    best
}

fn score_entry<'a>(
    faq: &'a FaqEntry,
    query: &str,
    tokens: &[&str],
) -> MatchCandidate<'a, FaqEntry> {
    let mut score = 0;
    let mut matched_keywords = Vec::new();

    for keyword in &faq.keywords {
        let keyword_lower = normalize(keyword);
        if let Some(points) = score_keyword(&keyword_lower, query, tokens) {
            score += points;
            matched_keywords.push(keyword.clone());
        }
    }

    MatchCandidate {
        entry: faq,
        score,
        matched_keywords,
    }
}

/// Score one keyword against the query. The rules are mutually exclusive and
/// evaluated in priority order; the first applicable rule wins.
fn score_keyword(keyword: &str, query: &str, tokens: &[&str]) -> Option<u32> {
    if query == keyword {
        return Some(SCORE_EXACT);
    }
    if query.contains(keyword) || keyword.contains(query) {
        return Some(SCORE_SUBSTRING);
    }

    let keyword_words: Vec<&str> = keyword.split_whitespace().collect();
    let present = keyword_words
        .iter()
        .filter(|word| tokens.contains(*word))
        .count();

    if present > 0 && keyword_words.len() > 1 && present == keyword_words.len() {
        return Some(SCORE_ALL_WORDS * keyword_words.len() as u32);
    }
    if present > 0 {
        return Some(SCORE_PARTIAL * present as u32);
    }
    None
}
