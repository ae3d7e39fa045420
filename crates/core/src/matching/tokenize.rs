//! Query normalization and tokenization shared by both matchers.

/// Uzbek function words ignored by the FAQ matcher. Includes question words,
/// which carry no signal against FAQ keywords.
pub(crate) const FAQ_STOP_WORDS: &[&str] = &[
    "uchun", "bilan", "dan", "ga", "ni", "ning", "lar", "chi", "nima", "qanday", "bormi",
];

/// Narrower list for the navigation matcher; question words stay meaningful
/// there ("qanday hujjatlar bor" still targets the documents section).
pub(crate) const NAVIGATION_STOP_WORDS: &[&str] =
    &["uchun", "bilan", "dan", "ga", "ni", "ning", "lar", "chi"];

/// Lowercase and trim a raw query or keyword.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Split a normalized query into scoring tokens, dropping words of length
/// <= 2 and any word in the stop-word list.
pub fn query_tokens<'a>(normalized: &'a str, stop_words: &[&str]) -> Vec<&'a str> {
    normalized
        .split_whitespace()
        .filter(|word| word.chars().count() > 2 && !stop_words.contains(word))
        .collect()
}
