//! Shared scoring types and constants for the matchers.

/// Score when the normalized query exactly equals a keyword.
pub const SCORE_EXACT: u32 = 100;

/// Score for substring containment in either direction.
pub const SCORE_SUBSTRING: u32 = 50;

/// Per-word score when every word of a multi-word keyword is present.
pub const SCORE_ALL_WORDS: u32 = 30;

/// Per-word score for a partial overlap (FAQ) or a single-word fuzzy hit
/// (navigation).
pub const SCORE_PARTIAL: u32 = 10;

/// A scored lexicon entry produced by one matcher pass.
///
/// Borrows the entry from the lexicon; callers clone what they need into
/// their own result types and drop the candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCandidate<'a, E: ?Sized> {
    /// The lexicon entry this score belongs to.
    pub entry: &'a E,
    /// Total score summed over all of the entry's keywords.
    pub score: u32,
    /// The keywords that contributed to the score, in entry order.
    pub matched_keywords: Vec<String>,
}

/// Fold candidates down to the strictly-highest-scoring one.
///
/// Replacement happens only on strict `>`, so on a tie the entry seen first
/// (lexicon order) wins.
pub(crate) fn best_candidate<'a, E: ?Sized>(
    candidates: impl Iterator<Item = MatchCandidate<'a, E>>,
) -> Option<MatchCandidate<'a, E>> {
    candidates.fold(None, |best, candidate| match best {
        Some(ref current) if candidate.score > current.score => Some(candidate),
        Some(current) => Some(current),
        None => Some(candidate),
    })
}
