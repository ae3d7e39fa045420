//! Deterministic lexical matchers over the lexicon.
//!
//! Both matchers are pure functions of the lexicon and the query: same input,
//! same output, no I/O. The FAQ and navigation matchers share normalization
//! and the scoring ladder but deliberately differ in their word-level rules
//! and acceptance thresholds; both asymmetries are tuned policy, not
//! incidental (see `faq_matcher` and `navigation_matcher`).

mod faq_matcher;
mod matching_model;
mod navigation_matcher;
mod tokenize;

pub use faq_matcher::{match_faq, FAQ_SCORE_THRESHOLD};
pub use matching_model::{
    MatchCandidate, SCORE_ALL_WORDS, SCORE_EXACT, SCORE_PARTIAL, SCORE_SUBSTRING,
};
pub use navigation_matcher::{match_navigation, NAVIGATION_SCORE_THRESHOLD};
pub use tokenize::{normalize, query_tokens};
