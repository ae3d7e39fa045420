//! Siteguide Core - Lexicon store and deterministic matchers.
//!
//! This crate contains the deterministic half of the assistant's resolution
//! pipeline: the immutable lexicon of FAQ and navigation entries, and the
//! keyword matchers that score queries against it. It is model-agnostic;
//! the LLM fallback and orchestration live in `siteguide-ai`.

pub mod errors;
pub mod lexicon;
pub mod matching;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

// Re-export common lexicon and matching types
pub use lexicon::{FaqEntry, Lexicon, NavigationEntry};
pub use matching::{match_faq, match_navigation, MatchCandidate};
