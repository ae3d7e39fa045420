//! Lexicon store - immutable FAQ and navigation tables.
//!
//! The lexicon is loaded once at startup and never mutated afterwards, so it
//! can be shared across concurrent requests without locking.

mod lexicon_model;

pub use lexicon_model::{FaqEntry, Lexicon, NavigationEntry};
