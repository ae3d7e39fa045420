//! Siteguide AI - LLM fallback and resolution orchestration.
//!
//! This crate turns a free-text user query into one of three outcomes: a
//! canned FAQ answer, a site-navigation target, or not-found. Two
//! deterministic keyword tiers (from `siteguide-core`) run first; only when
//! both abstain is an external language model consulted, and its answer is
//! validated against the lexicon before being trusted.
//!
//! # Architecture
//!
//! - `detector`: Resolution orchestrator, the entry point the service calls
//! - `fallback`: LLM fallback resolver with prompt construction and URL validation
//! - `chat`: User-facing reply generation on top of a resolution
//! - `providers`: Narrow model-client boundary (rig-core OpenAI + test fake)
//! - `types`: Resolution DTOs and wire constants
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use siteguide_ai::{ModelSettings, NavigationDetector, OpenAiClient, Resolution};
//! use siteguide_core::Lexicon;
//!
//! let lexicon = Arc::new(Lexicon::bundled()?);
//! let model = Arc::new(OpenAiClient::new(api_key)?);
//! let detector = NavigationDetector::new(lexicon, model, ModelSettings::default());
//!
//! match detector.detect("narxlar haqida").await? {
//!     Resolution::Faq { faq, .. } => println!("{}", faq.answer),
//!     Resolution::Navigation { url, .. } => println!("go to {}", url),
//!     Resolution::NotFound { .. } => println!("no match"),
//! }
//! ```

pub mod chat;
pub mod detector;
pub mod error;
pub mod fallback;
pub mod providers;
pub mod types;

// Re-export main types for convenience
pub use chat::{ChatReply, ChatResponder};
pub use detector::NavigationDetector;
pub use error::AiError;
pub use fallback::{FallbackOutcome, FallbackResolver};
pub use providers::{
    FakeModelClient, ModelClientTrait, ModelReply, ModelRequest, ModelSettings, OpenAiClient,
    DEFAULT_MODEL,
};
pub use types::{
    Resolution, ResolutionMeta, KEYWORD_MATCH_STRATEGY, MAX_QUERY_CHARS, NOT_FOUND_SENTINEL,
};
