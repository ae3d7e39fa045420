//! Resolution orchestration: FAQ keywords → navigation keywords → LLM
//! fallback, first success wins.
//!
//! The two keyword tiers are pure functions of the lexicon and the query, so
//! a query either resolves deterministically with zero token cost or exhausts
//! both tiers and pays for exactly one model call.

use std::sync::Arc;

use log::{debug, info};
use siteguide_core::{match_faq, match_navigation, Lexicon};

use crate::error::AiError;
use crate::fallback::{FallbackOutcome, FallbackResolver};
use crate::providers::{ModelClientTrait, ModelSettings};
use crate::types::{Resolution, ResolutionMeta, MAX_QUERY_CHARS};

/// Orchestrator for the three-tier resolution pipeline.
///
/// Holds a shared immutable lexicon and a model client; both are injected so
/// tests can swap in alternate lexicons and fake models.
pub struct NavigationDetector {
    lexicon: Arc<Lexicon>,
    fallback: FallbackResolver,
}

impl NavigationDetector {
    /// Create a new detector.
    pub fn new(
        lexicon: Arc<Lexicon>,
        model: Arc<dyn ModelClientTrait>,
        settings: ModelSettings,
    ) -> Self {
        let fallback = FallbackResolver::new(lexicon.clone(), model, settings);
        Self { lexicon, fallback }
    }

    /// Resolve a query into an FAQ answer, a navigation target, or not-found.
    ///
    /// Only the fallback tier can suspend; queries answered by the keyword
    /// tiers never touch the network. `Err` is returned solely for queries
    /// that violate the input bounds (empty or longer than
    /// [`MAX_QUERY_CHARS`]).
    pub async fn detect(&self, query: &str) -> Result<Resolution, AiError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AiError::invalid_input("query must not be empty"));
        }
        if query.chars().count() > MAX_QUERY_CHARS {
            return Err(AiError::invalid_input(format!(
                "query exceeds {} characters",
                MAX_QUERY_CHARS
            )));
        }

        info!("Processing query: \"{}\"", query);

        if let Some(candidate) = match_faq(&self.lexicon, query) {
            debug!("FAQ answer found");
            return Ok(Resolution::Faq {
                faq: candidate.entry.clone(),
                score: candidate.score,
                matched_keywords: candidate.matched_keywords,
                meta: ResolutionMeta::keyword_match(),
            });
        }

        if let Some(candidate) = match_navigation(&self.lexicon, query) {
            debug!("Navigation detected via keywords");
            return Ok(Resolution::Navigation {
                url: candidate.entry.url.clone(),
                intent: candidate.entry.intent.clone(),
                score: Some(candidate.score),
                matched_keywords: candidate.matched_keywords,
                meta: ResolutionMeta::keyword_match(),
            });
        }

        debug!("No keyword match, trying model fallback");
        match self.fallback.resolve(query).await {
            FallbackOutcome::Match { url, intent, meta } => Ok(Resolution::Navigation {
                url,
                intent,
                score: None,
                matched_keywords: Vec::new(),
                meta,
            }),
            FallbackOutcome::NotFound { meta } => Ok(Resolution::NotFound { meta }),
        }
    }
}
