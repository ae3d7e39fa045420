//! LLM fallback for navigation, invoked when both deterministic matchers
//! abstain.
//!
//! The model is asked to pick exactly one listed URL or the not-found
//! sentinel; anything else it returns is treated as not-found. Failures and
//! timeouts degrade the same way — the resolver never errors upward.

use std::sync::Arc;
use std::time::Instant;

use log::{debug, warn};
use siteguide_core::Lexicon;

use crate::providers::{ModelClientTrait, ModelRequest, ModelSettings};
use crate::types::{ResolutionMeta, NOT_FOUND_SENTINEL};

/// Keywords listed per section in the prompt; enough to hint at meaning
/// without blowing up the prompt size.
const MAX_PROMPT_KEYWORDS: usize = 5;

/// Output-token cap for the URL-or-sentinel reply.
const MAX_RESPONSE_TOKENS: u64 = 50;

/// Result of one fallback model attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum FallbackOutcome {
    /// The model picked a URL that exists in the lexicon.
    Match {
        url: String,
        intent: String,
        meta: ResolutionMeta,
    },
    /// Sentinel, unknown URL, failure, or timeout. Metadata is present only
    /// when the model actually replied.
    NotFound { meta: Option<ResolutionMeta> },
}

/// Fallback resolver delegating navigation matching to an external model.
pub struct FallbackResolver {
    lexicon: Arc<Lexicon>,
    model: Arc<dyn ModelClientTrait>,
    settings: ModelSettings,
}

impl FallbackResolver {
    /// Create a new fallback resolver.
    pub fn new(
        lexicon: Arc<Lexicon>,
        model: Arc<dyn ModelClientTrait>,
        settings: ModelSettings,
    ) -> Self {
        Self {
            lexicon,
            model,
            settings,
        }
    }

    /// Resolve a query via the external model.
    ///
    /// The returned URL is validated against the lexicon; an answer that is
    /// not an exact known URL reports not-found rather than trusting the
    /// model.
    pub async fn resolve(&self, query: &str) -> FallbackOutcome {
        let request = ModelRequest {
            model_id: self.settings.navigation_model.clone(),
            system: None,
            prompt: self.build_prompt(query),
            temperature: 0.0,
            max_tokens: MAX_RESPONSE_TOKENS,
        };

        let started = Instant::now();
        let reply = match tokio::time::timeout(self.settings.timeout, self.model.complete(request))
            .await
        {
            Ok(Ok(reply)) => reply,
            Ok(Err(e)) => {
                warn!("Fallback model call failed: {}", e);
                return FallbackOutcome::NotFound { meta: None };
            }
            Err(_) => {
                warn!(
                    "Fallback model call timed out after {}ms",
                    self.settings.timeout.as_millis()
                );
                return FallbackOutcome::NotFound { meta: None };
            }
        };

        let processing_time_ms = started.elapsed().as_millis() as u64;
        let text = reply.text.trim();
        debug!(
            "Fallback model reply: \"{}\" ({}, {}ms)",
            text, self.settings.navigation_model, processing_time_ms
        );

        let meta = ResolutionMeta {
            model: self.settings.navigation_model.clone(),
            tokens: reply.total_tokens,
            processing_time_ms: Some(processing_time_ms),
        };

        if text == NOT_FOUND_SENTINEL {
            return FallbackOutcome::NotFound { meta: Some(meta) };
        }

        match self.lexicon.navigation_by_url(text) {
            Some(entry) => FallbackOutcome::Match {
                url: entry.url.clone(),
                intent: entry.intent.clone(),
                meta,
            },
            None => {
                warn!("Fallback model returned unknown URL: {}", text);
                FallbackOutcome::NotFound { meta: Some(meta) }
            }
        }
    }

    /// Build the section-listing prompt for the navigation model.
    fn build_prompt(&self, query: &str) -> String {
        let sections = self
            .lexicon
            .navigation()
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let keywords = entry
                    .keywords
                    .iter()
                    .take(MAX_PROMPT_KEYWORDS)
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(
                    "{}. \"{}\" → {}\n   Keywords: {}",
                    idx + 1,
                    entry.intent,
                    entry.url,
                    keywords
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            "You are a navigation assistant for the Ko'prikqurilish website.\n\n\
User query: \"{query}\"\n\n\
Available sections:\n\
{sections}\n\n\
TASK:\n\
1. Analyze the user's intent\n\
2. Match it to ONE of the sections above\n\
3. Return ONLY the exact URL from the list (e.g., \"/corporativ/monitoring\")\n\
4. If no good match exists, return exactly: {NOT_FOUND_SENTINEL}\n\n\
IMPORTANT:\n\
- Return ONLY the URL path or {NOT_FOUND_SENTINEL}\n\
- No explanations, no extra text\n\
- Match based on meaning, not just keywords\n\
- Be precise with URL paths\n\n\
Your response:"
        )
    }
}
