//! Shared DTOs for the resolution pipeline.

use serde::{Deserialize, Serialize};
use siteguide_core::FaqEntry;

/// Strategy name reported for deterministic keyword matches.
pub const KEYWORD_MATCH_STRATEGY: &str = "keyword-match";

/// Sentinel the fallback model must return when no section fits.
pub const NOT_FOUND_SENTINEL: &str = "NOT_FOUND";

/// Maximum query length the orchestrator accepts, in characters. The HTTP
/// boundary enforces the same limit before calling in.
pub const MAX_QUERY_CHARS: usize = 500;

/// Model/token metadata attached to a resolution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionMeta {
    /// Model or strategy that produced the outcome.
    pub model: String,
    /// Total tokens spent; zero for deterministic strategies.
    pub tokens: u32,
    /// Wall-clock duration of the model call, when one was made.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time_ms: Option<u64>,
}

impl ResolutionMeta {
    /// Metadata for a deterministic keyword-match outcome.
    pub fn keyword_match() -> Self {
        Self {
            model: KEYWORD_MATCH_STRATEGY.to_string(),
            tokens: 0,
            processing_time_ms: None,
        }
    }
}

/// Outcome of running a query through the resolution pipeline.
///
/// Exactly one variant per query. A navigation outcome never carries the
/// not-found sentinel as its URL; that case normalizes to `NotFound`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Resolution {
    /// A canned FAQ answer.
    Faq {
        faq: FaqEntry,
        score: u32,
        matched_keywords: Vec<String>,
        meta: ResolutionMeta,
    },
    /// A site-navigation target.
    Navigation {
        url: String,
        intent: String,
        /// Lexical score; `None` when the fallback model picked the target.
        #[serde(skip_serializing_if = "Option::is_none")]
        score: Option<u32>,
        matched_keywords: Vec<String>,
        meta: ResolutionMeta,
    },
    /// Neither tier produced a target.
    NotFound {
        /// Metadata from the fallback attempt, when one was made and replied.
        #[serde(skip_serializing_if = "Option::is_none")]
        meta: Option<ResolutionMeta>,
    },
}

impl Resolution {
    /// Whether the query resolved to an FAQ or navigation target.
    pub fn is_matched(&self) -> bool {
        !matches!(self, Resolution::NotFound { .. })
    }

    /// Metadata of the winning strategy, if any was recorded.
    pub fn meta(&self) -> Option<&ResolutionMeta> {
        match self {
            Resolution::Faq { meta, .. } | Resolution::Navigation { meta, .. } => Some(meta),
            Resolution::NotFound { meta } => meta.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_serializes_with_wire_tags() {
        let faq = Resolution::Faq {
            faq: FaqEntry {
                id: "faq-1".to_string(),
                question: "Q?".to_string(),
                category: "Umumiy".to_string(),
                answer: "A".to_string(),
                keywords: vec!["narx".to_string()],
            },
            score: 100,
            matched_keywords: vec!["narx".to_string()],
            meta: ResolutionMeta::keyword_match(),
        };
        let value = serde_json::to_value(&faq).unwrap();
        assert_eq!(value["type"], "FAQ");
        assert_eq!(value["matchedKeywords"][0], "narx");
        assert_eq!(value["meta"]["model"], KEYWORD_MATCH_STRATEGY);

        let not_found = Resolution::NotFound { meta: None };
        let value = serde_json::to_value(&not_found).unwrap();
        assert_eq!(value["type"], "NOT_FOUND");

        let nav = Resolution::Navigation {
            url: "/aloqa".to_string(),
            intent: "Aloqa".to_string(),
            score: None,
            matched_keywords: vec![],
            meta: ResolutionMeta {
                model: "gpt-4o-mini".to_string(),
                tokens: 37,
                processing_time_ms: Some(420),
            },
        };
        let value = serde_json::to_value(&nav).unwrap();
        assert_eq!(value["type"], "NAVIGATION");
        assert_eq!(value["meta"]["tokens"], 37);
    }

    #[test]
    fn test_is_matched() {
        assert!(!Resolution::NotFound { meta: None }.is_matched());
        let nav = Resolution::Navigation {
            url: "/aloqa".to_string(),
            intent: "Aloqa".to_string(),
            score: Some(50),
            matched_keywords: vec!["aloqa".to_string()],
            meta: ResolutionMeta::keyword_match(),
        };
        assert!(nav.is_matched());
    }
}
