//! Chat reply generation layered on top of a resolution.
//!
//! FAQ resolutions answer directly from the stored answer text with zero
//! token cost. Navigation resolutions get a one-sentence reply steering the
//! user to the link; everything else gets a short friendly reply. Model
//! failures degrade to fixed messages, never to an error upward.

use std::sync::Arc;
use std::time::Instant;

use log::warn;

use crate::providers::{ModelClientTrait, ModelRequest, ModelSettings};
use crate::types::{Resolution, KEYWORD_MATCH_STRATEGY};

/// Reply cap when the user is being navigated; one short sentence.
const NAVIGATING_MAX_TOKENS: u64 = 30;

/// Reply cap for conversational answers.
const CHAT_MAX_TOKENS: u64 = 100;

/// Fixed reply when the model fails while navigating.
const NAVIGATING_FALLBACK_MESSAGE: &str = "Bu yerga bosing";

/// Fixed apology when the model fails in plain conversation.
const APOLOGY_MESSAGE: &str = "Kechirasiz, xatolik yuz berdi. Qaytadan urinib ko'ring.";

/// A generated chat reply with its cost metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub message: String,
    /// Model or strategy that produced the message.
    pub model: String,
    /// Total tokens spent; zero for canned answers.
    pub tokens: u32,
    /// Wall-clock duration of the model call, when one was made.
    pub processing_time_ms: Option<u64>,
    /// Set when the model call failed and a fixed message was used instead.
    pub error: Option<String>,
}

/// Chat reply generator.
pub struct ChatResponder {
    model: Arc<dyn ModelClientTrait>,
    settings: ModelSettings,
}

impl ChatResponder {
    /// Create a new chat responder.
    pub fn new(model: Arc<dyn ModelClientTrait>, settings: ModelSettings) -> Self {
        Self { model, settings }
    }

    /// Generate the user-facing reply for a resolved query.
    pub async fn reply(&self, query: &str, resolution: &Resolution) -> ChatReply {
        // FAQ answers come straight from the lexicon.
        if let Resolution::Faq { faq, .. } = resolution {
            return ChatReply {
                message: faq.answer.clone(),
                model: KEYWORD_MATCH_STRATEGY.to_string(),
                tokens: 0,
                processing_time_ms: None,
                error: None,
            };
        }

        let navigating_intent = match resolution {
            Resolution::Navigation { intent, .. } => Some(intent.as_str()),
            _ => None,
        };

        let request = ModelRequest {
            model_id: self.settings.chat_model.clone(),
            system: Some(build_chat_system_prompt(navigating_intent)),
            prompt: query.to_string(),
            temperature: 0.3,
            max_tokens: if navigating_intent.is_some() {
                NAVIGATING_MAX_TOKENS
            } else {
                CHAT_MAX_TOKENS
            },
        };

        self.complete_or_fallback(
            request,
            self.settings.chat_model.clone(),
            if navigating_intent.is_some() {
                NAVIGATING_FALLBACK_MESSAGE
            } else {
                APOLOGY_MESSAGE
            },
        )
        .await
    }

    /// Generate a conversational reply with no navigation or FAQ context.
    pub async fn general_reply(&self, query: &str) -> ChatReply {
        let request = ModelRequest {
            model_id: self.settings.general_model.clone(),
            system: Some(GENERAL_SYSTEM_PROMPT.to_string()),
            prompt: query.to_string(),
            temperature: 0.7,
            max_tokens: CHAT_MAX_TOKENS,
        };

        self.complete_or_fallback(request, self.settings.general_model.clone(), APOLOGY_MESSAGE)
            .await
    }

    async fn complete_or_fallback(
        &self,
        request: ModelRequest,
        model_id: String,
        fallback_message: &str,
    ) -> ChatReply {
        let started = Instant::now();
        match tokio::time::timeout(self.settings.timeout, self.model.complete(request)).await {
            Ok(Ok(reply)) => ChatReply {
                message: reply.text.trim().to_string(),
                model: model_id,
                tokens: reply.total_tokens,
                processing_time_ms: Some(started.elapsed().as_millis() as u64),
                error: None,
            },
            Ok(Err(e)) => {
                warn!("Chat reply failed: {}", e);
                ChatReply {
                    message: fallback_message.to_string(),
                    model: model_id,
                    tokens: 0,
                    processing_time_ms: None,
                    error: Some(e.to_string()),
                }
            }
            Err(_) => {
                warn!(
                    "Chat reply timed out after {}ms",
                    self.settings.timeout.as_millis()
                );
                ChatReply {
                    message: fallback_message.to_string(),
                    model: model_id,
                    tokens: 0,
                    processing_time_ms: None,
                    error: Some("model call timed out".to_string()),
                }
            }
        }
    }
}

/// System prompt for the general assistant persona.
const GENERAL_SYSTEM_PROMPT: &str = "\
Siz \"Ko'prikqurilish\" aksiyadorlik jamiyatining yordamchi AI assistentisiz.

VAZIFANGIZ:
1. Do'stona va professional javob bering
2. Qisqa va aniq gaplashing (3-4 gap)
3. Agar kerak bo'lsa, sayt bo'limlari haqida ma'lumot bering
4. O'zbek tilida yozing

Kompaniya: Ko'prikqurilish - qurilish sohasida faoliyat yuritadi.";

/// System prompt for replies generated alongside a resolution; when a
/// navigation target is known the model is told to answer with one short
/// "click here" sentence (the link itself is rendered by the frontend).
fn build_chat_system_prompt(navigating_intent: Option<&str>) -> String {
    let mut prompt = String::from(
        "Siz \"Ko'prikqurilish\" aksiyadorlik jamiyatining AI yordamchisisiz.\n\
Siz QISQA, ANIQ va DO'STONA javob berasiz.\n\n\
ASOSIY QOIDALAR:\n\
1. Agar foydalanuvchi sahifaga o'tmoqchi bo'lsa - JUDA QISQA javob (maksimum 1-2 gap)\n\
2. Oddiy suhbat uchun - do'stona va tabiiy javob\n\
3. HAR DOIM o'zbek tilida yozing\n\
4. Ortiqcha tafsilot berMANG\n",
    );

    if let Some(intent) = navigating_intent {
        prompt.push_str(&format!(
            "\nHOZIR: Foydalanuvchini \"{intent}\" bo'limiga yo'naltiryapsiz.\n\n\
Faqat shuni yozing (variantlardan birini tanla):\n\
- \"Marhamat, bu yerga bosing\"\n\
- \"Bo'lim ochilishi uchun bu yerga bosing\"\n\
- \"Iltimos, bu yerga o'ting\"\n\
- \"Tayyor, bu yerni bosing\"\n\n\
MUHIM: Link avtomatik chiqadi, siz faqat 1 gap yozing!\n"
        ));
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::FakeModelClient;
    use crate::types::ResolutionMeta;
    use siteguide_core::FaqEntry;

    fn faq_resolution() -> Resolution {
        Resolution::Faq {
            faq: FaqEntry {
                id: "faq-narxlar".to_string(),
                question: "Narxlar qanday?".to_string(),
                category: "Narxlar".to_string(),
                answer: "Narxlar loyiha hajmiga qarab belgilanadi.".to_string(),
                keywords: vec!["narx".to_string()],
            },
            score: 100,
            matched_keywords: vec!["narx".to_string()],
            meta: ResolutionMeta::keyword_match(),
        }
    }

    fn navigation_resolution() -> Resolution {
        Resolution::Navigation {
            url: "/corporativ/monitoring".to_string(),
            intent: "Monitoring bo'limi".to_string(),
            score: Some(50),
            matched_keywords: vec!["monitoring".to_string()],
            meta: ResolutionMeta::keyword_match(),
        }
    }

    #[tokio::test]
    async fn test_faq_answer_is_verbatim_and_free() {
        let model = Arc::new(FakeModelClient::failing());
        let responder = ChatResponder::new(model.clone(), ModelSettings::default());

        let reply = responder.reply("narx qancha", &faq_resolution()).await;
        assert_eq!(reply.message, "Narxlar loyiha hajmiga qarab belgilanadi.");
        assert_eq!(reply.model, KEYWORD_MATCH_STRATEGY);
        assert_eq!(reply.tokens, 0);
        assert!(reply.error.is_none());
        // No model call for canned answers.
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn test_navigation_reply_uses_short_cap_and_intent_prompt() {
        let model = Arc::new(FakeModelClient::with_reply("Marhamat, bu yerga bosing", 19));
        let responder = ChatResponder::new(model.clone(), ModelSettings::default());

        let reply = responder
            .reply("monitoring bo'limi", &navigation_resolution())
            .await;
        assert_eq!(reply.message, "Marhamat, bu yerga bosing");
        assert_eq!(reply.tokens, 19);

        let request = &model.requests()[0];
        assert_eq!(request.max_tokens, NAVIGATING_MAX_TOKENS);
        assert_eq!(request.temperature, 0.3);
        assert!(request
            .system
            .as_ref()
            .unwrap()
            .contains("Monitoring bo'limi"));
    }

    #[tokio::test]
    async fn test_navigation_failure_uses_fixed_message() {
        let model = Arc::new(FakeModelClient::failing());
        let responder = ChatResponder::new(model, ModelSettings::default());

        let reply = responder
            .reply("monitoring bo'limi", &navigation_resolution())
            .await;
        assert_eq!(reply.message, NAVIGATING_FALLBACK_MESSAGE);
        assert_eq!(reply.tokens, 0);
        assert!(reply.error.is_some());
    }

    #[tokio::test]
    async fn test_not_found_failure_uses_apology() {
        let model = Arc::new(FakeModelClient::failing());
        let responder = ChatResponder::new(model, ModelSettings::default());

        let reply = responder
            .reply("xayrli kun", &Resolution::NotFound { meta: None })
            .await;
        assert_eq!(reply.message, APOLOGY_MESSAGE);
        assert!(reply.error.is_some());
    }

    #[tokio::test]
    async fn test_general_reply_uses_conversational_settings() {
        let model = Arc::new(FakeModelClient::with_reply("Assalomu alaykum!", 40));
        let responder = ChatResponder::new(model.clone(), ModelSettings::default());

        let reply = responder.general_reply("salom").await;
        assert_eq!(reply.message, "Assalomu alaykum!");
        assert_eq!(reply.tokens, 40);

        let request = &model.requests()[0];
        assert_eq!(request.temperature, 0.7);
        assert_eq!(request.max_tokens, CHAT_MAX_TOKENS);
        assert!(request
            .system
            .as_ref()
            .unwrap()
            .contains("Ko'prikqurilish"));
    }
}
