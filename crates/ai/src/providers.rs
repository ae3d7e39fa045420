//! Model client abstraction over LLM providers.
//!
//! The resolution pipeline only ever needs "given a prompt, return text or
//! fail", so that is the whole trait. Implementations wrap provider SDKs
//! (via rig-core); tests use [`FakeModelClient`] and never touch the network.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use rig::{
    client::CompletionClient,
    completion::{CompletionModel, Message},
    message::AssistantContent,
    providers::openai,
};

use crate::error::AiError;

/// Model used for every call site unless overridden.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

// ============================================================================
// Settings
// ============================================================================

/// Model configuration for the assistant's three call sites.
#[derive(Debug, Clone)]
pub struct ModelSettings {
    /// Model used for fallback navigation matching.
    pub navigation_model: String,
    /// Model used for navigation-aware chat replies.
    pub chat_model: String,
    /// Model used for general conversation.
    pub general_model: String,
    /// Time budget for a single model call; on expiry the caller degrades
    /// instead of hanging.
    pub timeout: Duration,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            navigation_model: DEFAULT_MODEL.to_string(),
            chat_model: DEFAULT_MODEL.to_string(),
            general_model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(15),
        }
    }
}

// ============================================================================
// Request / Reply
// ============================================================================

/// One prompt sent through the model client.
#[derive(Debug, Clone)]
pub struct ModelRequest {
    /// Model ID to use.
    pub model_id: String,
    /// Optional system prompt.
    pub system: Option<String>,
    /// User prompt text.
    pub prompt: String,
    /// Sampling temperature.
    pub temperature: f64,
    /// Maximum tokens to generate.
    pub max_tokens: u64,
}

/// Text reply from a model call.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelReply {
    /// The response content.
    pub text: String,
    /// Total tokens reported by the provider (prompt + completion).
    pub total_tokens: u32,
}

// ============================================================================
// Model Client Trait
// ============================================================================

/// Narrow boundary to the external language model.
#[async_trait]
pub trait ModelClientTrait: Send + Sync {
    /// Perform a completion and return its text plus token usage.
    async fn complete(&self, request: ModelRequest) -> Result<ModelReply, AiError>;
}

// ============================================================================
// OpenAI Client (rig-core based)
// ============================================================================

/// Production model client backed by rig-core's OpenAI provider.
#[derive(Debug)]
pub struct OpenAiClient {
    api_key: String,
}

impl OpenAiClient {
    /// Create a client from an API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, AiError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AiError::MissingApiKey("openai".to_string()));
        }
        Ok(Self { api_key })
    }
}

#[async_trait]
impl ModelClientTrait for OpenAiClient {
    async fn complete(&self, request: ModelRequest) -> Result<ModelReply, AiError> {
        let client: openai::Client<HttpClient> =
            openai::Client::new(&self.api_key).map_err(|e| AiError::Provider(e.to_string()))?;
        let model = client.completion_model(&request.model_id);

        let mut builder = model.completion_request(Message::user(request.prompt.clone()));
        if let Some(system) = &request.system {
            builder = builder.preamble(system.clone());
        }
        let completion_request = builder
            .temperature(request.temperature)
            .max_tokens(request.max_tokens)
            .build();

        let response = model
            .completion(completion_request)
            .await
            .map_err(|e| AiError::Provider(e.to_string()))?;

        let text: String = response
            .choice
            .iter()
            .filter_map(|content| match content {
                AssistantContent::Text(text) => Some(text.text.as_str()),
                _ => None,
            })
            .collect();

        Ok(ModelReply {
            text,
            total_tokens: response.usage.total_tokens as u32,
        })
    }
}

// ============================================================================
// Fake Client for Testing
// ============================================================================

/// A fake model client for tests: fixed reply or fixed failure, plus a
/// record of every request it received.
pub struct FakeModelClient {
    reply: Option<ModelReply>,
    requests: Mutex<Vec<ModelRequest>>,
}

impl FakeModelClient {
    /// Create a fake client that always returns the given text.
    pub fn with_text(text: &str) -> Self {
        Self::with_reply(text, 0)
    }

    /// Create a fake client that returns the given text and token count.
    pub fn with_reply(text: &str, total_tokens: u32) -> Self {
        Self {
            reply: Some(ModelReply {
                text: text.to_string(),
                total_tokens,
            }),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a fake client whose calls always fail.
    pub fn failing() -> Self {
        Self {
            reply: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Number of completions requested so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<ModelRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelClientTrait for FakeModelClient {
    async fn complete(&self, request: ModelRequest) -> Result<ModelReply, AiError> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(AiError::provider("fake model failure")),
        }
    }
}
