//! LLM client wrapper
//!
//! Thin wrapper over the rig OpenAI provider carrying the completion model
//! to use. Constructed once at startup when an API key is configured;
//! absence of the key means the generator runs in fallback-only mode.

use rig::providers::openai;

/// OpenAI client plus the completion model used for excuse generation.
#[derive(Clone)]
pub struct LlmClient {
    client: openai::Client,
    model: String,
}

impl LlmClient {
    /// Create a new LLM client with the provided API key and model name.
    pub fn new(api_key: &str, model: &str) -> Self {
        Self {
            client: openai::Client::new(api_key),
            model: model.to_string(),
        }
    }

    /// The underlying OpenAI client, used to build extractors.
    pub fn openai_client(&self) -> &openai::Client {
        &self.client
    }

    /// The configured completion model.
    pub fn model(&self) -> &str {
        &self.model
    }
}
