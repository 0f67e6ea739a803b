//! LLM — Groq-backed completion client behind a mockable trait.
//!
//! DESIGN
//! ======
//! `LlmClient` binds the Groq HTTP client to the configured model id. The
//! rest of the crate holds it as `Arc<dyn LlmChat>` injected through
//! `AppState`, never as a module-level singleton, so tests can substitute a
//! fake client.

pub mod config;
pub mod groq;
pub mod types;

use config::LlmConfig;
pub use types::LlmChat;
use types::{ChatResponse, LlmError, Message};

pub struct LlmClient {
    inner: groq::GroqClient,
    model: String,
}

impl LlmClient {
    /// Build an LLM client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails
    /// to build.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = LlmConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let model = config.model.clone();
        let inner = groq::GroqClient::new(config.api_key, config.base_url, config.timeouts)?;
        Ok(Self { inner, model })
    }

    /// Return the configured model id (e.g. `"llama-3.1-8b-instant"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl LlmChat for LlmClient {
    async fn chat(
        &self,
        temperature: f32,
        max_tokens: u32,
        system: &str,
        messages: &[Message],
    ) -> Result<ChatResponse, LlmError> {
        self.inner
            .chat(&self.model, temperature, max_tokens, system, messages)
            .await
    }
}
