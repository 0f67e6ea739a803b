//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the single long-lived LLM handle, built once at startup and never
//! mutated afterwards. `None` means the client could not be initialized, and
//! every chat call fails fast with the not-ready response before any network
//! I/O.

use std::sync::Arc;

use crate::llm::LlmChat;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — the inner handle is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// Optional LLM client. `None` if the Groq env vars are not configured.
    pub llm: Option<Arc<dyn LlmChat>>,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>) -> Self {
        Self { llm }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use std::sync::Mutex;

    use crate::llm::types::{ChatResponse, LlmError, Message};

    /// Create a test `AppState` with no LLM client (the not-ready state).
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(None)
    }

    /// Create a test `AppState` with a mock LLM.
    #[must_use]
    pub fn test_app_state_with_llm(llm: Arc<dyn LlmChat>) -> AppState {
        AppState::new(Some(llm))
    }

    /// A plain-text `ChatResponse` with zeroed usage counts.
    #[must_use]
    pub fn text_response(text: &str) -> ChatResponse {
        ChatResponse { text: text.into(), model: "mock".into(), input_tokens: 0, output_tokens: 0 }
    }

    /// Scripted mock LLM: pops queued results in order, then falls back to a
    /// fixed reply. Records every call for assertions.
    pub struct MockLlm {
        responses: Mutex<Vec<Result<ChatResponse, LlmError>>>,
        /// `(temperature, max_tokens, system, messages)` per call.
        pub calls: Mutex<Vec<(f32, u32, String, Vec<Message>)>>,
    }

    impl MockLlm {
        #[must_use]
        pub fn new(responses: Vec<Result<ChatResponse, LlmError>>) -> Self {
            Self { responses: Mutex::new(responses), calls: Mutex::new(Vec::new()) }
        }

        /// Mock whose first reply carries the given text.
        #[must_use]
        pub fn with_text(text: &str) -> Self {
            Self::new(vec![Ok(text_response(text))])
        }

        /// Mock whose first call fails with the given error.
        #[must_use]
        pub fn with_error(error: LlmError) -> Self {
            Self::new(vec![Err(error)])
        }
    }

    #[async_trait::async_trait]
    impl LlmChat for MockLlm {
        async fn chat(
            &self,
            temperature: f32,
            max_tokens: u32,
            system: &str,
            messages: &[Message],
        ) -> Result<ChatResponse, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push((temperature, max_tokens, system.to_string(), messages.to_vec()));
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                Ok(text_response("Done."))
            } else {
                responses.remove(0)
            }
        }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
