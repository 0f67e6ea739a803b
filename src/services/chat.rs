//! Chat relay service — conversation translation and identity masking.
//!
//! DESIGN
//! ======
//! Stateless per request: rebuild the upstream message list from the
//! client-supplied history plus the fixed system instruction, make exactly
//! one completion call with fixed sampling parameters, and rewrite the
//! returned text so the assistant only ever presents itself as VoxBox.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::llm::LlmChat;
use crate::llm::types::{LlmError, Message};

/// Sampling temperature for every upstream call. Not client-configurable.
pub(crate) const CHAT_TEMPERATURE: f32 = 0.7;

/// Maximum generated length for every upstream call. Not client-configurable.
pub(crate) const CHAT_MAX_TOKENS: u32 = 250;

/// Persona-enforcing system instruction, always first in the upstream list.
pub(crate) const SYSTEM_PROMPT: &str = "\
You are VoxBox, an intelligent, fast, and friendly voice assistant powered by Groq.
- Always identify yourself ONLY as \"VoxBox\".
- NEVER mention Groq, Llama, AI models, LLMs, or technical systems.
- Keep answers short and concise (2-4 sentences) suitable for a voice assistant.
- Provide accurate, factual, helpful answers.";

// =============================================================================
// WIRE TYPES
// =============================================================================

/// One text fragment of a wire turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnPart {
    pub text: String,
}

/// One conversation turn in the transport shape posted by the chat page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireTurn {
    pub role: String,
    #[serde(default)]
    pub parts: Vec<TurnPart>,
}

// =============================================================================
// TRANSLATION
// =============================================================================

/// Map a wire-turn role onto the completion-API role set.
///
/// Total and two-valued: `"model"` maps to `"assistant"`, every other role
/// string maps to `"user"`.
pub(crate) fn map_role(role: &str) -> &'static str {
    if role == "model" { "assistant" } else { "user" }
}

/// Translate the submitted history into upstream messages, order preserved.
///
/// Only the first text part of each turn is read; a turn with no parts
/// contributes an empty content string.
pub(crate) fn build_upstream_messages(turns: &[WireTurn]) -> Vec<Message> {
    turns
        .iter()
        .map(|turn| {
            let content = turn
                .parts
                .first()
                .map(|part| part.text.clone())
                .unwrap_or_default();
            Message { role: map_role(&turn.role).to_string(), content }
        })
        .collect()
}

// =============================================================================
// IDENTITY MASK
// =============================================================================

/// Ordered literal substitutions hiding the upstream vendor and model family.
///
/// Case-sensitive, literal substrings only, applied in this exact order —
/// a best-effort mask: paraphrases and different casing pass through
/// untouched. Downstream expectations depend on this exact behavior, so do
/// not "improve" it.
const IDENTITY_MASK: [(&str, &str); 5] = [
    ("Groq", "VoxBox"),
    ("Llama", "VoxBox"),
    ("LLM", "assistant"),
    ("Language Model", "assistant"),
    ("as an AI", "I'm VoxBox"),
];

/// Rewrite upstream text so the assistant only presents itself as VoxBox.
#[must_use]
pub(crate) fn mask_identity(text: &str) -> String {
    IDENTITY_MASK
        .iter()
        .fold(text.to_string(), |masked, (target, replacement)| masked.replace(target, replacement))
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Relay one conversation to the completion API and return the masked reply.
///
/// # Errors
///
/// Returns an [`LlmError`] if the upstream call fails or its response cannot
/// be parsed.
pub async fn relay_chat(llm: &Arc<dyn LlmChat>, turns: &[WireTurn]) -> Result<String, LlmError> {
    let messages = build_upstream_messages(turns);
    let response = llm
        .chat(CHAT_TEMPERATURE, CHAT_MAX_TOKENS, SYSTEM_PROMPT, &messages)
        .await?;

    info!(
        model = %response.model,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        turns = turns.len(),
        "chat: completion received"
    );

    Ok(mask_identity(&response.text))
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
