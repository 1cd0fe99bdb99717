//! Core data models for translation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One message in a chat-completion conversation
///
/// This client only ever produces the `"user"` role. `content` is
/// defaulted on deserialization so a response choice without content
/// classifies as an empty result rather than a decode failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role (`"user"`, `"assistant"`, ...)
    pub role: String,
    /// Message text
    #[serde(default)]
    pub content: String,
}

impl ChatMessage {
    /// Build a user-role message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for the chat-completion endpoint
///
/// Exactly one message per translate call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model identifier
    pub model: String,
    /// Conversation, oldest first
    pub messages: Vec<ChatMessage>,
}

/// One completion choice in the response
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The generated message
    pub message: ChatMessage,
}

/// Response body of the chat-completion endpoint
///
/// Only `choices[0].message.content` is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Completion choices, best first
    pub choices: Vec<Choice>,
}

/// A completed translation, persisted after a successful call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRecord {
    /// Text the user typed
    pub source_text: String,
    /// Text the endpoint returned
    pub translated_text: String,
    /// When the translation completed
    pub timestamp: DateTime<Utc>,
}

impl TranslationRecord {
    /// Build a record stamped with the current time
    pub fn new(source_text: impl Into<String>, translated_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            translated_text: translated_text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// The single persisted target-language preference
///
/// Upserted whenever the user edits the target-language field,
/// independent of translation success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationPreference {
    /// Target language or dialect description, e.g. "Spanish used in Mexico"
    pub translate_as: String,
    /// When the preference was last edited
    pub timestamp: DateTime<Utc>,
}

impl TranslationPreference {
    /// Build a preference stamped with the current time
    pub fn new(translate_as: impl Into<String>) -> Self {
        Self {
            translate_as: translate_as.into(),
            timestamp: Utc::now(),
        }
    }
}
