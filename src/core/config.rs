//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Fallback model identifier when the config file does not name one
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Which HTTP header carries the API credential
///
/// Picked once per deployment in the config file; never negotiated at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CredentialStyle {
    /// `Authorization: Bearer <key>` (OpenAI-style providers)
    #[default]
    #[serde(rename = "bearer")]
    Bearer,
    /// `api-key: <key>` (Azure-style providers)
    #[serde(rename = "header-key")]
    HeaderKey,
}

/// Credential resolved to a concrete header name/value pair
///
/// Built once at config load so request construction never branches
/// on the configured style.
#[derive(Debug, Clone)]
pub struct Credential {
    /// HTTP header name
    pub header: &'static str,
    /// Full header value, including any scheme prefix
    pub value: String,
}

/// Configuration for the translation client
///
/// Deserialized from a camelCase JSON document:
///
/// ```json
/// {
///   "apiUrl": "https://example.openai.azure.com/openai/deployments/gpt-4/chat/completions?api-version=2024-02-01",
///   "apiKey": "...",
///   "translationPrompt": "Translate {text} into {targetLanguage}.",
///   "credentialStyle": "header-key"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Absolute URL of the chat-completion endpoint
    pub api_url: String,
    /// Opaque credential string
    pub api_key: String,
    /// Prompt template containing `{text}` and `{targetLanguage}` placeholders
    pub translation_prompt: String,
    /// Credential header style for this deployment
    #[serde(default)]
    pub credential_style: CredentialStyle,
    /// Model identifier sent in the request body
    #[serde(default = "default_model")]
    pub model: String,
}

/// serde default for [`ClientConfig::model`]
fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl ClientConfig {
    /// Load configuration from a JSON file
    ///
    /// A missing or unparsable file is a configuration error, not a
    /// runtime one: it yields `None` here and surfaces as
    /// `ConfigurationMissing` on the first `translate` call instead
    /// of crashing the process.
    pub fn load<P: AsRef<Path>>(path: P) -> Option<Self> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("configuration file {} not readable: {}", path.display(), e);
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("configuration file {} malformed: {}", path.display(), e);
                None
            }
        }
    }

    /// Resolve the credential header for this deployment
    pub fn credential(&self) -> Credential {
        match self.credential_style {
            CredentialStyle::Bearer => Credential {
                header: "Authorization",
                value: format!("Bearer {}", self.api_key),
            },
            CredentialStyle::HeaderKey => Credential {
                header: "api-key",
                value: self.api_key.clone(),
            },
        }
    }
}
