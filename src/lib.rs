//! Quadslator - translation client library
//!
//! Sends text to a configured chat-completion endpoint with a
//! rendered prompt template and extracts the translated string; the
//! host persists results and the target-language preference through
//! [`store::TranslationStore`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod store;

// Re-export key types for convenience
pub use crate::core::{
    client::TranslationClient,
    config::{ClientConfig, Credential, CredentialStyle},
    errors::{Result, TranslationError},
    models::{ChatMessage, ChatRequest, ChatResponse, TranslationPreference, TranslationRecord},
    transport::{ChatTransport, HttpTransport, TransportReply},
};

pub use store::TranslationStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
