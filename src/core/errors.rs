//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
///
/// Every failure of a single `translate` call maps to exactly one of
/// these variants. All variants are terminal for the call that
/// produced them; the caller decides whether to issue a new call.
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Configuration file was absent or malformed at load time
    #[error("configuration not loaded")]
    ConfigurationMissing,

    /// Configured API URL does not parse
    #[error("invalid API endpoint: {url}")]
    InvalidEndpoint {
        url: String,
    },

    /// Network-level failure (DNS, connection, timeout)
    #[error("network error: {message}")]
    Transport {
        message: String,
    },

    /// Endpoint answered with a non-200 status
    #[error("API request failed with status code: {status}")]
    Http {
        status: u16,
    },

    /// Response body did not parse as the chat-completion shape
    #[error("invalid response: {message}")]
    Decode {
        message: String,
    },

    /// Response carried no choices or an empty translation
    #[error("no translation received")]
    EmptyResult,
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
