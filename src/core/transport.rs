//! HTTP transport seam for the chat-completion endpoint

use async_trait::async_trait;
use reqwest::Url;

use crate::core::config::Credential;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::ChatRequest;

/// Raw outcome of one HTTP round trip
///
/// Status and body are handed back undecoded; classifying non-200
/// statuses and parsing the body belong to the client, not the wire.
#[derive(Debug, Clone)]
pub struct TransportReply {
    /// HTTP status code
    pub status: u16,
    /// Response body text
    pub body: String,
}

/// One POST of a chat request to a completion endpoint
///
/// Implementations encapsulate the HTTP stack; consumers stay
/// decoupled from any particular client library, and tests substitute
/// a deterministic stub. Implementations fail only with
/// [`TranslationError::Transport`].
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send `request` as a JSON POST authenticated by `credential`
    async fn post_chat(
        &self,
        endpoint: &Url,
        credential: &Credential,
        request: &ChatRequest,
    ) -> Result<TransportReply>;
}

/// Production transport backed by `reqwest`
///
/// One connection pool shared across calls; per-call state lives in
/// the request itself. Timeouts are whatever the underlying client
/// defaults to.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with a fresh connection pool
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn post_chat(
        &self,
        endpoint: &Url,
        credential: &Credential,
        request: &ChatRequest,
    ) -> Result<TransportReply> {
        let response = self
            .client
            .post(endpoint.clone())
            .header("Content-Type", "application/json")
            .header(credential.header, credential.value.as_str())
            .json(request)
            .send()
            .await
            .map_err(|e| TranslationError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TranslationError::Transport {
                message: e.to_string(),
            })?;

        Ok(TransportReply { status, body })
    }
}
