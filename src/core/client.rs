//! Async translation client

use reqwest::Url;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::core::config::{ClientConfig, Credential};
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{ChatMessage, ChatRequest, ChatResponse};
use crate::core::prompt;
use crate::core::transport::{ChatTransport, HttpTransport};

/// Configuration resolved at construction time
///
/// The credential header is derived from the configured style exactly
/// once, here, so the per-call path never branches on it.
#[derive(Debug)]
struct Loaded {
    config: ClientConfig,
    credential: Credential,
}

/// Client for a remote chat-completion translation endpoint
///
/// Holds the read-only configuration and a transport; each
/// `translate` call is stateless given those. A client built from a
/// missing or malformed configuration stays usable and reports
/// `ConfigurationMissing` on every call instead of panicking at
/// startup.
#[derive(Clone)]
pub struct TranslationClient {
    loaded: Option<Arc<Loaded>>,
    transport: Arc<dyn ChatTransport>,
}

impl TranslationClient {
    /// Create a client over the default HTTP transport
    pub fn new(config: Option<ClientConfig>) -> Self {
        Self::with_transport(config, Arc::new(HttpTransport::new()))
    }

    /// Create a client over a caller-supplied transport
    pub fn with_transport(config: Option<ClientConfig>, transport: Arc<dyn ChatTransport>) -> Self {
        let loaded = config.map(|config| {
            let credential = config.credential();
            Arc::new(Loaded { config, credential })
        });
        Self { loaded, transport }
    }

    /// Create a client by loading configuration from a JSON file
    pub fn from_config_file<P: AsRef<std::path::Path>>(path: P) -> Self {
        Self::new(ClientConfig::load(path))
    }

    /// Whether configuration loaded successfully
    pub fn is_configured(&self) -> bool {
        self.loaded.is_some()
    }

    /// Translate `text` into `target_language`
    ///
    /// Renders the configured prompt template, issues exactly one POST
    /// to the completion endpoint, and returns
    /// `choices[0].message.content` unmodified. No retries, no
    /// caching, no persistence; every failure maps to one
    /// [`TranslationError`] variant and is terminal for this call.
    pub async fn translate(&self, text: &str, target_language: &str) -> Result<String> {
        let loaded = self
            .loaded
            .as_deref()
            .ok_or(TranslationError::ConfigurationMissing)?;

        let rendered = prompt::render(&loaded.config.translation_prompt, text, target_language);
        let request = ChatRequest {
            model: loaded.config.model.clone(),
            messages: vec![ChatMessage::user(rendered)],
        };

        // URL validity is checked before any network activity
        let endpoint =
            Url::parse(&loaded.config.api_url).map_err(|_| TranslationError::InvalidEndpoint {
                url: loaded.config.api_url.clone(),
            })?;

        debug!("requesting translation into {:?}", target_language);
        let reply = self
            .transport
            .post_chat(&endpoint, &loaded.credential, &request)
            .await?;

        if reply.status != 200 {
            warn!("translation endpoint answered {}", reply.status);
            return Err(TranslationError::Http {
                status: reply.status,
            });
        }

        let response: ChatResponse =
            serde_json::from_str(&reply.body).map_err(|e| TranslationError::Decode {
                message: e.to_string(),
            })?;

        let translation = response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        if translation.is_empty() {
            return Err(TranslationError::EmptyResult);
        }

        Ok(translation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CredentialStyle;
    use crate::core::transport::TransportReply;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Deterministic transport that replays a canned reply and
    /// records what was sent
    struct StubTransport {
        reply: TransportReply,
        calls: AtomicUsize,
        last_request: Mutex<Option<(String, String, ChatRequest)>>,
    }

    impl StubTransport {
        fn replying(status: u16, body: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: TransportReply {
                    status,
                    body: body.to_string(),
                },
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ChatTransport for StubTransport {
        async fn post_chat(
            &self,
            endpoint: &Url,
            credential: &Credential,
            request: &ChatRequest,
        ) -> Result<TransportReply> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some((
                endpoint.to_string(),
                format!("{}: {}", credential.header, credential.value),
                request.clone(),
            ));
            Ok(self.reply.clone())
        }
    }

    /// Transport that always fails at the network level
    struct FailingTransport;

    #[async_trait]
    impl ChatTransport for FailingTransport {
        async fn post_chat(
            &self,
            _endpoint: &Url,
            _credential: &Credential,
            _request: &ChatRequest,
        ) -> Result<TransportReply> {
            Err(TranslationError::Transport {
                message: "connection refused".to_string(),
            })
        }
    }

    fn test_config() -> ClientConfig {
        ClientConfig {
            api_url: "https://api.example.com/v1/chat/completions".to_string(),
            api_key: "sk-test".to_string(),
            translation_prompt: "Translate {text} into {targetLanguage}.".to_string(),
            credential_style: CredentialStyle::Bearer,
            model: "gpt-4".to_string(),
        }
    }

    const HOLA_BODY: &str =
        r#"{"choices": [{"message": {"role": "assistant", "content": "Hola"}}]}"#;

    #[tokio::test]
    async fn returns_first_choice_content_unmodified() {
        let transport = StubTransport::replying(200, HOLA_BODY);
        let client = TranslationClient::with_transport(Some(test_config()), transport.clone());

        let translation = client.translate("Hello", "Spanish").await.unwrap();
        assert_eq!(translation, "Hola");
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn sends_rendered_prompt_and_configured_model() {
        let transport = StubTransport::replying(200, HOLA_BODY);
        let client = TranslationClient::with_transport(Some(test_config()), transport.clone());

        client.translate("Hello", "Spanish").await.unwrap();

        let sent = transport.last_request.lock().unwrap().take().unwrap();
        assert_eq!(sent.0, "https://api.example.com/v1/chat/completions");
        assert_eq!(sent.1, "Authorization: Bearer sk-test");
        assert_eq!(sent.2.model, "gpt-4");
        assert_eq!(sent.2.messages.len(), 1);
        assert_eq!(sent.2.messages[0].role, "user");
        assert_eq!(sent.2.messages[0].content, "Translate Hello into Spanish.");
    }

    #[tokio::test]
    async fn header_key_style_uses_api_key_header() {
        let transport = StubTransport::replying(200, HOLA_BODY);
        let mut config = test_config();
        config.credential_style = CredentialStyle::HeaderKey;
        let client = TranslationClient::with_transport(Some(config), transport.clone());

        client.translate("Hello", "Spanish").await.unwrap();

        let sent = transport.last_request.lock().unwrap().take().unwrap();
        assert_eq!(sent.1, "api-key: sk-test");
    }

    #[tokio::test]
    async fn empty_choices_is_empty_result() {
        let transport = StubTransport::replying(200, r#"{"choices": []}"#);
        let client = TranslationClient::with_transport(Some(test_config()), transport);

        let err = client.translate("Hello", "Spanish").await.unwrap_err();
        assert!(matches!(err, TranslationError::EmptyResult));
    }

    #[tokio::test]
    async fn empty_content_is_empty_result() {
        let transport = StubTransport::replying(
            200,
            r#"{"choices": [{"message": {"role": "assistant", "content": ""}}]}"#,
        );
        let client = TranslationClient::with_transport(Some(test_config()), transport);

        let err = client.translate("Hello", "Spanish").await.unwrap_err();
        assert!(matches!(err, TranslationError::EmptyResult));
    }

    #[tokio::test]
    async fn non_200_status_is_http_error_with_code() {
        let transport = StubTransport::replying(401, r#"{"error": "unauthorized"}"#);
        let client = TranslationClient::with_transport(Some(test_config()), transport);

        let err = client.translate("Hello", "Spanish").await.unwrap_err();
        assert!(matches!(err, TranslationError::Http { status: 401 }));
        assert!(err.to_string().contains("401"));
    }

    #[tokio::test]
    async fn unparsable_body_is_decode_error() {
        let transport = StubTransport::replying(200, "not json at all");
        let client = TranslationClient::with_transport(Some(test_config()), transport);

        let err = client.translate("Hello", "Spanish").await.unwrap_err();
        assert!(matches!(err, TranslationError::Decode { .. }));
    }

    #[tokio::test]
    async fn invalid_endpoint_fails_before_any_network_call() {
        let transport = StubTransport::replying(200, HOLA_BODY);
        let mut config = test_config();
        config.api_url = "definitely not a url".to_string();
        let client = TranslationClient::with_transport(Some(config), transport.clone());

        let err = client.translate("Hello", "Spanish").await.unwrap_err();
        assert!(matches!(err, TranslationError::InvalidEndpoint { .. }));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn missing_configuration_fails_before_any_network_call() {
        let transport = StubTransport::replying(200, HOLA_BODY);
        let client = TranslationClient::with_transport(None, transport.clone());
        assert!(!client.is_configured());

        let err = client.translate("Hello", "Spanish").await.unwrap_err();
        assert!(matches!(err, TranslationError::ConfigurationMissing));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn transport_failure_propagates() {
        let client =
            TranslationClient::with_transport(Some(test_config()), Arc::new(FailingTransport));

        let err = client.translate("Hello", "Spanish").await.unwrap_err();
        assert!(matches!(err, TranslationError::Transport { .. }));
    }

    #[tokio::test]
    async fn identical_calls_are_idempotent() {
        let transport = StubTransport::replying(200, HOLA_BODY);
        let client = TranslationClient::with_transport(Some(test_config()), transport.clone());

        let first = client.translate("Hello", "Spanish").await.unwrap();
        let second = client.translate("Hello", "Spanish").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test]
    async fn missing_config_file_yields_unconfigured_client() {
        let dir = tempfile::tempdir().unwrap();
        let client = TranslationClient::from_config_file(dir.path().join("absent.json"));
        assert!(!client.is_configured());

        let err = client.translate("Hello", "Spanish").await.unwrap_err();
        assert!(matches!(err, TranslationError::ConfigurationMissing));
    }
}
