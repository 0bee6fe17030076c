//! HTTP client core for the Square API.
//!
//! `ApiClient` is the single entry point for outbound calls. Every request
//! goes through the same pipeline: attach the session token, send with a
//! fixed deadline, classify the transport status, then classify the
//! response envelope. A 401 triggers the session-expiry recovery sequence,
//! guarded so concurrent failures recover exactly once per episode.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use reqwest::{header, Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::auth::Session;
use crate::config::Config;

use super::error::{ApiError, FALLBACK_MESSAGE, SESSION_EXPIRED_MESSAGE};
use super::hooks::{LogNavigator, LogNotifier, Navigator, Notifier};

// ============================================================================
// Constants
// ============================================================================

/// Envelope status value that marks business success.
const SUCCESS_STATUS: i64 = 0;

/// HTTP request deadline in seconds. Every transport call that exceeds it
/// resolves as a transport failure; there are no retries.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Maximum length of a response body quoted in an error.
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Response envelope shared by every Square API endpoint.
/// `status == 0` means business success; anything else is a business
/// failure and `message` carries the reason.
#[derive(Debug, Deserialize)]
struct Envelope {
    status: i64,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: serde_json::Value,
}

/// Shared state injected into the client: the session store, the
/// 401-recovery guard, and the UI collaborators.
///
/// One context per application instance. The guard starts idle; it is
/// claimed atomically by the first 401 of an expiry episode and released
/// once the login navigation resolves.
pub struct ClientContext {
    session: RwLock<Session>,
    recovering: AtomicBool,
    notifier: Box<dyn Notifier>,
    navigator: Box<dyn Navigator>,
}

impl ClientContext {
    pub fn new(
        session: Session,
        notifier: Box<dyn Notifier>,
        navigator: Box<dyn Navigator>,
    ) -> Self {
        Self {
            session: RwLock::new(session),
            recovering: AtomicBool::new(false),
            notifier,
            navigator,
        }
    }

    /// Context with logging collaborators, for headless embeddings.
    pub fn with_defaults(session: Session) -> Self {
        Self::new(session, Box::new(LogNotifier), Box::new(LogNavigator))
    }

    /// The session store. Lock for reads (token checks) or writes
    /// (login/logout, profile updates).
    pub fn session(&self) -> &RwLock<Session> {
        &self.session
    }
}

/// API client for the Square backend.
/// Clone is cheap - reqwest::Client and the context are both Arc-backed.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    ctx: Arc<ClientContext>,
}

impl ApiClient {
    /// Create a client against `base_url` with the given context.
    pub fn new(base_url: impl Into<String>, ctx: Arc<ClientContext>) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            ctx,
        })
    }

    /// Create a client from a loaded [`Config`].
    pub fn from_config(config: &Config, ctx: Arc<ClientContext>) -> Result<Self> {
        Self::new(config.base_url.clone(), ctx)
    }

    pub fn context(&self) -> &Arc<ClientContext> {
        &self.ctx
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(self.http.get(self.url(path))).await
    }

    pub(crate) async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.execute(self.http.get(self.url(path)).query(query)).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(self.http.post(self.url(path)).json(body)).await
    }

    /// POST where the caller has no use for the returned data. Success is
    /// the envelope's status alone; whatever the server echoes in `data`
    /// is discarded.
    pub(crate) async fn post_unit<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let _: serde_json::Value = self.post(path, body).await?;
        Ok(())
    }

    /// Run one request through the full pipeline: token decoration,
    /// transport-status classification, envelope classification.
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> Result<T> {
        // Attach the stored token verbatim when present. The read lock is
        // released before the request is sent.
        let req = {
            let session = self.ctx.session.read().await;
            if session.has_token() {
                req.header(header::AUTHORIZATION, session.token())
            } else {
                req
            }
        };

        let response = match req.send().await {
            Ok(response) => response,
            Err(err) => {
                self.ctx.notifier.error(FALLBACK_MESSAGE);
                return Err(ApiError::Network(err).into());
            }
        };

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            self.recover_session().await;
            return Err(ApiError::Unauthorized.into());
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_error_message(&body);
            self.ctx
                .notifier
                .error(message.as_deref().unwrap_or(FALLBACK_MESSAGE));
            return Err(ApiError::Transport { status, message }.into());
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                self.ctx.notifier.error(FALLBACK_MESSAGE);
                return Err(ApiError::Network(err).into());
            }
        };

        let envelope: Envelope = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(err) => {
                debug!(error = %err, "response body is not an envelope");
                self.ctx.notifier.error(FALLBACK_MESSAGE);
                return Err(ApiError::InvalidResponse(truncate_body(&body)).into());
            }
        };

        if envelope.status != SUCCESS_STATUS {
            let message = envelope.message.filter(|m| !m.is_empty());
            self.ctx
                .notifier
                .error(message.as_deref().unwrap_or(FALLBACK_MESSAGE));
            return Err(ApiError::Business {
                status: envelope.status,
                message,
                data: envelope.data,
            }
            .into());
        }

        serde_json::from_value(envelope.data)
            .map_err(|err| ApiError::InvalidResponse(format!("envelope data: {}", err)).into())
    }

    /// Session-expiry recovery, at most once per expiry episode.
    ///
    /// The guard is claimed with a synchronous compare-exchange before any
    /// await, so concurrent 401s cannot both win it. Losers return
    /// immediately; their calls still reject with `Unauthorized`.
    async fn recover_session(&self) {
        if self
            .ctx
            .recovering
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("session recovery already in flight");
            return;
        }

        self.ctx.notifier.error(SESSION_EXPIRED_MESSAGE);

        {
            let mut session = self.ctx.session.write().await;
            if let Err(err) = session.remove_token() {
                // Recovery proceeds even if the cleared token cannot be
                // persisted; the in-memory state is already cleared.
                warn!(error = %err, "failed to persist cleared token");
            }
        }

        self.ctx.navigator.to_login().await;

        // Navigation finished: a later 401 starts a fresh episode.
        self.ctx.recovering.store(false, Ordering::SeqCst);
    }
}

/// Pull a human-readable `message` out of a JSON error body, if there is one.
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .filter(|m| !m.is_empty())
        .map(|m| m.to_string())
}

fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY_LENGTH {
        body.to_string()
    } else {
        let cut = body
            .char_indices()
            .take_while(|(i, _)| *i <= MAX_ERROR_BODY_LENGTH)
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        format!("{}... (truncated, {} total bytes)", &body[..cut], body.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_envelope() {
        let envelope: Envelope =
            serde_json::from_str(r#"{"status": 0, "message": "ok", "data": {"list": []}}"#)
                .unwrap();
        assert_eq!(envelope.status, 0);
        assert_eq!(envelope.message.as_deref(), Some("ok"));
        assert!(envelope.data.is_object());
    }

    #[test]
    fn test_parse_envelope_without_data() {
        let envelope: Envelope = serde_json::from_str(r#"{"status": 1, "message": "bad"}"#).unwrap();
        assert_eq!(envelope.status, 1);
        assert!(envelope.data.is_null());
    }

    #[test]
    fn test_extract_error_message() {
        assert_eq!(
            extract_error_message(r#"{"status": 1, "message": "not allowed"}"#).as_deref(),
            Some("not allowed")
        );
        assert_eq!(extract_error_message(r#"{"message": ""}"#), None);
        assert_eq!(extract_error_message("<html>502</html>"), None);
        assert_eq!(extract_error_message(""), None);
    }

    #[test]
    fn test_truncate_body() {
        assert_eq!(truncate_body("short"), "short");
        let long = "x".repeat(2000);
        let truncated = truncate_body(&long);
        assert!(truncated.len() < long.len());
        assert!(truncated.ends_with("(truncated, 2000 total bytes)"));
    }
}
