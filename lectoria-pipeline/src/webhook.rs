//! HTTP-based [`JustificationProvider`] towards an external workflow webhook.
//!
//! The [`JustificationProvider`] trait is synchronous to keep the core
//! library embeddable in synchronous contexts. This provider bridges the
//! async HTTP calls to the sync interface by blocking on a Tokio runtime
//! internally.
//!
//! # Runtime behaviour
//!
//! When called from outside any Tokio runtime, the provider uses its own
//! stored runtime. When called from within an existing multi-threaded Tokio
//! runtime (detected via [`Handle::try_current()`] and
//! [`RuntimeFlavor::MultiThread`]), it uses that runtime's handle with
//! [`tokio::task::block_in_place`] to avoid nested runtime panics. From
//! within a `current_thread` runtime it falls back to its own runtime.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use lectoria_core::{
    Justification, JustificationError, JustificationProvider, ReaderContext, ScoredCandidate,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

/// Error type for [`HttpJustificationProvider`] construction failures.
#[derive(Debug, thiserror::Error)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Default user agent for webhook requests.
pub const DEFAULT_USER_AGENT: &str = "lectoria-justifier/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`HttpJustificationProvider`].
#[derive(Debug, Clone)]
pub struct HttpJustificationProviderConfig {
    /// Webhook endpoint URL.
    pub url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
    /// User identifier forwarded in the payload.
    pub user_id: String,
}

impl HttpJustificationProviderConfig {
    /// Create a new configuration for the given webhook URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            user_id: "anonymous".to_string(),
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the user identifier forwarded in the payload.
    #[must_use]
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }
}

/// Outbound webhook payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WebhookRequest {
    context_id: String,
    user_id: String,
    mood: String,
    reader_type: String,
    favorite_genres: Vec<String>,
    intention: String,
    candidates: Vec<WebhookCandidate>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WebhookCandidate {
    book_id: String,
    title: String,
    author: String,
    genre: String,
    score: f32,
    score_breakdown: lectoria_core::ScoreBreakdown,
    key_reasons: Vec<String>,
}

/// Inbound webhook response body.
///
/// Some workflow engines wrap the body in a single-element JSON array;
/// [`HttpJustificationProvider`] unwraps that before deserialising.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WebhookResponse {
    justifications: Vec<WebhookJustification>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WebhookJustification {
    book_id: String,
    justification: String,
    #[serde(default)]
    key_reasons: Vec<String>,
}

/// HTTP-based justification provider posting to a workflow webhook.
///
/// Owns a Tokio runtime that is reused across calls, avoiding the overhead
/// of creating a new runtime per request.
pub struct HttpJustificationProvider {
    client: Client,
    config: HttpJustificationProviderConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpJustificationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpJustificationProvider")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl HttpJustificationProvider {
    /// Create a new provider with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpJustificationProviderConfig::new(url))
    }

    /// Create a new provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(
        config: HttpJustificationProviderConfig,
    ) -> Result<Self, ProviderBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    fn build_request(
        &self,
        context: &ReaderContext,
        candidates: &[ScoredCandidate],
    ) -> WebhookRequest {
        WebhookRequest {
            context_id: next_context_id(),
            user_id: self.config.user_id.clone(),
            mood: context.mood.to_string(),
            reader_type: context.profile.to_string(),
            favorite_genres: context.interests.clone(),
            intention: context.intent.to_string(),
            candidates: candidates
                .iter()
                .map(|candidate| WebhookCandidate {
                    book_id: candidate.book.id.clone(),
                    title: candidate.book.title.clone(),
                    author: candidate.book.author.clone(),
                    genre: candidate.book.genre.clone(),
                    score: candidate.score,
                    score_breakdown: candidate.breakdown,
                    key_reasons: candidate.matched_terms.clone(),
                })
                .collect(),
        }
    }

    async fn justify_async(
        &self,
        context: &ReaderContext,
        candidates: &[ScoredCandidate],
    ) -> Result<Vec<Justification>, JustificationError> {
        let payload = self.build_request(context, candidates);

        let response = self
            .client
            .post(&self.config.url)
            .json(&payload)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err))?;

        let body: serde_json::Value =
            response
                .json()
                .await
                .map_err(|err| JustificationError::Parse {
                    message: err.to_string(),
                })?;

        let parsed = parse_response(body)?;
        align_justifications(candidates, parsed)
    }

    fn convert_reqwest_error(&self, error: &reqwest::Error) -> JustificationError {
        if error.is_timeout() {
            return JustificationError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return JustificationError::Http {
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        JustificationError::Network {
            message: error.to_string(),
        }
    }
}

impl JustificationProvider for HttpJustificationProvider {
    fn justify(
        &self,
        context: &ReaderContext,
        candidates: &[ScoredCandidate],
    ) -> Result<Vec<Justification>, JustificationError> {
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        // block_in_place requires a multi-threaded runtime; for
        // current_thread runtimes we fall back to our own stored runtime.
        let future = self.justify_async(context, candidates);
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }
}

/// Timestamp-derived context identifier for webhook correlation.
fn next_context_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    format!("ctx-{millis}")
}

/// Unwrap a possibly array-wrapped body and deserialise it.
fn parse_response(body: serde_json::Value) -> Result<WebhookResponse, JustificationError> {
    let inner = match body {
        serde_json::Value::Array(mut items) if !items.is_empty() => items.swap_remove(0),
        serde_json::Value::Array(_) => {
            return Err(JustificationError::Parse {
                message: "webhook returned an empty array".to_string(),
            });
        }
        other => other,
    };

    serde_json::from_value(inner).map_err(|err| JustificationError::Parse {
        message: err.to_string(),
    })
}

/// Match response entries to candidates by book id, preserving input order.
fn align_justifications(
    candidates: &[ScoredCandidate],
    response: WebhookResponse,
) -> Result<Vec<Justification>, JustificationError> {
    let mut aligned = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let found = response
            .justifications
            .iter()
            .find(|entry| entry.book_id == candidate.book.id);
        match found {
            Some(entry) => aligned.push(Justification {
                text: entry.justification.clone(),
                key_reasons: entry.key_reasons.clone(),
            }),
            None => {
                return Err(JustificationError::Incomplete {
                    expected: candidates.len(),
                    received: aligned.len(),
                });
            }
        }
    }
    Ok(aligned)
}
