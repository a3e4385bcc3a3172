use std::sync::Arc;

use reqwest::{Client, Url};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::auth::{Credentials, Token};
use crate::errors::{ErrorResponse, Result};
use crate::helpers::time::{get_instant, now_utc};
use crate::observability::metrics::{Metrics, REASON_DECODE, REASON_STATUS, REASON_TRANSPORT};

const OUTCOME_OK: &str = "ok";
const OUTCOME_ERROR: &str = "error";

/// Owns the cached access token of one client.
///
/// The lock is held across the validity check and the refresh round-trip, so
/// concurrent callers never issue overlapping refreshes. Refresh is lazy: it
/// only happens inside [`TokenManager::get_token`].
pub struct TokenManager {
    http: Client,
    token_url: Url,
    credentials: Arc<Credentials>,
    cached: Mutex<Option<Token>>,
    metrics: Arc<Metrics>,
}

impl TokenManager {
    pub fn new(http: Client, token_url: Url, credentials: Arc<Credentials>, metrics: Arc<Metrics>) -> Self {
        Self { http, token_url, credentials, cached: Mutex::new(None), metrics }
    }

    /// Return the cached token while valid, otherwise fetch and cache a new one.
    ///
    /// Dropping the returned future (timeout, task abort) releases the lock and
    /// leaves the cache untouched; a token is stored only once fully stamped.
    /// Failures are returned as-is and nothing is retried.
    pub async fn get_token(&self) -> Result<Token> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref().filter(|token| token.is_valid()) {
            self.metrics.token_cache_hits.inc();
            debug!("token served from cache, expires at {:?}", token.expires_at());
            return Ok(token.clone());
        }

        let token = self.request_new_token().await?;
        *cached = Some(token.clone());
        Ok(token)
    }

    async fn request_new_token(&self) -> Result<Token> {
        info!("requesting new access token for client '{}'", self.credentials.client_id());
        self.metrics.token_refresh_requests.inc();
        let start = get_instant();

        let outcome = self.fetch_token().await;
        let (label, failure) = match &outcome {
            Ok(_) => (OUTCOME_OK, None),
            Err(Failure::Transport(_)) => (OUTCOME_ERROR, Some(REASON_TRANSPORT)),
            Err(Failure::Status(_)) => (OUTCOME_ERROR, Some(REASON_STATUS)),
            Err(Failure::Decode(_)) => (OUTCOME_ERROR, Some(REASON_DECODE)),
        };
        self.metrics.token_refresh_duration.with_label_values(&[label]).observe(start.elapsed().as_secs_f64());
        if let Some(reason) = failure {
            self.metrics.token_refresh_failures.with_label_values(&[reason]).inc();
        }

        let token = outcome.map_err(Failure::into_response)?;
        info!("access token issued, scope '{}', expires in {}s", token.scope, token.expires_in);
        Ok(token)
    }

    async fn fetch_token(&self) -> std::result::Result<Token, Failure> {
        let response = self
            .http
            .post(self.token_url.clone())
            .form(&self.credentials.auth_form())
            .send()
            .await
            .map_err(|e| Failure::Transport(ErrorResponse::from_transport(&e)))?;

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if !status.is_success() => {
                return Err(Failure::Status(ErrorResponse::from_status(status.as_u16(), e.to_string())))
            }
            Err(e) => return Err(Failure::Transport(ErrorResponse::from_transport(&e))),
        };

        if !status.is_success() {
            return Err(Failure::Status(ErrorResponse::from_status(status.as_u16(), body)));
        }

        let token: Token = serde_json::from_str(&body)
            .map_err(|e| Failure::Decode(ErrorResponse::decoding(status.as_u16(), &e)))?;
        let expires_in = token.expires_in;
        token.stamp(now_utc()).ok_or_else(|| {
            Failure::Decode(ErrorResponse::from_status(
                status.as_u16(),
                format!("unexpected response body: expires_in {expires_in} out of range"),
            ))
        })
    }
}

enum Failure {
    Transport(ErrorResponse),
    Status(ErrorResponse),
    Decode(ErrorResponse),
}

impl Failure {
    fn into_response(self) -> ErrorResponse {
        match self {
            Failure::Transport(e) | Failure::Status(e) | Failure::Decode(e) => e,
        }
    }
}
