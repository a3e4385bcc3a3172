use std::sync::Arc;
use std::time::Duration;

use http::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::{Credentials, Token};
use crate::backend::token_manager::TokenManager;
use crate::errors::{Error, ErrorResponse, Result};
use crate::observability::metrics::Metrics;
use crate::utils::constants::{ACCOUNT_HEADER, DEFAULT_HTTP_TIMEOUT_MS, OAUTH_ENDPOINT, PRODUCTION_URL};

/// Transport settings fixed when the backend is built.
#[derive(Debug, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    /// Sent as `x-conta-corrente` on every request, token endpoint included.
    pub account_number: Option<String>,
    pub timeout: Duration,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: PRODUCTION_URL.to_owned(),
            account_number: None,
            timeout: Duration::from_millis(DEFAULT_HTTP_TIMEOUT_MS),
        }
    }
}

/// Shared HTTP layer: one reqwest client (mutual TLS when configured), the base
/// URL, and the token manager every service authenticates through.
pub struct Backend {
    http: Client,
    base_url: Url,
    tokens: TokenManager,
    metrics: Arc<Metrics>,
}

impl Backend {
    pub fn new(credentials: Credentials, settings: &BackendSettings) -> Result<Self> {
        let base_url = Url::parse(&settings.base_url)
            .map_err(|e| Error::config(format!("invalid base url '{}': {}", settings.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!("invalid base url '{}'", settings.base_url)));
        }

        let mut headers = HeaderMap::new();
        if let Some(account) = settings.account_number.as_deref().filter(|a| !a.is_empty()) {
            let value = HeaderValue::from_str(account)
                .map_err(|e| Error::config(format!("invalid account number '{}': {}", account, e)))?;
            headers.insert(ACCOUNT_HEADER, value);
        }

        let mut builder = Client::builder().timeout(settings.timeout).default_headers(headers);
        if let Some(identity) = credentials.identity()? {
            builder = builder.identity(identity);
        }
        let http = builder.build().map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        let metrics = Arc::new(
            Metrics::new().map_err(|e| Error::config(format!("failed to register metrics: {e}")))?,
        );

        let token_url = join_url(&base_url, &OAUTH_ENDPOINT);
        let tokens = TokenManager::new(http.clone(), token_url, Arc::new(credentials), metrics.clone());

        Ok(Self { http, base_url, tokens, metrics })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub async fn token(&self) -> Result<Token> {
        self.tokens.get_token().await
    }

    pub fn url(&self, segments: &[&str]) -> Url {
        join_url(&self.base_url, segments)
    }

    /// Authenticated request builder for an API path.
    pub(crate) async fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let token = self.token().await?;
        Ok(self.http.request(method, self.url(segments)).header(AUTHORIZATION, token.authorization()))
    }

    /// Send and decode a JSON success body.
    pub(crate) async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let (status, body) = self.send(request).await?;
        serde_json::from_str(&body).map_err(|e| ErrorResponse::decoding(status.as_u16(), &e).into())
    }

    /// Send, discarding any success body.
    pub(crate) async fn execute_empty(&self, request: RequestBuilder) -> Result<()> {
        self.send(request).await.map(|_| ())
    }

    async fn send(&self, request: RequestBuilder) -> Result<(StatusCode, String)> {
        let request = request.build()?;
        let method = request.method().clone();
        let path = request.url().path().to_owned();

        let response = match self.http.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                self.count(&method, 0);
                return Err(e.into());
            }
        };

        let status = response.status();
        self.count(&method, status.as_u16());
        debug!(method = %method, path = %path, status = status.as_u16(), "api response");

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if !status.is_success() => {
                return Err(ErrorResponse::from_status(status.as_u16(), e.to_string()).into())
            }
            Err(e) => return Err(e.into()),
        };
        if !status.is_success() {
            return Err(ErrorResponse::from_response(status.as_u16(), &body).into());
        }
        Ok((status, body))
    }

    fn count(&self, method: &Method, status: u16) {
        self.metrics
            .api_requests
            .with_label_values(&[method.as_str(), &Metrics::status_class(status)])
            .inc();
    }
}

/// Service prefix followed by the operation's own segments.
pub(crate) fn endpoint<'a>(prefix: &[&'static str], rest: &[&'a str]) -> Vec<&'a str> {
    let mut path: Vec<&'a str> = prefix.to_vec();
    path.extend_from_slice(rest);
    path
}

fn join_url(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}
