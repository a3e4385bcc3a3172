use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use tracing::debug;

use crate::auth::{Credentials, Token};
use crate::backend::{Backend, BackendSettings};
use crate::config::ClientConfig;
use crate::errors::{Error, Result};
use crate::observability::metrics::Metrics;
use crate::utils::constants::{ENV_USE_SANDBOX, SANDBOX_URL};
use crate::{banking, cobranca, pix};

/// Entry point: one token cache shared by the banking, cobrança and Pix services.
#[derive(Clone)]
pub struct Client {
    backend: Arc<Backend>,
    banking: banking::Service,
    cobranca: cobranca::Service,
    pix: pix::Service,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Production client with default settings.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::builder().credentials(credentials).build()
    }

    /// Credentials from `INTERBANK_*` variables; `INTERBANK_USE_SANDBOX=true` selects the sandbox.
    pub fn from_env() -> Result<Self> {
        let mut builder = Self::builder().credentials(Credentials::from_env()?);
        if std::env::var(ENV_USE_SANDBOX).is_ok_and(|v| v == "true") {
            builder = builder.sandbox();
        }
        builder.build()
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let settings = config.backend_settings();
        debug!("building client for {}", settings.base_url);
        ClientBuilder { credentials: Some(config.credentials()?), settings }.build()
    }

    fn from_backend(backend: Backend) -> Self {
        let backend = Arc::new(backend);
        Self {
            banking: banking::Service::new(backend.clone()),
            cobranca: cobranca::Service::new(backend.clone()),
            pix: pix::Service::new(backend.clone()),
            backend,
        }
    }

    /// Current access token, refreshed first when missing or about to expire.
    pub async fn token(&self) -> Result<Token> {
        self.backend.token().await
    }

    pub fn banking(&self) -> &banking::Service {
        &self.banking
    }

    pub fn cobranca(&self) -> &cobranca::Service {
        &self.cobranca
    }

    pub fn pix(&self) -> &pix::Service {
        &self.pix
    }

    pub fn metrics(&self) -> &Metrics {
        self.backend.metrics()
    }

    pub fn base_url(&self) -> &Url {
        self.backend.base_url()
    }
}

#[derive(Debug, Default)]
pub struct ClientBuilder {
    credentials: Option<Credentials>,
    settings: BackendSettings,
}

impl ClientBuilder {
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.settings.base_url = base_url.into();
        self
    }

    pub fn sandbox(self) -> Self {
        self.base_url(SANDBOX_URL)
    }

    /// Checking account sent as `x-conta-corrente`; needed when the application
    /// has access to more than one account.
    pub fn account_number(mut self, account_number: impl Into<String>) -> Self {
        self.settings.account_number = Some(account_number.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.settings.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<Client> {
        let credentials = self.credentials.ok_or_else(|| Error::config("credentials are required"))?;
        Ok(Client::from_backend(Backend::new(credentials, &self.settings)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::PRODUCTION_URL;

    #[test]
    fn builder_requires_credentials() {
        assert!(matches!(Client::builder().build(), Err(Error::Config(_))));
    }

    #[test]
    fn builder_defaults_to_production() {
        let client = Client::new(Credentials::new("id", "secret").unwrap()).unwrap();
        assert_eq!(client.base_url().as_str(), format!("{PRODUCTION_URL}/"));
    }

    #[test]
    fn sandbox_switches_base_url() {
        let client =
            Client::builder().credentials(Credentials::new("id", "secret").unwrap()).sandbox().build().unwrap();
        assert_eq!(client.base_url().host_str(), Some("cdpj-sandbox.partners.uatinter.co"));
    }
}
