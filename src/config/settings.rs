use std::time::Duration;

use serde::Deserialize;

use crate::auth::Credentials;
use crate::backend::BackendSettings;
use crate::errors::Result;
use crate::utils::constants::{DEFAULT_HTTP_TIMEOUT_MS, PRODUCTION_URL, SANDBOX_URL};

/// ================================
/// Full client configuration
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    pub credentials: CredentialsConfig,
    #[serde(default)]
    pub settings: SettingsConfig,
}

impl ClientConfig {
    pub fn credentials(&self) -> Result<Credentials> {
        let creds = &self.credentials;
        let mut credentials = Credentials::new(creds.client_id.as_str(), creds.client_secret.as_str())?
            .with_scopes(creds.scopes.iter().map(String::as_str));
        if let Some(tls) = &creds.tls {
            credentials.load_cert_and_key_from_path(&tls.cert_path, &tls.key_path)?;
        }
        Ok(credentials)
    }

    pub fn backend_settings(&self) -> BackendSettings {
        let settings = &self.settings;
        let base_url = match (&settings.base_url, settings.sandbox) {
            (Some(url), _) => url.clone(),
            (None, true) => SANDBOX_URL.to_owned(),
            (None, false) => PRODUCTION_URL.to_owned(),
        };
        BackendSettings {
            base_url,
            account_number: settings.account_number.clone(),
            timeout: Duration::from_millis(settings.timeout_ms.unwrap_or(DEFAULT_HTTP_TIMEOUT_MS)),
        }
    }
}

/// ================================
/// Application credentials
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct CredentialsConfig {
    pub client_id: String,
    pub client_secret: String,
    #[serde(default)]
    pub scopes: Vec<String>,
    pub tls: Option<TlsConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TlsConfig {
    pub cert_path: String,
    pub key_path: String,
}

/// ================================
/// Transport and process settings
/// ================================
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SettingsConfig {
    /// Overrides `sandbox` when set.
    pub base_url: Option<String>,
    #[serde(default)]
    pub sandbox: bool,
    pub account_number: Option<String>,
    pub timeout_ms: Option<u64>,
    pub logging: Option<LoggingConfig>,
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    #[serde(default = "LogFormat::from_env")]
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: impl Into<String>, format: LogFormat) -> Self {
        Self { level: level.into(), format }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new("info", LogFormat::Compact)
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT").unwrap_or_default().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}
