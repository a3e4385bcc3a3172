use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use regex::Regex;
use tracing::debug;

use crate::config::settings::{ClientConfig, LoggingConfig};

/// Load a YAML config file, expanding `${VAR}` and `${VAR:default}` first.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ClientConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).with_context(|| format!("failed to read config '{}'", path.display()))?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<ClientConfig> {
    let expanded = expand_env_vars(content)?;
    let mut config: ClientConfig = serde_yaml::from_str(&expanded).context("invalid config format")?;

    // Apply defaults
    if config.settings.logging.is_none() {
        config.settings.logging = Some(LoggingConfig::default());
    }

    debug!("validating config ...");
    validate(&config)?;
    Ok(config)
}

fn validate(config: &ClientConfig) -> Result<()> {
    if config.credentials.client_id.trim().is_empty() {
        bail!("credentials.client_id must not be empty");
    }
    if config.credentials.client_secret.trim().is_empty() {
        bail!("credentials.client_secret must not be empty");
    }
    if config.settings.timeout_ms == Some(0) {
        bail!("settings.timeout_ms must be greater than zero");
    }
    if let Some(url) = &config.settings.base_url {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            bail!("settings.base_url '{}' must be an http(s) url", url);
        }
    }
    Ok(())
}

fn expand_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{(\w+)(?::([^\}]+))?\}")?;
    Ok(re
        .replace_all(input, |caps: &regex::Captures| {
            let var = &caps[1];
            let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            std::env::var(var).unwrap_or_else(|_| default.to_string())
        })
        .to_string())
}
