//! Shared constants and invariants

/// Subtracted from the server-declared lifetime so refresh happens before the real expiry.
pub const TOKEN_SAFETY_MARGIN_SECS: i64 = 180;
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 30_000;

pub const PRODUCTION_URL: &str = "https://cdpj.partners.bancointer.com.br";
pub const SANDBOX_URL: &str = "https://cdpj-sandbox.partners.uatinter.co";

pub const OAUTH_ENDPOINT: [&str; 3] = ["oauth", "v2", "token"];
pub const GRANT_TYPE_CLIENT_CREDENTIALS: &str = "client_credentials";
pub const ACCOUNT_HEADER: &str = "x-conta-corrente";

// Environment
pub const ENV_CLIENT_ID: &str = "INTERBANK_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "INTERBANK_CLIENT_SECRET";
pub const ENV_SCOPES: &str = "INTERBANK_SCOPES";
pub const ENV_TLS_PATH: &str = "INTERBANK_TLS_PATH";
pub const ENV_USE_SANDBOX: &str = "INTERBANK_USE_SANDBOX";

pub const TLS_CERT_FILE: &str = "tls.crt";
pub const TLS_KEY_FILE: &str = "tls.key";
