use std::fmt;
use std::path::Path;

use reqwest::Identity;

use crate::auth::scopes::Scope;
use crate::errors::{Error, Result};
use crate::utils::constants::{
    ENV_CLIENT_ID, ENV_CLIENT_SECRET, ENV_SCOPES, ENV_TLS_PATH, GRANT_TYPE_CLIENT_CREDENTIALS, TLS_CERT_FILE,
    TLS_KEY_FILE,
};

/// PEM encoded client certificate and private key for mutual TLS.
#[derive(Clone)]
pub struct TlsMaterial {
    cert_pem: Vec<u8>,
    key_pem: Vec<u8>,
}

impl TlsMaterial {
    fn identity(&self) -> Result<Identity> {
        let mut pem = Vec::with_capacity(self.cert_pem.len() + self.key_pem.len() + 1);
        pem.extend_from_slice(&self.key_pem);
        pem.push(b'\n');
        pem.extend_from_slice(&self.cert_pem);
        Identity::from_pem(&pem).map_err(|e| Error::config(format!("invalid TLS certificate or key: {e}")))
    }
}

/// Application credentials for the client-credentials grant.
///
/// Immutable once handed to a client; `client_id` and `client_secret` are never empty.
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
    grant_type: &'static str,
    scopes: Vec<Scope>,
    tls: Option<TlsMaterial>,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        let client_id = client_id.into();
        let client_secret = client_secret.into();
        if client_id.trim().is_empty() || client_secret.trim().is_empty() {
            return Err(Error::config("client id and client secret must not be empty"));
        }
        Ok(Self {
            client_id,
            client_secret,
            grant_type: GRANT_TYPE_CLIENT_CREDENTIALS,
            scopes: Vec::new(),
            tls: None,
        })
    }

    /// Build credentials from `INTERBANK_CLIENT_ID`, `INTERBANK_CLIENT_SECRET`,
    /// `INTERBANK_SCOPES` (comma separated) and `INTERBANK_TLS_PATH`
    /// (directory holding `tls.crt` and `tls.key`).
    pub fn from_env() -> Result<Self> {
        let client_id = std::env::var(ENV_CLIENT_ID).unwrap_or_default();
        let client_secret = std::env::var(ENV_CLIENT_SECRET).unwrap_or_default();
        if client_id.is_empty() || client_secret.is_empty() {
            return Err(Error::config(format!("{ENV_CLIENT_ID} and {ENV_CLIENT_SECRET} must be set")));
        }

        let mut creds = Credentials::new(client_id, client_secret)?;
        creds.set_scopes_from_str(&std::env::var(ENV_SCOPES).unwrap_or_default());

        let tls_path = std::env::var(ENV_TLS_PATH).unwrap_or_default();
        if !tls_path.is_empty() {
            let dir = Path::new(&tls_path);
            creds.load_cert_and_key_from_path(dir.join(TLS_CERT_FILE), dir.join(TLS_KEY_FILE))?;
        }
        Ok(creds)
    }

    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Scope>,
    {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the scopes with a comma-separated list; an empty string leaves them untouched.
    pub fn set_scopes_from_str(&mut self, raw: &str) -> &mut Self {
        if !raw.trim().is_empty() {
            self.scopes = Scope::parse_list(raw);
        }
        self
    }

    pub fn set_tls(&mut self, cert_pem: impl Into<Vec<u8>>, key_pem: impl Into<Vec<u8>>) -> Result<&mut Self> {
        let material = TlsMaterial { cert_pem: cert_pem.into(), key_pem: key_pem.into() };
        material.identity()?;
        self.tls = Some(material);
        Ok(self)
    }

    pub fn load_cert_and_key_from_path(
        &mut self,
        cert_path: impl AsRef<Path>,
        key_path: impl AsRef<Path>,
    ) -> Result<&mut Self> {
        let read = |path: &Path| {
            std::fs::read(path).map_err(|e| Error::config(format!("failed to read '{}': {}", path.display(), e)))
        };
        let cert = read(cert_path.as_ref())?;
        let key = read(key_path.as_ref())?;
        self.set_tls(cert, key)
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn has_scopes(&self) -> bool {
        !self.scopes.is_empty()
    }

    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    pub fn scopes_string(&self) -> String {
        self.scopes.iter().map(Scope::as_str).collect::<Vec<_>>().join(" ")
    }

    pub fn has_tls(&self) -> bool {
        self.tls.is_some()
    }

    /// Client identity for mutual TLS, when certificate material is configured.
    pub fn identity(&self) -> Result<Option<Identity>> {
        self.tls.as_ref().map(TlsMaterial::identity).transpose()
    }

    /// Form fields for the token request, in wire order.
    pub fn auth_form(&self) -> Vec<(&'static str, String)> {
        let mut form = vec![
            ("client_id", self.client_id.clone()),
            ("client_secret", self.client_secret.clone()),
            ("grant_type", self.grant_type.to_owned()),
        ];
        if self.has_scopes() {
            form.push(("scope", self.scopes_string()));
        }
        form
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("grant_type", &self.grant_type)
            .field("scopes", &self.scopes)
            .field("tls", &self.tls.is_some())
            .finish()
    }
}
