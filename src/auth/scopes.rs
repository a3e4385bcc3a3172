use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Permission registered for the application in the Internet Banking panel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scope(Cow<'static, str>);

impl Scope {
    /// Statement and balance queries.
    pub const EXTRATO_READ: Scope = Scope::from_static("extrato.read");
    /// Boleto queries and PDF export.
    pub const BOLETO_COBRANCA_READ: Scope = Scope::from_static("boleto-cobranca.read");
    /// Boleto issuing and cancellation.
    pub const BOLETO_COBRANCA_WRITE: Scope = Scope::from_static("boleto-cobranca.write");
    pub const PAGAMENTO_BOLETO_READ: Scope = Scope::from_static("pagamento-boleto.read");
    pub const PAGAMENTO_BOLETO_WRITE: Scope = Scope::from_static("pagamento-boleto.write");
    pub const PAGAMENTO_DARF_WRITE: Scope = Scope::from_static("pagamento-darf.write");
    /// Immediate Pix charges.
    pub const COB_WRITE: Scope = Scope::from_static("cob.write");
    pub const COB_READ: Scope = Scope::from_static("cob.read");
    /// Pix charges with due date.
    pub const COBV_WRITE: Scope = Scope::from_static("cobv.write");
    pub const COBV_READ: Scope = Scope::from_static("cobv.read");
    /// Pix refunds.
    pub const PIX_WRITE: Scope = Scope::from_static("pix.write");
    pub const PIX_READ: Scope = Scope::from_static("pix.read");
    pub const WEBHOOK_READ: Scope = Scope::from_static("webhook.read");
    pub const WEBHOOK_WRITE: Scope = Scope::from_static("webhook.write");
    pub const PAYLOAD_LOCATION_WRITE: Scope = Scope::from_static("payloadlocation.write");
    pub const PAYLOAD_LOCATION_READ: Scope = Scope::from_static("payloadlocation.read");
    pub const PAGAMENTO_PIX_WRITE: Scope = Scope::from_static("pagamento-pix.write");
    pub const PAGAMENTO_PIX_READ: Scope = Scope::from_static("pagamento-pix.read");
    /// Banking API webhooks.
    pub const WEBHOOK_BANKING_WRITE: Scope = Scope::from_static("webhook-banking.write");
    pub const WEBHOOK_BANKING_READ: Scope = Scope::from_static("webhook-banking.read");

    pub const fn from_static(name: &'static str) -> Self {
        Scope(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Scope(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse a comma-separated list, trimming entries and dropping blanks and repeats.
    pub fn parse_list(raw: &str) -> Vec<Scope> {
        let mut scopes: Vec<Scope> = Vec::new();
        for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let scope = Scope::new(name);
            if !scopes.contains(&scope) {
                scopes.push(scope);
            }
        }
        scopes
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Scope {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Scope::new(s.trim()))
    }
}

impl From<&str> for Scope {
    fn from(value: &str) -> Self {
        Scope::new(value)
    }
}
