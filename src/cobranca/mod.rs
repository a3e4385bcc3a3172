//! Cobrança API (boleto with Pix): issuing, summaries and webhooks.

pub mod sumario;
pub mod types;
pub mod webhook;
pub mod webhook_types;

use std::sync::Arc;

use reqwest::Method;

use crate::backend::{endpoint, Backend};
use crate::errors::Result;

pub use sumario::*;
pub use types::*;
pub use webhook_types::*;

const ENDPOINT_COBRANCA: [&str; 3] = ["cobranca", "v3", "cobrancas"];

#[derive(Clone)]
pub struct Service {
    backend: Arc<Backend>,
}

impl Service {
    pub fn new(backend: Arc<Backend>) -> Self {
        Self { backend }
    }

    fn path<'a>(&self, rest: &[&'a str]) -> Vec<&'a str> {
        endpoint(&ENDPOINT_COBRANCA, rest)
    }

    /// Issue a new charge; the returned request code identifies it afterwards.
    pub async fn emitir(&self, cobranca: &EmitirRequest) -> Result<EmitirResponse> {
        let request = self.backend.request(Method::POST, &self.path(&[])).await?.json(cobranca);
        self.backend.execute(request).await
    }
}
