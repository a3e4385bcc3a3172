//! Banking API: balance, statements and payment webhooks.

pub mod extrato;
pub mod extrato_types;
pub mod saldo;
pub mod webhook;
pub mod webhook_types;

use std::sync::Arc;

use crate::backend::{endpoint, Backend};

pub use extrato_types::*;
pub use saldo::ConsultarSaldoResponse;
pub use webhook_types::*;

const ENDPOINT_BANKING: [&str; 2] = ["banking", "v2"];

#[derive(Clone)]
pub struct Service {
    backend: Arc<Backend>,
}

impl Service {
    pub fn new(backend: Arc<Backend>) -> Self {
        Self { backend }
    }

    fn path<'a>(&self, rest: &[&'a str]) -> Vec<&'a str> {
        endpoint(&ENDPOINT_BANKING, rest)
    }
}
