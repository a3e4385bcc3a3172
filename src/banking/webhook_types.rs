use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::helpers::time::{format_time, parse_time};

/// Which payment notifications a banking webhook receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipoWebhook {
    #[serde(rename = "pix-pagamento")]
    PagamentoPix,
    #[serde(rename = "boleto-pagamento")]
    PagamentoBoleto,
}

impl TipoWebhook {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipoWebhook::PagamentoPix => "pix-pagamento",
            TipoWebhook::PagamentoBoleto => "boleto-pagamento",
        }
    }
}

impl fmt::Display for TipoWebhook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebhookResponse {
    /// Must start with `https://`.
    pub webhook_url: String,
    /// RFC 3339 registration time.
    pub criacao: String,
}

impl WebhookResponse {
    pub fn criado_em(&self) -> Option<DateTime<Utc>> {
        parse_time(&self.criacao)
    }
}

/// Callback history filter. `end_to_end` only applies to `pix-pagamento`,
/// `codigo_transacao` only to `boleto-pagamento`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookCallbacksRequest {
    pub data_hora_inicio: String,
    pub data_hora_fim: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagina: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tamanho_pagina: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_to_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo_transacao: Option<String>,
}

impl WebhookCallbacksRequest {
    pub fn between(inicio: DateTime<Utc>, fim: DateTime<Utc>) -> Self {
        Self { data_hora_inicio: format_time(&inicio), data_hora_fim: format_time(&fim), ..Default::default() }
    }
}

/// One delivery attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebhookCall {
    pub webhook_url: String,
    pub numero_tentativa: i32,
    pub data_envio: String,
    pub sucesso: bool,
    pub http_status: i32,
    pub mensagem_erro: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebhookCallbacksResponse {
    pub total_elementos: i64,
    pub total_paginas: i32,
    pub primeira_pagina: bool,
    pub ultima_pagina: bool,
    pub data: Vec<WebhookCall>,
}
