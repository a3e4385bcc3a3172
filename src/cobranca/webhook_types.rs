use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::helpers::time::{format_time, parse_time};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Webhook {
    pub webhook_url: String,
    pub criacao: String,
    pub atualizacao: String,
}

impl Webhook {
    pub fn criado_em(&self) -> Option<DateTime<Utc>> {
        parse_time(&self.criacao)
    }

    pub fn atualizado_em(&self) -> Option<DateTime<Utc>> {
        parse_time(&self.atualizacao)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebhookCallback {
    pub webhook_url: String,
    pub numero_tentativa: i32,
    pub data_hora_disparo: String,
    pub sucesso: bool,
    pub http_status: i32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mensagem_erro: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebhookCallbacksResponse {
    pub total_elementos: i64,
    pub total_paginas: i64,
    pub primeira_pagina: bool,
    pub ultima_pagina: bool,
    pub data: Vec<WebhookCallback>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultarWebhookCallbacksRequest {
    pub data_hora_inicio: String,
    pub data_hora_fim: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagina: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tamanho_pagina: Option<i32>,
    /// Restrict to callbacks of one charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo_solicitacao: Option<Uuid>,
}

impl ConsultarWebhookCallbacksRequest {
    pub fn between(inicio: DateTime<Utc>, fim: DateTime<Utc>) -> Self {
        Self { data_hora_inicio: format_time(&inicio), data_hora_fim: format_time(&fim), ..Default::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callbacks_response_tolerates_missing_error_message() {
        let resp: WebhookCallbacksResponse = serde_json::from_str(
            r#"{"totalElementos":1,"totalPaginas":1,"primeiraPagina":true,"ultimaPagina":true,
                "data":[{"webhookUrl":"https://hook","numeroTentativa":1,"dataHoraDisparo":"2024-10-01T10:00:00Z","sucesso":true,"httpStatus":200}]}"#,
        )
        .unwrap();
        assert_eq!(resp.data.len(), 1);
        assert!(resp.data[0].mensagem_erro.is_empty());
    }
}
