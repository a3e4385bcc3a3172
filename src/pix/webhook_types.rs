use serde::{Deserialize, Serialize};

use crate::pix::Pix;

/// Body the bank posts to a registered Pix webhook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookCall {
    pub pix: Vec<Pix>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebhookResponse {
    pub webhook_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub chave: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub criacao: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CallbackItem {
    pub webhook_url: String,
    pub numero_tentativa: i32,
    pub data_hora_disparo: String,
    pub sucesso: bool,
    pub http_status: i32,
    pub mensagem_erro: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CallbacksResponse {
    pub total_elementos: i64,
    pub total_paginas: i64,
    pub primeira_pagina: bool,
    pub ultima_pagina: bool,
    pub data: Vec<CallbackItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultarWebhookCallbacksRequest {
    pub data_hora_inicio: String,
    pub data_hora_fim: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagina: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tamanho_pagina: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inbound_callback_decodes() {
        let call: WebhookCall = serde_json::from_str(
            r#"{"pix":[{"endToEndId":"E0000","txid":"tx1","chave":"key","valor":"12.34","horario":"2024-03-01T12:00:00.000Z","infoPagador":"obrigado"}]}"#,
        )
        .unwrap();
        assert_eq!(call.pix.len(), 1);
        assert_eq!(call.pix[0].valor, "12.34");
        assert!(call.pix[0].devolucoes.is_empty());
    }
}
