use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::cobranca::Service;
use crate::errors::Result;

/// Which date the summary period applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FiltrarDataOption {
    Vencimento,
    Emissao,
    Pagamento,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SituacaoCobranca {
    Recebido,
    AReceber,
    MarcadoRecebido,
    Atrasado,
    Cancelado,
    Expirado,
    FalhaEmissao,
    EmProcessamento,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoCobranca {
    Simples,
    Parcelado,
    Recorrente,
}

/// Query of the summary call. Dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SumarioRequest {
    pub data_inicial: String,
    pub data_final: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filtrar_data_por: Option<FiltrarDataOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub situacao: Option<SituacaoCobranca>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_cobranca: Option<TipoCobranca>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seu_numero: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pessoa_pagadora: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf_cnpj_pessoa_pagadora: Option<String>,
}

impl SumarioRequest {
    pub fn new(data_inicial: impl Into<String>, data_final: impl Into<String>) -> Self {
        Self { data_inicial: data_inicial.into(), data_final: data_final.into(), ..Default::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SumarioItem {
    pub situacao: SituacaoCobranca,
    #[serde(default)]
    pub valor: i64,
    #[serde(default)]
    pub quantidade: i64,
}

impl Service {
    /// Totals per charge situation. The filter travels as query parameters of a POST.
    pub async fn sumario(&self, filtro: Option<&SumarioRequest>) -> Result<Vec<SumarioItem>> {
        let mut request = self.backend.request(Method::POST, &self.path(&["sumario"])).await?;
        if let Some(filtro) = filtro {
            request = request.query(filtro);
        }
        self.backend.execute(request).await
    }
}
