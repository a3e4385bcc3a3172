use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Withdrawal agent modality for Pix Saque and Pix Troco.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModalidadeAgente {
    /// Commercial establishment.
    #[serde(rename = "AGTEC")]
    EstabelecimentoComercial,
    /// Other legal entity or correspondent in the country.
    #[serde(rename = "AGTOT")]
    OutraPessoaJuridica,
    /// Withdrawal service facilitator.
    #[serde(rename = "AGPSS")]
    FacilitadorServicoSaque,
}

/// Query paging as echoed back by list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Paginacao {
    pub pagina_atual: i32,
    pub itens_por_pagina: i32,
    pub quantidade_de_paginas: i32,
    pub quantidade_total_de_itens: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParametrosConsulta {
    pub inicio: String,
    pub fim: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paginacao: Option<Paginacao>,
}

/// Filter of received transfers. `inicio` and `fim` are RFC 3339 instants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecebidosRequest {
    pub inicio: String,
    pub fim: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_id_presente: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devolucao_presente: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnpj: Option<String>,
    #[serde(rename = "paginacao.paginaAtual", skip_serializing_if = "Option::is_none")]
    pub pagina_atual: Option<i32>,
    #[serde(rename = "paginacao.itensPorPagina", skip_serializing_if = "Option::is_none")]
    pub itens_por_pagina: Option<i32>,
}

impl RecebidosRequest {
    pub fn new(inicio: impl Into<String>, fim: impl Into<String>) -> Self {
        Self { inicio: inicio.into(), fim: fim.into(), ..Default::default() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecebidosResponse {
    pub parametros: Option<ParametrosConsulta>,
    pub pix: Vec<Pix>,
}

/// A received Pix transfer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pix {
    pub end_to_end_id: String,
    pub txid: String,
    pub valor: String,
    /// Receiver key as assigned in the PACS008 message.
    pub chave: String,
    /// Breakdown of `valor`; only present for Saque/Troco or due-date charges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub componentes_valor: Option<ComponentesValor>,
    /// Time the PSP processed the transfer.
    pub horario: String,
    pub info_pagador: String,
    pub devolucoes: Vec<DevolucaoResponse>,
}

/// `valor = original + saque + troco + multa + juros - abatimento - desconto`,
/// counting only the parts present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComponentesValor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<ComponenteValor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saque: Option<ComponenteValor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub troco: Option<ComponenteValor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multa: Option<ComponenteValor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub juros: Option<ComponenteValor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desconto: Option<ComponenteValor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abatimento: Option<ComponenteValor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComponenteValor {
    pub valor: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modalidade_agente: Option<ModalidadeAgente>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub prestador_de_servico_de_saque: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Horario {
    pub solicitacao: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub liquidacao: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DevolucaoStatus {
    EmProcessamento,
    Devolvido,
    NaoRealizado,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevolucaoResponse {
    pub id: String,
    #[serde(default)]
    pub rtr_id: String,
    #[serde(default)]
    pub valor: f64,
    #[serde(default)]
    pub horario: Option<Horario>,
    pub status: DevolucaoStatus,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub descricao: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub motivo: String,
}

/// `Original` refunds a regular Pix or the purchase part of a Pix Troco;
/// `Retirada` refunds a Pix Saque or the change part of a Pix Troco.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NaturezaDevolucao {
    #[default]
    Original,
    Retirada,
}

/// Refund of a received Pix.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolicitarDevolucaoRequest {
    /// End-to-end id of the Pix being refunded.
    #[serde(skip)]
    pub end_to_end_id: String,
    /// Caller-chosen refund id; a random UUID is used when absent.
    #[serde(skip)]
    pub id: Option<String>,
    pub valor: f64,
    pub natureza: NaturezaDevolucao,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub descricao: String,
}

impl SolicitarDevolucaoRequest {
    pub fn new(end_to_end_id: impl Into<String>, valor: f64) -> Self {
        Self {
            end_to_end_id: end_to_end_id.into(),
            id: None,
            valor,
            natureza: NaturezaDevolucao::default(),
            descricao: String::new(),
        }
    }

    /// Refund id, generating and keeping a UUID on first use so retries reuse it.
    pub fn id(&mut self) -> &str {
        self.id.get_or_insert_with(|| Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refund_id_is_generated_once() {
        let mut req = SolicitarDevolucaoRequest::new("E123", 1.5);
        let first = req.id().to_owned();
        assert!(Uuid::parse_str(&first).is_ok());
        assert_eq!(req.id(), first);
    }

    #[test]
    fn refund_body_omits_path_fields() {
        let req = SolicitarDevolucaoRequest { id: Some("dev1".into()), ..SolicitarDevolucaoRequest::new("E123", 10.0) };
        assert_eq!(serde_json::to_value(&req).unwrap(), serde_json::json!({"valor": 10.0, "natureza": "ORIGINAL"}));
    }

    #[test]
    fn recebidos_query_uses_dotted_paging_names() {
        let req = RecebidosRequest { pagina_atual: Some(2), ..RecebidosRequest::new("2024-01-01T00:00:00Z", "2024-01-02T00:00:00Z") };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["paginacao.paginaAtual"], 2);
        assert!(value.get("paginacao.itensPorPagina").is_none());
    }

    #[test]
    fn pix_with_refund_decodes() {
        let pix: Pix = serde_json::from_str(
            r#"{"endToEndId":"E1","txid":"tx","valor":"10.00","chave":"k","horario":"2024-01-01T10:00:00Z",
                "devolucoes":[{"id":"d1","rtrId":"D1","valor":5.0,"horario":{"solicitacao":"2024-01-01T11:00:00Z"},"status":"DEVOLVIDO"}]}"#,
        )
        .unwrap();
        assert_eq!(pix.devolucoes[0].status, DevolucaoStatus::Devolvido);
        assert!(pix.componentes_valor.is_none());
    }
}
