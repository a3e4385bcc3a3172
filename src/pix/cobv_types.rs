use serde::{Deserialize, Serialize};

use crate::pix::{CobrancaStatus, Identificador, InfoAdicional, Loc, ParametrosConsulta};

numeric_enum! {
    ModalidadeMulta { ValorFixo = 1, Percentual = 2 }
}

numeric_enum! {
    ModalidadeJuros {
        ValorDiasCorridos = 1,
        PercentualDia = 2,
        PercentualMes = 3,
        PercentualAno = 4,
        ValorDiasUteis = 5,
        PercentualDiaUteis = 6,
        PercentualMesUteis = 7,
        PercentualAnoUteis = 8,
    }
}

numeric_enum! {
    ModalidadeAbatimento { ValorFixo = 1, Percentual = 2 }
}

/// Discount modality; unlike the others it travels as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModalidadeDesconto {
    #[serde(rename = "1")]
    ValorFixoAteDataInformada,
    #[serde(rename = "2")]
    PercentualAteDataInformada,
    #[serde(rename = "3")]
    ValorPorAntecipacaoDiaCorrido,
    #[serde(rename = "4")]
    ValorPorAntecipacaoDiaUtil,
    #[serde(rename = "5")]
    PercentualPorAntecipacaoDiaCorrido,
    #[serde(rename = "6")]
    PercentualPorAntecipacaoDiaUtil,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalendarioComVencimento {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub criacao: String,
    /// `YYYY-MM-DD`
    pub data_de_vencimento: String,
    /// Days after the due date during which the charge can still be paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validade_apos_vencimento: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponenteValorMulta {
    pub modalidade: ModalidadeMulta,
    pub valor_perc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponenteValorJuros {
    pub modalidade: ModalidadeJuros,
    pub valor_perc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponenteValorAbatimento {
    pub modalidade: ModalidadeAbatimento,
    pub valor_perc: String,
}

/// Early payment discount until `data` (before the due date).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescontoDataFixa {
    pub data: String,
    pub valor_perc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponenteValorDesconto {
    pub modalidade: ModalidadeDesconto,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub valor_perc: String,
    /// Up to three entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub desconto_data_fixa: Vec<DescontoDataFixa>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValorCobrancaComVencimento {
    pub original: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multa: Option<ComponenteValorMulta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub juros: Option<ComponenteValorJuros>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abatimento: Option<ComponenteValorAbatimento>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desconto: Option<ComponenteValorDesconto>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CobrancaComVencimentoRequest {
    pub calendario: CalendarioComVencimento,
    pub devedor: Identificador,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
    pub valor: ValorCobrancaComVencimento,
    pub chave: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub info_adicionais: Vec<InfoAdicional>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub solicitacao_pagador: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CobrancaComVencimentoResponse {
    pub txid: String,
    #[serde(default)]
    pub calendario: CalendarioComVencimento,
    #[serde(default)]
    pub devedor: Option<Identificador>,
    #[serde(default)]
    pub recebedor: Option<Identificador>,
    #[serde(default)]
    pub loc: Option<Loc>,
    pub status: CobrancaStatus,
    #[serde(default)]
    pub chave: String,
    #[serde(default)]
    pub valor: ValorCobrancaComVencimento,
    #[serde(default)]
    pub pix_copia_e_cola: String,
    #[serde(default)]
    pub info_adicionais: Vec<InfoAdicional>,
    #[serde(default)]
    pub solicitacao_pagador: String,
    #[serde(default)]
    pub revisao: i32,
    /// Payments of the charge, kept undecoded.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pix: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultarCobrancasComVencimentoRequest {
    pub inicio: String,
    pub fim: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnpj: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_presente: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CobrancaStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lote_cob_v_id: Option<String>,
    #[serde(rename = "paginacao.paginaAtual", skip_serializing_if = "Option::is_none")]
    pub pagina_atual: Option<i32>,
    #[serde(rename = "paginacao.itensPorPagina", skip_serializing_if = "Option::is_none")]
    pub itens_por_pagina: Option<i32>,
}

impl ConsultarCobrancasComVencimentoRequest {
    pub fn new(inicio: impl Into<String>, fim: impl Into<String>) -> Self {
        Self { inicio: inicio.into(), fim: fim.into(), ..Default::default() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConsultarCobrancasComVencimentoResponse {
    pub parametros: Option<ParametrosConsulta>,
    pub cobs: Vec<CobrancaComVencimentoResponse>,
}
