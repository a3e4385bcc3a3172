use serde::{Deserialize, Serialize};

use crate::pix::{ModalidadeAgente, ParametrosConsulta};

numeric_enum! {
    /// Whether the payer may change the charged amount.
    ModalidadeAlteracao { NaoPermitido = 0, Permitido = 1 }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipoCob {
    #[serde(rename = "cob")]
    Imediata,
    #[serde(rename = "cobv")]
    ComVencimento,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CobrancaStatus {
    Ativa,
    Concluida,
    RemovidaPeloUsuarioRecebedor,
    RemovidaPeloPsp,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalendarioSemVencimento {
    /// Seconds until the charge expires.
    pub expiracao: i32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub criacao: String,
}

/// Debtor or receiver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Identificador {
    pub nome: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cpf: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cnpj: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub nome_fantasia: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cidade: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub uf: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cep: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub logradouro: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComponenteValorPix {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub valor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modalidade_agente: Option<ModalidadeAgente>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modalidade_alteracao: Option<ModalidadeAlteracao>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub prestador_do_servico_de_saque: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValorCobranca {
    pub original: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modalidade_alteracao: Option<ModalidadeAlteracao>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retirada: Option<ComponenteValorPix>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saque: Option<ComponenteValorPix>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub troco: Option<ComponenteValorPix>,
}

/// Name/value pair shown to the payer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfoAdicional {
    pub nome: String,
    pub valor: String,
}

/// Payload location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loc {
    pub id: i64,
    pub tipo_cob: TipoCob,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub criacao: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CobrancaImediataRequest {
    pub calendario: CalendarioSemVencimento,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devedor: Option<Identificador>,
    pub valor: ValorCobranca,
    pub chave: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub info_adicionais: Vec<InfoAdicional>,
    /// Prompt shown to the payer, at most 140 characters.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub solicitacao_pagador: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
    /// Only meaningful when editing, to remove a charge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CobrancaStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CobrancaImediataResponse {
    #[serde(default)]
    pub calendario: CalendarioSemVencimento,
    pub txid: String,
    #[serde(default)]
    pub loc: Option<Loc>,
    #[serde(default)]
    pub location: String,
    pub status: CobrancaStatus,
    #[serde(default)]
    pub devedor: Option<Identificador>,
    #[serde(default)]
    pub valor: ValorCobranca,
    #[serde(default)]
    pub chave: String,
    #[serde(default)]
    pub info_adicionais: Vec<InfoAdicional>,
    #[serde(default)]
    pub solicitacao_pagador: String,
    /// BR Code of the charge.
    #[serde(default)]
    pub pix_copia_e_cola: String,
    /// Starts at zero and grows by one on every change other than `loc`.
    #[serde(default)]
    pub revisao: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultarCobrancasImediatasRequest {
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
    #[serde(rename = "paginacao.paginaAtual", skip_serializing_if = "Option::is_none")]
    pub pagina_atual: Option<i32>,
    #[serde(rename = "paginacao.itensPorPagina", skip_serializing_if = "Option::is_none")]
    pub itens_por_pagina: Option<i32>,
}

impl ConsultarCobrancasImediatasRequest {
    pub fn new(inicio: impl Into<String>, fim: impl Into<String>) -> Self {
        Self { inicio: inicio.into(), fim: fim.into(), ..Default::default() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConsultarCobrancasImediatasResponse {
    pub parametros: Option<ParametrosConsulta>,
    pub cobs: Vec<CobrancaImediataResponse>,
}
