use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::helpers::base64_bytes;

/// Debit or credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipoOperacao {
    #[serde(rename = "D")]
    Debito,
    #[serde(rename = "C")]
    Credito,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoTransacao {
    DebitoEmConta,
    DepositoBoleto,
    AntecipacaoRecebiveis,
    AntecipacaoRecebiveisCartao,
    BoletoCobranca,
    Cambio,
    Cashback,
    Cheque,
    Estorno,
    DomicilioCartao,
    Financiamento,
    Imposto,
    Interpag,
    Investimento,
    Juros,
    MaquininhaGranito,
    Multa,
    Outros,
    Pagamento,
    Pix,
    Proventos,
    Saque,
    CompraDebito,
    DebitoAutomatico,
    Tarifa,
    Transferencia,
    /// Entry that is not a transaction (balance lines and similar).
    #[serde(rename = "")]
    NaoTransacao,
    /// Any type this crate does not know yet.
    #[serde(other)]
    Desconhecido,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoDetalhe {
    Complete,
    Incomplete,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetalhePix {
    pub tx_id: String,
    pub nome_pagador: String,
    pub descricao_pix: String,
    pub cpf_cnpj_pagador: String,
    pub conta_bancaria_recebedor: String,
    pub nome_empresa_pagador: String,
    pub tipo_detalhe: Option<TipoDetalhe>,
    pub end_to_end_id: String,
    pub chave_pix_recebedor: String,
    pub nome_empresa_recebedor: String,
    pub nome_recebedor: String,
    pub agencia_recebedor: String,
    pub cpf_cnpj_recebedor: String,
    pub origem_movimentacao: String,
    pub codigo_solicitacao: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetalheBoletoCobranca {
    pub data_vencimento: String,
    pub data_transacao: String,
    pub nosso_numero: String,
    pub seu_numero: String,
    pub cod_barras: String,
    pub juros: String,
    pub multa: String,
    pub desconto1: String,
    pub desconto2: String,
    pub desconto3: String,
    pub nome: String,
    pub data_limite: String,
    pub tipo_detalhe: String,
    pub cpf_cnpj: String,
    pub data_emissao: String,
    pub abatimento: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetalheCashback {
    pub valor_compra: String,
    pub produto: String,
    pub tipo_detalhe: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetalheCheque {
    pub agencia: String,
    pub numero_cheque_bancario: String,
    pub conta_bancaria: String,
    pub data_retorno: String,
    pub motivo_retorno: String,
    pub descricao_cheque_bancario: String,
    pub nome_empresa: String,
    pub tipo_detalhe: String,
    pub codigo_afiliado: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetalheCompraDebito {
    pub estabelecimento: String,
    pub tipo_detalhe: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetalheDepositoBoleto {
    pub data_vencimento: String,
    pub tipo_detalhe: String,
    pub data_emissao: String,
    pub nosso_numero: String,
    pub cod_barras: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetalheTransferencia {
    pub conta_bancaria_pagador: String,
    pub descricao_transferencia: String,
    pub agencia_pagador: String,
    pub banco_recebedor: String,
    pub conta_bancaria_recebedor: String,
    pub cpf_cnpj_recebedor: String,
    pub cpf_cnpj_pagador: String,
    pub nome_pagador: String,
    pub nome_empresa_pagador: String,
    pub nome_recebedor: String,
    pub tipo_detalhe: String,
    pub id_transferencia: String,
    pub agencia_recebedor: String,
    pub data_efetivacao: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetalhePagamento {
    pub valor_total: String,
    pub detalhe_descricao: String,
    pub conta_bancaria: String,
    pub agencia: String,
    pub adicionado: String,
    pub data_vencimento: String,
    pub codigo_afiliado: String,
    pub empresa_emissora: String,
    pub valor_original: String,
    pub desconto: String,
    pub cpf_cnpj: String,
    pub valor_principal: String,
    pub periodo_apuracao: String,
    pub valor_aumentado: String,
    pub cod_barras: String,
    pub valor_parcial: String,
    pub hora: String,
    pub juros: String,
    pub multa: String,
    pub empresa_origem: String,
    pub nome_destinatario: String,
    pub tipo_detalhe: String,
    pub nome_origem: String,
    pub codigo_receita: String,
    pub linha_digitavel: String,
    pub autenticacao: String,
}

/// Transaction details, shaped by the transaction type.
#[derive(Debug, Clone, PartialEq)]
pub enum Detalhe {
    Pix(DetalhePix),
    BoletoCobranca(DetalheBoletoCobranca),
    Cashback(DetalheCashback),
    Cheque(DetalheCheque),
    CompraDebito(DetalheCompraDebito),
    DepositoBoleto(DetalheDepositoBoleto),
    Transferencia(DetalheTransferencia),
    Pagamento(DetalhePagamento),
    Outro(Value),
}

/// Statement entry. `cpmf` only appears in the simple statement, the id/date/details
/// fields only in the complete one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transacao {
    #[serde(default)]
    pub data_entrada: String,
    pub tipo_transacao: TipoTransacao,
    pub tipo_operacao: TipoOperacao,
    #[serde(default)]
    pub valor: String,
    #[serde(default)]
    pub titulo: String,
    #[serde(default)]
    pub descricao: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpmf: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_transacao: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_inclusao: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_transacao: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detalhes: Option<Value>,
}

impl Transacao {
    /// Decode the raw details into any target shape; `None` when absent.
    pub fn detalhe_as<T: DeserializeOwned>(&self) -> serde_json::Result<Option<T>> {
        match &self.detalhes {
            None | Some(Value::Null) => Ok(None),
            Some(raw) => serde_json::from_value(raw.clone()).map(Some),
        }
    }

    /// Decode the details according to `tipo_transacao`.
    pub fn detalhe(&self) -> serde_json::Result<Option<Detalhe>> {
        let detalhe = match self.tipo_transacao {
            TipoTransacao::Pix => self.detalhe_as()?.map(Detalhe::Pix),
            TipoTransacao::BoletoCobranca => self.detalhe_as()?.map(Detalhe::BoletoCobranca),
            TipoTransacao::Cashback => self.detalhe_as()?.map(Detalhe::Cashback),
            TipoTransacao::Cheque => self.detalhe_as()?.map(Detalhe::Cheque),
            TipoTransacao::CompraDebito => self.detalhe_as()?.map(Detalhe::CompraDebito),
            TipoTransacao::DepositoBoleto => self.detalhe_as()?.map(Detalhe::DepositoBoleto),
            TipoTransacao::Transferencia => self.detalhe_as()?.map(Detalhe::Transferencia),
            TipoTransacao::Pagamento => self.detalhe_as()?.map(Detalhe::Pagamento),
            _ => self.detalhe_as()?.map(Detalhe::Outro),
        };
        Ok(detalhe)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConsultarExtratoResponse {
    pub transacoes: Vec<Transacao>,

    // paging, complete statement only
    pub total_paginas: Option<i64>,
    pub total_elementos: Option<i64>,
    pub ultima_pagina: Option<bool>,
    pub primeira_pagina: Option<bool>,
    pub tamanho_pagina: Option<i32>,
    pub numero_de_elementos: Option<i64>,
}

/// Filters for the complete statement; dates as `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultarExtratoCompletoRequest {
    pub data_inicio: String,
    pub data_fim: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagina: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tamanho_pagina: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_operacao: Option<TipoOperacao>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_transacao: Option<TipoTransacao>,
}

impl ConsultarExtratoCompletoRequest {
    pub fn new(data_inicio: impl Into<String>, data_fim: impl Into<String>) -> Self {
        Self { data_inicio: data_inicio.into(), data_fim: data_fim.into(), ..Default::default() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportarExtratoResponse {
    #[serde(with = "base64_bytes", default)]
    pub pdf: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pix_details_are_decoded_by_type() {
        let transacao: Transacao = serde_json::from_value(json!({
            "idTransacao": "abc",
            "dataInclusao": "2024-10-20 10:00:00",
            "dataTransacao": "2024-10-20",
            "tipoTransacao": "PIX",
            "tipoOperacao": "C",
            "valor": "10.50",
            "titulo": "Pix recebido",
            "descricao": "PIX RECEBIDO - Cp :00000000-FULANO",
            "detalhes": {
                "txId": "tx1",
                "nomePagador": "Fulano",
                "endToEndId": "E123",
                "tipoDetalhe": "COMPLETE"
            }
        }))
        .unwrap();

        match transacao.detalhe().unwrap() {
            Some(Detalhe::Pix(pix)) => {
                assert_eq!(pix.tx_id, "tx1");
                assert_eq!(pix.end_to_end_id, "E123");
                assert_eq!(pix.tipo_detalhe, Some(TipoDetalhe::Complete));
            }
            other => panic!("unexpected details: {:?}", other),
        }
    }

    #[test]
    fn unknown_transaction_type_keeps_raw_details() {
        let transacao: Transacao = serde_json::from_value(json!({
            "tipoTransacao": "NOVO_TIPO",
            "tipoOperacao": "D",
            "detalhes": {"campo": 1}
        }))
        .unwrap();
        assert_eq!(transacao.tipo_transacao, TipoTransacao::Desconhecido);
        assert_eq!(transacao.detalhe().unwrap(), Some(Detalhe::Outro(json!({"campo": 1}))));
    }

    #[test]
    fn missing_details_are_none() {
        let transacao: Transacao =
            serde_json::from_value(json!({"tipoTransacao": "", "tipoOperacao": "C", "cpmf": "0"})).unwrap();
        assert_eq!(transacao.tipo_transacao, TipoTransacao::NaoTransacao);
        assert_eq!(transacao.detalhe().unwrap(), None);
    }

    #[test]
    fn pdf_is_base64_on_the_wire() {
        let resp: ExportarExtratoResponse = serde_json::from_str(r#"{"pdf":"JVBERi0xLjQ="}"#).unwrap();
        assert_eq!(resp.pdf, b"%PDF-1.4");
    }
}
