use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoPessoa {
    Fisica,
    Juridica,
}

/// Payer or final beneficiary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pessoa {
    pub nome: String,
    pub cpf_cnpj: String,
    pub tipo_pessoa: TipoPessoa,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ddd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numero: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complemento: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endereco: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bairro: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cep: Option<String>,
}

impl Pessoa {
    pub fn new(nome: impl Into<String>, cpf_cnpj: impl Into<String>, tipo_pessoa: TipoPessoa) -> Self {
        Self {
            nome: nome.into(),
            cpf_cnpj: cpf_cnpj.into(),
            tipo_pessoa,
            email: None,
            ddd: None,
            telefone: None,
            numero: None,
            complemento: None,
            endereco: None,
            bairro: None,
            cidade: None,
            uf: None,
            cep: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormaRecebimento {
    Pix,
    Boleto,
}

impl FormaRecebimento {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormaRecebimento::Pix => "PIX",
            FormaRecebimento::Boleto => "BOLETO",
        }
    }

    /// Comma-separated wire form of a set of receiving methods.
    pub fn join(formas: &[FormaRecebimento]) -> String {
        formas.iter().map(FormaRecebimento::as_str).collect::<Vec<_>>().join(",")
    }
}

/// Discount, fine or interest condition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponenteValor {
    pub codigo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valor: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantidade_dias: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CobrancaMensagem {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub linha1: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub linha2: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub linha3: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub linha4: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub linha5: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmitirRequest {
    pub seu_numero: String,
    pub valor_nominal: String,
    /// `YYYY-MM-DD`
    pub data_vencimento: String,
    /// Days after due date before automatic cancellation (0 to 60).
    pub num_dias_agenda: String,
    /// See [`FormaRecebimento::join`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formas_recebimento: Option<String>,
    pub pagador: Pessoa,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beneficiario_final: Option<Pessoa>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desconto: Option<ComponenteValor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multa: Option<ComponenteValor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mora: Option<ComponenteValor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mensagem: Option<CobrancaMensagem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmitirResponse {
    pub codigo_solicitacao: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn emitir_request_omits_unset_sections() {
        let req = EmitirRequest {
            seu_numero: "123".into(),
            valor_nominal: "10.00".into(),
            data_vencimento: "2024-12-01".into(),
            num_dias_agenda: "0".into(),
            formas_recebimento: Some(FormaRecebimento::join(&[FormaRecebimento::Boleto, FormaRecebimento::Pix])),
            pagador: Pessoa::new("Fulano", "12345678909", TipoPessoa::Fisica),
            beneficiario_final: None,
            desconto: None,
            multa: None,
            mora: None,
            mensagem: None,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "seuNumero": "123",
                "valorNominal": "10.00",
                "dataVencimento": "2024-12-01",
                "numDiasAgenda": "0",
                "formasRecebimento": "BOLETO,PIX",
                "pagador": {"nome": "Fulano", "cpfCnpj": "12345678909", "tipoPessoa": "FISICA"}
            })
        );
    }
}
