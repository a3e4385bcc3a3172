use reqwest::Method;

use crate::errors::Result;
use crate::pix::{
    CobrancaComVencimentoRequest, CobrancaComVencimentoResponse, ConsultarCobrancasComVencimentoRequest,
    ConsultarCobrancasComVencimentoResponse, Service,
};

impl Service {
    /// Due-date charges always carry a caller-chosen txid.
    pub async fn criar_cobranca_com_vencimento(
        &self,
        txid: &str,
        cobranca: &CobrancaComVencimentoRequest,
    ) -> Result<CobrancaComVencimentoResponse> {
        let request = self.backend.request(Method::PUT, &self.path(&["cobv", txid])).await?.json(cobranca);
        self.backend.execute(request).await
    }

    pub async fn editar_cobranca_com_vencimento(
        &self,
        txid: &str,
        cobranca: &CobrancaComVencimentoRequest,
    ) -> Result<CobrancaComVencimentoResponse> {
        let request = self.backend.request(Method::PATCH, &self.path(&["cobv", txid])).await?.json(cobranca);
        self.backend.execute(request).await
    }

    pub async fn consultar_cobranca_com_vencimento(&self, txid: &str) -> Result<CobrancaComVencimentoResponse> {
        let request = self.backend.request(Method::GET, &self.path(&["cobv", txid])).await?;
        self.backend.execute(request).await
    }

    pub async fn consultar_cobrancas_com_vencimento(
        &self,
        filtro: &ConsultarCobrancasComVencimentoRequest,
    ) -> Result<ConsultarCobrancasComVencimentoResponse> {
        let request = self.backend.request(Method::GET, &self.path(&["cobv"])).await?.query(filtro);
        self.backend.execute(request).await
    }
}
