use reqwest::Method;

use crate::errors::Result;
use crate::pix::{
    CobrancaImediataRequest, CobrancaImediataResponse, ConsultarCobrancasImediatasRequest,
    ConsultarCobrancasImediatasResponse, Service,
};

impl Service {
    /// Immediate charge with a txid chosen by the bank.
    pub async fn criar_cobranca_imediata(&self, cobranca: &CobrancaImediataRequest) -> Result<CobrancaImediataResponse> {
        let request = self.backend.request(Method::POST, &self.path(&["cob"])).await?.json(cobranca);
        self.backend.execute(request).await
    }

    pub async fn criar_cobranca_imediata_com_txid(
        &self,
        txid: &str,
        cobranca: &CobrancaImediataRequest,
    ) -> Result<CobrancaImediataResponse> {
        let request = self.backend.request(Method::PUT, &self.path(&["cob", txid])).await?.json(cobranca);
        self.backend.execute(request).await
    }

    pub async fn editar_cobranca_imediata(
        &self,
        txid: &str,
        cobranca: &CobrancaImediataRequest,
    ) -> Result<CobrancaImediataResponse> {
        let request = self.backend.request(Method::PATCH, &self.path(&["cob", txid])).await?.json(cobranca);
        self.backend.execute(request).await
    }

    pub async fn consultar_cobranca_imediata(&self, txid: &str) -> Result<CobrancaImediataResponse> {
        let request = self.backend.request(Method::GET, &self.path(&["cob", txid])).await?;
        self.backend.execute(request).await
    }

    pub async fn consultar_cobrancas_imediatas(
        &self,
        filtro: &ConsultarCobrancasImediatasRequest,
    ) -> Result<ConsultarCobrancasImediatasResponse> {
        let request = self.backend.request(Method::GET, &self.path(&["cob"])).await?.query(filtro);
        self.backend.execute(request).await
    }
}
