use reqwest::Method;

use crate::errors::Result;
use crate::pix::{DevolucaoResponse, Pix, RecebidosRequest, RecebidosResponse, Service, SolicitarDevolucaoRequest};

impl Service {
    pub async fn consultar(&self, end_to_end_id: &str) -> Result<Pix> {
        let request = self.backend.request(Method::GET, &self.path(&["pix", end_to_end_id])).await?;
        self.backend.execute(request).await
    }

    /// Received transfers in the period.
    pub async fn consultar_recebidos(&self, filtro: &RecebidosRequest) -> Result<RecebidosResponse> {
        let request = self.backend.request(Method::GET, &self.path(&["pix"])).await?.query(filtro);
        self.backend.execute(request).await
    }

    /// Request a refund. When `request.id` is unset a UUID is generated and left
    /// in the request, so a retry with the same request targets the same refund.
    pub async fn solicitar_devolucao(&self, request: &mut SolicitarDevolucaoRequest) -> Result<DevolucaoResponse> {
        let id = request.id().to_owned();
        let path = self.path(&["pix", request.end_to_end_id.as_str(), "devolucao", id.as_str()]);
        let http = self.backend.request(Method::PUT, &path).await?.json(&*request);
        self.backend.execute(http).await
    }

    pub async fn consultar_devolucao(&self, end_to_end_id: &str, id: &str) -> Result<DevolucaoResponse> {
        let request =
            self.backend.request(Method::GET, &self.path(&["pix", end_to_end_id, "devolucao", id])).await?;
        self.backend.execute(request).await
    }
}
