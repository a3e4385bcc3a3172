use reqwest::{Method, RequestBuilder};

use crate::banking::{ConsultarExtratoCompletoRequest, ConsultarExtratoResponse, ExportarExtratoResponse, Service};
use crate::errors::Result;

fn with_period(mut request: RequestBuilder, data_inicio: &str, data_fim: &str) -> RequestBuilder {
    if !data_inicio.is_empty() {
        request = request.query(&[("dataInicio", data_inicio)]);
    }
    if !data_fim.is_empty() {
        request = request.query(&[("dataFim", data_fim)]);
    }
    request
}

impl Service {
    /// Statement for the period as a PDF document.
    pub async fn exportar_extrato(&self, data_inicio: &str, data_fim: &str) -> Result<ExportarExtratoResponse> {
        let request = self.backend.request(Method::GET, &self.path(&["extrato", "exportar"])).await?;
        self.backend.execute(with_period(request, data_inicio, data_fim)).await
    }

    /// Paged statement with per-transaction details.
    pub async fn consultar_extrato_completo(
        &self,
        filtro: Option<&ConsultarExtratoCompletoRequest>,
    ) -> Result<ConsultarExtratoResponse> {
        let mut request = self.backend.request(Method::GET, &self.path(&["extrato", "completo"])).await?;
        if let Some(filtro) = filtro {
            request = request.query(filtro);
        }
        self.backend.execute(request).await
    }

    pub async fn consultar_extrato(&self, data_inicio: &str, data_fim: &str) -> Result<ConsultarExtratoResponse> {
        let request = self.backend.request(Method::GET, &self.path(&["extrato"])).await?;
        self.backend.execute(with_period(request, data_inicio, data_fim)).await
    }
}
