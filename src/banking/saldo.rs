use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::banking::Service;
use crate::errors::Result;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConsultarSaldoResponse {
    pub disponivel: f64,
}

impl Service {
    /// Account balance, optionally at a past date (`YYYY-MM-DD`).
    pub async fn consultar_saldo(&self, data_saldo: Option<&str>) -> Result<ConsultarSaldoResponse> {
        let mut request = self.backend.request(Method::GET, &self.path(&["saldo"])).await?;
        if let Some(data) = data_saldo.filter(|d| !d.is_empty()) {
            request = request.query(&[("dataSaldo", data)]);
        }
        self.backend.execute(request).await
    }
}
