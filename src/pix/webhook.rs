use reqwest::Method;
use serde_json::json;

use crate::errors::Result;
use crate::pix::{CallbacksResponse, ConsultarWebhookCallbacksRequest, Service, WebhookResponse};

impl Service {
    /// Register the URL notified of transfers received on a Pix key.
    pub async fn criar_webhook(&self, chave: &str, webhook_url: &str) -> Result<()> {
        let request = self
            .backend
            .request(Method::PUT, &self.path(&["webhook", chave]))
            .await?
            .json(&json!({ "webhookUrl": webhook_url }));
        self.backend.execute_empty(request).await
    }

    pub async fn consultar_webhook(&self, chave: &str) -> Result<WebhookResponse> {
        let request = self.backend.request(Method::GET, &self.path(&["webhook", chave])).await?;
        self.backend.execute(request).await
    }

    pub async fn deletar_webhook(&self, chave: &str) -> Result<()> {
        let request = self.backend.request(Method::DELETE, &self.path(&["webhook", chave])).await?;
        self.backend.execute_empty(request).await
    }

    pub async fn consultar_webhook_callbacks(
        &self,
        filtro: Option<&ConsultarWebhookCallbacksRequest>,
    ) -> Result<CallbacksResponse> {
        let mut request = self.backend.request(Method::GET, &self.path(&["webhook", "callbacks"])).await?;
        if let Some(filtro) = filtro {
            request = request.query(filtro);
        }
        self.backend.execute(request).await
    }
}
