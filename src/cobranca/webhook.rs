use reqwest::Method;
use serde_json::json;

use crate::cobranca::{ConsultarWebhookCallbacksRequest, Service, Webhook, WebhookCallbacksResponse};
use crate::errors::Result;

impl Service {
    pub async fn criar_webhook(&self, webhook_url: &str) -> Result<()> {
        let request = self
            .backend
            .request(Method::PUT, &self.path(&["webhook"]))
            .await?
            .json(&json!({ "webhookUrl": webhook_url }));
        self.backend.execute_empty(request).await
    }

    pub async fn consultar_webhook(&self) -> Result<Webhook> {
        let request = self.backend.request(Method::GET, &self.path(&["webhook"])).await?;
        self.backend.execute(request).await
    }

    pub async fn deletar_webhook(&self) -> Result<()> {
        let request = self.backend.request(Method::DELETE, &self.path(&["webhook"])).await?;
        self.backend.execute_empty(request).await
    }

    pub async fn consultar_webhook_callbacks(
        &self,
        filtro: Option<&ConsultarWebhookCallbacksRequest>,
    ) -> Result<WebhookCallbacksResponse> {
        let mut request = self.backend.request(Method::GET, &self.path(&["webhook", "callbacks"])).await?;
        if let Some(filtro) = filtro {
            request = request.query(filtro);
        }
        self.backend.execute(request).await
    }
}
