use reqwest::Method;
use serde_json::json;

use crate::banking::{Service, TipoWebhook, WebhookCallbacksRequest, WebhookCallbacksResponse, WebhookResponse};
use crate::errors::Result;

impl Service {
    /// Register the URL that receives payment notifications of the given type.
    pub async fn criar_webhook(&self, tipo: TipoWebhook, webhook_url: &str) -> Result<()> {
        let request = self
            .backend
            .request(Method::PUT, &self.path(&["webhooks", tipo.as_str()]))
            .await?
            .json(&json!({ "webhookUrl": webhook_url }));
        self.backend.execute_empty(request).await
    }

    pub async fn consultar_webhook(&self, tipo: TipoWebhook) -> Result<WebhookResponse> {
        let request = self.backend.request(Method::GET, &self.path(&["webhooks", tipo.as_str()])).await?;
        self.backend.execute(request).await
    }

    pub async fn deletar_webhook(&self, tipo: TipoWebhook) -> Result<()> {
        let request = self.backend.request(Method::DELETE, &self.path(&["webhooks", tipo.as_str()])).await?;
        self.backend.execute_empty(request).await
    }

    /// Delivery attempts of the webhook, optionally filtered.
    pub async fn consultar_webhook_callbacks(
        &self,
        tipo: TipoWebhook,
        filtro: Option<&WebhookCallbacksRequest>,
    ) -> Result<WebhookCallbacksResponse> {
        let mut request =
            self.backend.request(Method::GET, &self.path(&["webhooks", tipo.as_str(), "callbacks"])).await?;
        if let Some(filtro) = filtro {
            request = request.query(filtro);
        }
        self.backend.execute(request).await
    }
}
