use common::webhook::{WebhookError, WebhookSender};
use gloo_net::http::Request;

/// `fetch`-backed sender used by the contact form, the chatbot and the newsletter signup.
pub struct GlooWebhookSender;

impl WebhookSender for GlooWebhookSender {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<u16, WebhookError> {
        let request = Request::post(url)
            .json(body)
            .map_err(|e| WebhookError::Serialize(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| WebhookError::Network(e.to_string()))?;
        Ok(response.status())
    }
}
