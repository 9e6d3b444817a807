#![allow(clippy::missing_errors_doc)]
use reqwest::Client as HttpClient;
use tracing::debug;

use crate::core::models::WebhookPayload;
use crate::errors::ForwarderError;

/// Status and raw body returned by the webhook.
#[derive(Debug)]
pub struct WebhookResponse {
    pub status_code: u16,
    pub body: String,
}

/// POST the payload once. Any HTTP status counts as delivered; only transport
/// failures are errors.
pub async fn post_to_webhook(
    http_client: &HttpClient,
    webhook_url: &str,
    payload: &WebhookPayload,
) -> Result<WebhookResponse, ForwarderError> {
    let resp = http_client.post(webhook_url).json(payload).send().await?;

    let status_code = resp.status().as_u16();
    let body = resp.text().await?;
    debug!(status_code, "Webhook responded");

    Ok(WebhookResponse { status_code, body })
}
