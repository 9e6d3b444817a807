#![allow(clippy::missing_errors_doc)]
use lambda_runtime::{Error, LambdaEvent};
use reqwest::Client as HttpClient;
use serde_json::Value;
use tracing::{error, info};

use super::deliver::post_to_webhook;
use super::parsing::extract_message;
use crate::core::config::ForwarderConfig;
use crate::core::models::DeliveryReport;
use crate::errors::ForwarderError;
use crate::slack::create_webhook_payload;

/// Forward `Records[0].Sns.Message` to the webhook and log the outcome.
///
/// Nothing is sent when the event does not carry a message.
pub async fn forward_notification(
    http_client: &HttpClient,
    config: &ForwarderConfig,
    event: &Value,
) -> Result<DeliveryReport, ForwarderError> {
    let message = extract_message(event)?;
    let payload = create_webhook_payload(config, message);

    let response = post_to_webhook(http_client, &config.webhook_url, &payload).await?;

    let report = DeliveryReport {
        message: message.to_string(),
        status_code: response.status_code,
        response: response.body,
    };
    info!(
        message = %report.message,
        status_code = report.status_code,
        response = %report.response
    );

    Ok(report)
}

/// Lambda handler for SNS notifications.
pub async fn function_handler(
    http_client: &HttpClient,
    config: &ForwarderConfig,
    event: LambdaEvent<Value>,
) -> Result<(), Error> {
    info!(
        request_id = %event.context.request_id,
        "Forwarder received SNS event payload: {:?}",
        event.payload
    );

    forward_notification(http_client, config, &event.payload)
        .await
        .map_err(|e| {
            error!("Failed to forward notification: {}", e);
            Error::from(e)
        })?;

    Ok(())
}

pub use self::function_handler as handler;
