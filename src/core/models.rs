use serde::{Deserialize, Serialize};

/// JSON body posted to the Slack workflow webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub channel: String,
    pub username: String,
    // The workflow trigger declares a capitalised variable name.
    #[serde(rename = "Content")]
    pub content: String,
    pub icon_emoji: String,
}

/// Outcome of one forwarded notification, as written to the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReport {
    pub message: String,
    pub status_code: u16,
    pub response: String,
}
