//! Payload construction for the Slack workflow webhook.

use crate::core::config::ForwarderConfig;
use crate::core::models::WebhookPayload;

/// Create the webhook payload for a forwarded notification
///
/// The message is copied verbatim into the `Content` field; channel, username
/// and icon come from the config.
///
/// # Examples
///
/// ```
/// use sns_slack_forwarder::core::config::ForwarderConfig;
/// use sns_slack_forwarder::slack::payload::create_webhook_payload;
///
/// let payload = create_webhook_payload(&ForwarderConfig::default(), "hello");
/// assert_eq!(payload.content, "hello");
/// ```
#[must_use]
pub fn create_webhook_payload(config: &ForwarderConfig, message: &str) -> WebhookPayload {
    WebhookPayload {
        channel: config.channel.clone(),
        username: config.username.clone(),
        content: message.to_string(),
        icon_emoji: config.icon_emoji.clone(),
    }
}
