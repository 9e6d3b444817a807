pub const SLACK_WEBHOOK_URL: &str =
    "https://hooks.slack.com/workflows/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";
pub const SLACK_CHANNEL: &str = "#testting-74";
pub const SLACK_USERNAME: &str = "WEBHOOK_USERNAME";
pub const SLACK_ICON_EMOJI: &str = "";

/// Destination of forwarded notifications.
///
/// The values are fixed at compile time; `Default` is the only constructor
/// the Lambda uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwarderConfig {
    pub webhook_url: String,
    pub channel: String,
    pub username: String,
    pub icon_emoji: String,
}

impl Default for ForwarderConfig {
    fn default() -> Self {
        Self {
            webhook_url: SLACK_WEBHOOK_URL.to_string(),
            channel: SLACK_CHANNEL.to_string(),
            username: SLACK_USERNAME.to_string(),
            icon_emoji: SLACK_ICON_EMOJI.to_string(),
        }
    }
}
