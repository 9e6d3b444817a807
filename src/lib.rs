//! SNS to Slack forwarder - posts CloudWatch alarm notifications to a Slack workflow webhook.
//!
//! The Lambda is subscribed to the alarm SNS topics. For every invocation it takes the
//! message of the first SNS record, wraps it in the workflow's JSON payload and POSTs it
//! to the webhook once. The webhook's status code and body are logged, never acted upon.
//!
//! # Example
//!
//! ```no_run
//! use sns_slack_forwarder::core::config::ForwarderConfig;
//! use sns_slack_forwarder::forwarder::forward_notification;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     sns_slack_forwarder::setup_logging();
//!
//!     let http_client = reqwest::Client::new();
//!     let event = serde_json::json!({ "Records": [{ "Sns": { "Message": "hello" } }] });
//!
//!     let report = forward_notification(&http_client, &ForwarderConfig::default(), &event).await?;
//!     println!("Webhook answered {}", report.status_code);
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod core;
pub mod errors;
pub mod forwarder;
pub mod slack;

/// Install the JSON `tracing` subscriber used by the `bootstrap` binary.
///
/// Each delivery is written as one JSON line on stdout, which Lambda ships to
/// `CloudWatch` Logs. The forwarded message, status code and response body
/// appear under `fields`. Call it once per process; a second call panics.
///
/// ```
/// sns_slack_forwarder::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
