//! All Slack-specific functionality

pub mod payload;

pub use payload::create_webhook_payload;
