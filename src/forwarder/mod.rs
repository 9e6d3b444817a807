//! SNS notification forwarding

pub mod deliver;
pub mod handler;
pub mod parsing;

// Re-export the main handler for convenience
pub use handler::{forward_notification, handler};
