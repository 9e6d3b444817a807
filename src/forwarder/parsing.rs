use serde_json::Value;

use crate::errors::ForwarderError;

/// Extract `Records[0].Sns.Message` from an SNS event.
///
/// Records after the first are ignored.
pub fn extract_message(event: &Value) -> Result<&str, ForwarderError> {
    let record = event
        .get("Records")
        .and_then(|records| records.as_array())
        .and_then(|records| records.first())
        .ok_or(ForwarderError::MissingRecord)?;

    record
        .get("Sns")
        .and_then(|sns| sns.get("Message"))
        .and_then(|message| message.as_str())
        .ok_or(ForwarderError::MissingMessage)
}
