use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForwarderError {
    #[error("Event has no notification records")]
    MissingRecord,

    #[error("Notification record has no Sns.Message string")]
    MissingMessage,

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),
}

impl From<reqwest::Error> for ForwarderError {
    fn from(error: reqwest::Error) -> Self {
        ForwarderError::HttpError(error.to_string())
    }
}
