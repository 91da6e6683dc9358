use thiserror::Error;

/// Text shown in the transcript when the service gave no usable message.
pub const FALLBACK_ERROR_MESSAGE: &str = "Error getting response";

/// Failure of a single `POST /ask` exchange.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AskError {
    /// The service answered with an `error` string.
    #[error("{0}")]
    Service(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl AskError {
    /// Content of the error entry appended to the transcript.
    pub fn display_message(&self) -> String {
        match self {
            AskError::Service(message) => message.clone(),
            _ => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}
