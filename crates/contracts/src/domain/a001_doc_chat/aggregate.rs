use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

/// Kind of a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Question,
    Answer,
    Error,
}

/// Transcript entry. Never changed after it is appended.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub kind: MessageKind,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(kind: MessageKind, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            content,
            created_at: Utc::now(),
        }
    }

    /// Question typed by the user
    pub fn question(content: impl Into<String>) -> Self {
        Self::new(MessageKind::Question, content.into())
    }

    /// Answer returned by the service
    pub fn answer(content: impl Into<String>) -> Self {
        Self::new(MessageKind::Answer, content.into())
    }

    /// Failed request
    pub fn error(content: impl Into<String>) -> Self {
        Self::new(MessageKind::Error, content.into())
    }
}

/// Successful body of `POST /ask`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AskResponse {
    pub answer: String,
}

impl AskResponse {
    /// Accepts only a JSON object; a bare `["..."]` array is not an answer.
    pub fn parse(body: &str) -> Result<Self, String> {
        let value: serde_json::Value = serde_json::from_str(body).map_err(|e| format!("{e}"))?;
        if !value.is_object() {
            return Err(format!("expected a JSON object, got {}", value));
        }
        serde_json::from_value::<AskResponse>(value).map_err(|e| format!("{e}"))
    }
}

/// Extracts a displayable error string from a raw `POST /ask` error body.
///
/// Only a JSON object with a non-empty string `error` field counts;
/// every other shape yields `None`.
pub fn error_message_from(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .as_object()?
        .get("error")
        .and_then(serde_json::Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
