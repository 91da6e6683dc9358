use super::api_utils::api_url;

/// Settings of the chat page, provided through context by `App`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatConfig {
    /// Endpoint receiving the multipart `file` + `question` form.
    pub ask_url: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            ask_url: api_url("/ask"),
        }
    }
}
