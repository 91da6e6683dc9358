//! API utilities for talking to the answering service
//!
//! The service runs on a fixed local origin; there is no discovery.

/// Origin of the answering service.
pub const ANSWER_SERVICE_ORIGIN: &str = "http://localhost:5000";

/// Get the base URL for API requests
///
/// # Returns
/// - `"http://localhost:5000"`
pub fn api_base() -> String {
    ANSWER_SERVICE_ORIGIN.to_string()
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/")
///
/// # Example
/// ```rust
/// # use frontend::shared::api_utils::api_url;
/// let url = api_url("/ask");
/// assert_eq!(url, "http://localhost:5000/ask");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
