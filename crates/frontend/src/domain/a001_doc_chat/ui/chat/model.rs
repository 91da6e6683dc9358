//! Document Chat - Model (API functions)

use crate::domain::a001_doc_chat::error::AskError;
use contracts::domain::a001_doc_chat::aggregate::{error_message_from, AskResponse};
use gloo_net::http::Request;
use web_sys::FormData;

/// Sends the file and the question to the answering service.
pub async fn ask(url: &str, file: &web_sys::File, question: &str) -> Result<String, AskError> {
    let form_data = FormData::new().map_err(|e| AskError::Transport(format!("{e:?}")))?;
    form_data
        .append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| AskError::Transport(format!("{e:?}")))?;
    form_data
        .append_with_str("question", question)
        .map_err(|e| AskError::Transport(format!("{e:?}")))?;

    // Content-Type with the multipart boundary is set by the browser.
    let response = Request::post(url)
        .body(form_data)
        .map_err(|e| AskError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| AskError::Transport(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| AskError::Transport(format!("Failed to read response: {}", e)))?;

    interpret_response(status, &text)
}

/// Turns a raw `/ask` response into the answer text or an error.
///
/// A usable `error` string wins over the status code; a 2xx body without a
/// string `answer` is a decode failure.
pub fn interpret_response(status: u16, body: &str) -> Result<String, AskError> {
    let success = (200..300).contains(&status);
    if success {
        if let Ok(resp) = AskResponse::parse(body) {
            return Ok(resp.answer);
        }
    }

    if let Some(message) = error_message_from(body) {
        return Err(AskError::Service(message));
    }

    if success {
        Err(AskError::Decode(format!("no answer in response: {}", body)))
    } else {
        Err(AskError::Status(status))
    }
}
