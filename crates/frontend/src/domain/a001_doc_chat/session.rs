//! Chat session state: selected file, question, transcript and flags.
//!
//! Framework-free so the submit rules can be exercised without a browser.
//! The view model keeps one `ChatSession` in a local signal and drives it
//! from DOM events.

use super::error::AskError;
use contracts::domain::a001_doc_chat::aggregate::ChatMessage;
use contracts::shared::file_types::{extension_of, is_advertised};

/// Handle to a user-chosen file.
pub trait FileHandle: Clone {
    fn name(&self) -> String;
    fn size(&self) -> f64;
}

impl FileHandle for web_sys::File {
    fn name(&self) -> String {
        web_sys::File::name(self)
    }

    fn size(&self) -> f64 {
        web_sys::Blob::size(self)
    }
}

/// What the form hands to the network layer once a submit is accepted.
#[derive(Debug, Clone)]
pub struct PendingAsk<F> {
    pub file: F,
    pub question: String,
}

#[derive(Debug, Clone)]
pub struct ChatSession<F> {
    file: Option<F>,
    question: String,
    messages: Vec<ChatMessage>,
    loading: bool,
    drag_hover: bool,
}

impl<F> Default for ChatSession<F> {
    fn default() -> Self {
        Self {
            file: None,
            question: String::new(),
            messages: Vec::new(),
            loading: false,
            drag_hover: false,
        }
    }
}

impl<F: FileHandle> ChatSession<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_drag_hover(&self) -> bool {
        self.drag_hover
    }

    /// Replaces the selected file. A drop also ends the drag gesture.
    pub fn select_file(&mut self, file: F) {
        self.file = Some(file);
        self.drag_hover = false;
    }

    pub fn clear_file(&mut self) {
        self.file = None;
    }

    pub fn set_question(&mut self, question: impl Into<String>) {
        self.question = question.into();
    }

    pub fn drag_enter(&mut self) {
        self.drag_hover = true;
    }

    pub fn drag_leave(&mut self) {
        self.drag_hover = false;
    }

    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.question.trim().is_empty() && !self.loading
    }

    /// Starts a submission if the form is complete and idle.
    ///
    /// Returns `None` without touching state otherwise.
    pub fn begin_submit(&mut self) -> Option<PendingAsk<F>> {
        if !self.can_submit() {
            return None;
        }
        let file = self.file.clone()?;
        self.loading = true;
        Some(PendingAsk {
            file,
            question: self.question.clone(),
        })
    }

    /// Records the outcome of the request started by `begin_submit`.
    pub fn finish_submit(&mut self, question: String, outcome: Result<String, AskError>) {
        match outcome {
            Ok(answer) => {
                self.messages.push(ChatMessage::question(question));
                self.messages.push(ChatMessage::answer(answer));
                self.question.clear();
            }
            Err(e) => {
                self.messages.push(ChatMessage::error(e.display_message()));
            }
        }
        self.loading = false;
    }

    /// Hint for files outside the advertised list. Never blocks a submit.
    pub fn file_warning(&self) -> Option<String> {
        let name = self.file.as_ref()?.name();
        if is_advertised(&name) {
            return None;
        }
        Some(match extension_of(&name) {
            Some(ext) => format!("The service may not be able to read .{} files", ext),
            None => "The file has no extension; the service may not read it".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_doc_chat::error::FALLBACK_ERROR_MESSAGE;
    use crate::domain::a001_doc_chat::ui::chat::interpret_response;
    use contracts::domain::a001_doc_chat::aggregate::MessageKind;

    #[derive(Debug, Clone, PartialEq)]
    struct StubFile {
        name: &'static str,
        size: f64,
    }

    impl FileHandle for StubFile {
        fn name(&self) -> String {
            self.name.to_string()
        }

        fn size(&self) -> f64 {
            self.size
        }
    }

    fn report() -> StubFile {
        StubFile {
            name: "report.pdf",
            size: 12_345.0,
        }
    }

    fn kinds(session: &ChatSession<StubFile>) -> Vec<MessageKind> {
        session.messages().iter().map(|m| m.kind).collect()
    }

    #[test]
    fn test_submit_without_file_is_noop() {
        let mut session = ChatSession::<StubFile>::new();
        session.set_question("What is the total?");

        assert!(session.begin_submit().is_none());
        assert!(!session.is_loading());
        assert!(session.messages().is_empty());
        assert_eq!(session.question(), "What is the total?");
    }

    #[test]
    fn test_submit_with_blank_question_is_noop() {
        let mut session = ChatSession::new();
        session.select_file(report());

        assert!(session.begin_submit().is_none());
        session.set_question("   \t\n");
        assert!(session.begin_submit().is_none());
        assert!(!session.is_loading());
        assert!(session.messages().is_empty());
    }

    #[test]
    fn test_successful_exchange() {
        let mut session = ChatSession::new();
        session.select_file(report());
        session.set_question("What is the total?");

        let pending = session.begin_submit().unwrap();
        assert_eq!(pending.file, report());
        assert_eq!(pending.question, "What is the total?");
        assert!(session.is_loading());

        let outcome = interpret_response(200, r#"{"answer": "42"}"#);
        session.finish_submit(pending.question, outcome);

        assert_eq!(kinds(&session), vec![MessageKind::Question, MessageKind::Answer]);
        assert_eq!(session.messages()[0].content, "What is the total?");
        assert_eq!(session.messages()[1].content, "42");
        assert_eq!(session.question(), "");
        assert!(!session.is_loading());
        // the file stays selected for follow-up questions
        assert!(session.file().is_some());
    }

    #[test]
    fn test_service_error_is_shown() {
        let mut session = ChatSession::new();
        session.select_file(report());
        session.set_question("What is the total?");

        let pending = session.begin_submit().unwrap();
        let outcome = interpret_response(400, r#"{"error": "bad file"}"#);
        session.finish_submit(pending.question, outcome);

        assert_eq!(kinds(&session), vec![MessageKind::Error]);
        assert_eq!(session.messages()[0].content, "bad file");
        assert_eq!(session.question(), "What is the total?");
        assert!(!session.is_loading());
    }

    #[test]
    fn test_unusable_error_body_falls_back() {
        let mut session = ChatSession::new();
        session.select_file(report());
        session.set_question("What is the total?");

        let pending = session.begin_submit().unwrap();
        let outcome = interpret_response(502, "<html>Bad Gateway</html>");
        session.finish_submit(pending.question, outcome);

        assert_eq!(kinds(&session), vec![MessageKind::Error]);
        assert_eq!(session.messages()[0].content, FALLBACK_ERROR_MESSAGE);

        let pending = session.begin_submit().unwrap();
        session.finish_submit(
            pending.question,
            Err(AskError::Transport("Failed to fetch".into())),
        );
        assert_eq!(kinds(&session), vec![MessageKind::Error, MessageKind::Error]);
        assert_eq!(session.messages()[1].content, FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn test_resubmit_while_loading_is_noop() {
        let mut session = ChatSession::new();
        session.select_file(report());
        session.set_question("What is the total?");

        let pending = session.begin_submit().unwrap();
        assert!(!session.can_submit());
        assert!(session.begin_submit().is_none());
        assert!(session.messages().is_empty());

        session.finish_submit(pending.question, Err(AskError::Status(500)));
        assert!(!session.is_loading());
        assert!(session.can_submit());
    }

    #[test]
    fn test_transcript_only_grows() {
        let mut session = ChatSession::new();
        session.select_file(report());

        for (i, body) in [r#"{"answer": "a"}"#, r#"{"error": "e"}"#, r#"{"answer": "b"}"#]
            .iter()
            .enumerate()
        {
            session.set_question(format!("q{}", i));
            let pending = session.begin_submit().unwrap();
            let status = if body.contains("error") { 500 } else { 200 };
            session.finish_submit(pending.question, interpret_response(status, body));
        }

        let contents: Vec<&str> = session
            .messages()
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec!["q0", "a", "e", "q2", "b"]);
    }

    #[test]
    fn test_select_file_replaces_and_clear_empties() {
        let mut session = ChatSession::new();
        session.select_file(report());
        let notes = StubFile {
            name: "notes.txt",
            size: 10.0,
        };
        session.select_file(notes.clone());
        assert_eq!(session.file(), Some(&notes));

        session.clear_file();
        assert!(session.file().is_none());
    }

    #[test]
    fn test_drag_hover_flag() {
        let mut session = ChatSession::<StubFile>::new();
        assert!(!session.is_drag_hover());
        session.drag_enter();
        assert!(session.is_drag_hover());
        session.drag_leave();
        assert!(!session.is_drag_hover());

        session.drag_enter();
        session.select_file(report());
        assert!(!session.is_drag_hover());
    }

    #[test]
    fn test_file_warning_is_advisory() {
        let mut session = ChatSession::<StubFile>::new();
        assert_eq!(session.file_warning(), None);

        session.select_file(report());
        assert_eq!(session.file_warning(), None);

        session.select_file(StubFile {
            name: "notes.md",
            size: 1.0,
        });
        assert_eq!(
            session.file_warning().as_deref(),
            Some("The service may not be able to read .md files")
        );

        session.set_question("Summarize");
        assert!(session.begin_submit().is_some());
    }
}
