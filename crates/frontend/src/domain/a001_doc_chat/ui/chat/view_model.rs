//! Document Chat - View Model

use super::model::ask;
use crate::domain::a001_doc_chat::error::AskError;
use crate::domain::a001_doc_chat::session::{ChatSession, FileHandle, PendingAsk};
use contracts::domain::a001_doc_chat::aggregate::ChatMessage;
use leptos::prelude::*;
use std::future::Future;
use web_sys::File;

/// `web_sys::File` is not `Send`, so the session lives in local storage.
///
/// The transcript memos only change when an entry is appended or the request
/// state flips, so typing a question does not re-render or scroll the
/// transcript.
#[derive(Clone, Copy)]
pub struct DocChatVm {
    pub session: RwSignal<ChatSession<File>, LocalStorage>,
    pub transcript_len: Memo<usize>,
    pub loading: Memo<bool>,
    pub messages: Memo<Vec<ChatMessage>>,
}

impl DocChatVm {
    pub fn new() -> Self {
        let session = RwSignal::new_local(ChatSession::new());
        let transcript_len = Memo::new(move |_| session.with(|s| s.messages().len()));
        let loading = Memo::new(move |_| session.with(|s| s.is_loading()));
        // append-only, so the length is enough to know the list changed
        let messages = Memo::new(move |_| {
            transcript_len.track();
            session.with_untracked(|s| s.messages().to_vec())
        });

        Self {
            session,
            transcript_len,
            loading,
            messages,
        }
    }

    pub fn question(&self) -> String {
        self.session.with(|s| s.question().to_string())
    }

    /// Name and size of the selected file, if any.
    pub fn file_info(&self) -> Option<(String, f64)> {
        self.session
            .with(|s| s.file().map(|f| (FileHandle::name(f), FileHandle::size(f))))
    }

    pub fn file_warning(&self) -> Option<String> {
        self.session.with(|s| s.file_warning())
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn is_drag_hover(&self) -> bool {
        self.session.with(|s| s.is_drag_hover())
    }

    pub fn can_submit(&self) -> bool {
        self.session.with(|s| s.can_submit())
    }

    pub fn select_file(&self, file: File) {
        log::debug!("file selected: {} ({} bytes)", file.name(), file.size());
        self.session.update(|s| s.select_file(file));
    }

    pub fn clear_file(&self) {
        log::debug!("file removed");
        self.session.update(|s| s.clear_file());
    }

    pub fn set_question(&self, question: String) {
        self.session.update(|s| s.set_question(question));
    }

    pub fn drag_enter(&self) {
        self.session.update(|s| s.drag_enter());
    }

    pub fn drag_leave(&self) {
        self.session.update(|s| s.drag_leave());
    }

    /// Sends the current file and question unless a request is already running
    /// or the form is incomplete.
    pub fn submit(&self, ask_url: String) {
        let task = start_submit(self.session, move |file: File, question: String| async move {
            ask(&ask_url, &file, &question).await
        });
        if let Some(task) = task {
            wasm_bindgen_futures::spawn_local(task);
        }
    }
}

/// Claims the session for one request and returns the future that performs it.
///
/// `None` when the session refuses the submit; `send` is not called then.
/// The future records the outcome and clears the loading flag when it settles.
pub fn start_submit<F, S, Fut>(
    session: RwSignal<ChatSession<F>, LocalStorage>,
    send: S,
) -> Option<impl Future<Output = ()> + 'static>
where
    F: FileHandle + 'static,
    S: FnOnce(F, String) -> Fut + 'static,
    Fut: Future<Output = Result<String, AskError>> + 'static,
{
    let PendingAsk { file, question } = session.try_update(|s| s.begin_submit()).flatten()?;

    log::info!(
        "asking about {} ({} chars)",
        FileHandle::name(&file),
        question.len()
    );

    Some(async move {
        let outcome = send(file, question.clone()).await;
        match &outcome {
            Ok(answer) => log::info!("answer received ({} chars)", answer.len()),
            Err(e) => log::error!("ask failed: {}", e),
        }
        session.update(|s| s.finish_submit(question, outcome));
    })
}
