//! Document Chat UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: `POST /ask` call and response classification
//! - view_model.rs: DocChatVm wrapping the chat session signal
//! - view.rs: Main component DocChat
//! - drop_zone.rs, transcript.rs, ask_form.rs: parts of the page

mod ask_form;
mod drop_zone;
mod model;
mod transcript;
mod view;
mod view_model;

pub use model::{ask, interpret_response};
pub use view::DocChat;
pub use view_model::DocChatVm;
