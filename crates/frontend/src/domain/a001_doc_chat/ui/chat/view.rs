//! Document Chat - View Component

use super::ask_form::AskForm;
use super::drop_zone::DropZone;
use super::transcript::Transcript;
use super::view_model::DocChatVm;
use crate::shared::config::ChatConfig;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn DocChat() -> impl IntoView {
    let config = use_context::<ChatConfig>().unwrap_or_default();
    let vm = DocChatVm::new();

    view! {
        <div class="doc-chat">
            <div class="doc-chat__header">
                {icon("chat")}
                <h2 class="doc-chat__title">"Document Chat"</h2>
                <span class="text-muted">
                    {move || format!("Messages: {}", vm.transcript_len.get())}
                </span>
            </div>

            <DropZone vm=vm />
            <Transcript vm=vm />
            <AskForm vm=vm ask_url=config.ask_url />
        </div>
    }
}
