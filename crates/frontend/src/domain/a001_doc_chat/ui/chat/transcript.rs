//! Scrolling transcript of questions, answers and errors

use super::view_model::DocChatVm;
use crate::shared::date_utils::format_local_time;
use contracts::domain::a001_doc_chat::aggregate::MessageKind;
use leptos::prelude::*;

fn bubble_class(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Question => "doc-chat__bubble doc-chat__bubble--question",
        MessageKind::Answer => "doc-chat__bubble doc-chat__bubble--answer",
        MessageKind::Error => "doc-chat__bubble doc-chat__bubble--error",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn Transcript(vm: DocChatVm) -> impl IntoView {
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    // Scroll to the newest entry when an entry is added or the indicator toggles
    Effect::new(move |_| {
        vm.transcript_len.track();
        vm.loading.track();
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    view! {
        <div node_ref=messages_container_ref class="doc-chat__transcript">
            <Show when=move || vm.transcript_len.get() == 0 && !vm.loading.get()>
                <div class="doc-chat__empty text-muted">
                    "Upload a document and ask a question about it."
                </div>
            </Show>

            <For
                each=move || vm.messages.get()
                key=|msg| msg.id
                let:msg
            >
                <div
                    class=if msg.kind == MessageKind::Question {
                        "doc-chat__row doc-chat__row--right"
                    } else {
                        "doc-chat__row"
                    }
                >
                    <div class=bubble_class(msg.kind)>
                        <div style="white-space: pre-wrap;">{msg.content.clone()}</div>
                        <div class="doc-chat__time">{format_local_time(&msg.created_at)}</div>
                    </div>
                </div>
            </For>

            <Show when=move || vm.is_loading()>
                <div class="doc-chat__processing text-muted">"Processing..."</div>
            </Show>
        </div>
    }
}
