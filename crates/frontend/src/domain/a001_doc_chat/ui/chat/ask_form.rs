//! Question input and submit button

use super::view_model::DocChatVm;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn AskForm(vm: DocChatVm, ask_url: String) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit(ask_url.clone());
    };

    view! {
        <form class="doc-chat__form" on:submit=on_submit>
            <input
                type="text"
                class="form__input doc-chat__question"
                placeholder="Ask a question about the document..."
                prop:value=move || vm.question()
                on:input=move |ev| vm.set_question(event_target_value(&ev))
            />
            <button
                type="submit"
                class="button button--primary"
                disabled=move || !vm.can_submit()
            >
                {icon("send")}
                {move || if vm.is_loading() { " Processing..." } else { " Ask" }}
            </button>
        </form>
    }
}
