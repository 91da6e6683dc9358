use crate::domain::a001_doc_chat::ui::chat::DocChat;
use crate::shared::config::ChatConfig;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Provide the chat settings to the page via context.
    provide_context(ChatConfig::default());

    view! {
        <ConfigProvider>
            <main class="app">
                <DocChat />
            </main>
        </ConfigProvider>
    }
}
