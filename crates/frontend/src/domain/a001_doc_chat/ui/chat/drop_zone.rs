//! Drop zone with hidden file picker and the selected-file chip

use super::view_model::DocChatVm;
use crate::shared::icons::icon;
use crate::shared::number_format::format_file_size;
use contracts::shared::file_types::{accept_attribute, supported_formats_hint};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;
use web_sys::DragEvent;

#[component]
#[allow(non_snake_case)]
pub fn DropZone(vm: DocChatVm) -> impl IntoView {
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let on_dragenter = move |ev: DragEvent| {
        ev.prevent_default();
        vm.drag_enter();
    };

    // dragover must be cancelled for the zone to accept a drop
    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !vm.session.with_untracked(|s| s.is_drag_hover()) {
            vm.drag_enter();
        }
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        vm.drag_leave();
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        match file {
            Some(file) => vm.select_file(file),
            None => vm.drag_leave(),
        }
    };

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        if let Some(input) = input {
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                vm.select_file(file);
            }
            // allow picking the same file again after removal
            input.set_value("");
        }
    };

    let open_picker = move |_| {
        if let Some(input) = file_input_ref.get() {
            input.click();
        }
    };

    view! {
        <div class="doc-chat__upload">
            <input
                node_ref=file_input_ref
                type="file"
                accept=accept_attribute()
                class="hidden"
                on:change=handle_file_select
            />
            <div
                class=move || {
                    if vm.is_drag_hover() {
                        "doc-chat__dropzone doc-chat__dropzone--hover"
                    } else {
                        "doc-chat__dropzone"
                    }
                }
                on:dragenter=on_dragenter
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
                on:click=open_picker
            >
                {icon("upload")}
                <p>
                    {move || if vm.is_drag_hover() {
                        "Drop the file here"
                    } else {
                        "Drag & drop a document here, or click to browse"
                    }}
                </p>
                <p class="text-muted">{supported_formats_hint()}</p>
            </div>

            {move || {
                vm.file_info()
                    .map(|(name, size)| {
                        view! {
                            <div class="doc-chat__file">
                                {icon("document")}
                                <span class="doc-chat__file-name">{name}</span>
                                <span class="text-muted">{format!("({})", format_file_size(size))}</span>
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| vm.clear_file()
                                >
                                    {icon("close")}
                                </Button>
                            </div>
                        }
                    })
            }}

            {move || {
                vm.file_warning()
                    .map(|warning| {
                        view! {
                            <div class="doc-chat__warning">
                                {icon("alert")}
                                " "
                                {warning}
                            </div>
                        }
                    })
            }}
        </div>
    }
}
