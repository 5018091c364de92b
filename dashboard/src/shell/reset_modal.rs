use dioxus::prelude::*;

/// Confirmation dialog for the destructive reset-to-defaults call.
#[component]
pub fn ResetModal(page_label: String, on_confirm: Callback<()>, on_cancel: Callback<()>) -> Element {
    rsx! {
        div { class: "modal-backdrop", onclick: move |_| on_cancel.call(()),
            div { class: "modal", onclick: move |e| e.stop_propagation(),
                h3 { "Reset {page_label}?" }
                p {
                    "This deletes the saved configuration for this page and restores the bot defaults. It cannot be undone."
                }
                div { class: "modal-buttons",
                    button { class: "btn btn-ghost", onclick: move |_| on_cancel.call(()), "Cancel" }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_confirm.call(()),
                        "Reset to defaults"
                    }
                }
            }
        }
    }
}
