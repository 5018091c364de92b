//! Reaction roles page: emoji reactions that grant roles.

use dioxus::prelude::*;
use settings_types::{PageKey, ReactionRoleBinding, ReactionRolesSettings};

use super::use_settings_page;

#[component]
pub fn ReactionRolesPage(server_id: String) -> Element {
    let mut page = use_settings_page::<ReactionRolesSettings>(server_id, PageKey::ReactionRoles);

    let body = if page.loading() {
        rsx! {
            div { class: "page-status", "Loading settings\u{2026}" }
        }
    } else if let Some(error) = page.load_error() {
        rsx! {
            div { class: "page-status page-status-error",
                p { "Could not load these settings: {error}" }
                button { class: "btn", onclick: move |_| page.reload(), "Retry" }
            }
        }
    } else if let Some(settings) = page.current() {
        rsx! {
            section { class: "settings-section",
                p { class: "section-hint",
                    "Reacting with the emoji on the given message grants the role; removing the reaction removes it."
                }
                for (idx , binding) in settings.bindings.iter().enumerate() {
                    div { class: "list-row", key: "{idx}",
                        input {
                            class: "field-input",
                            placeholder: "Message id",
                            value: "{binding.message_id}",
                            oninput: move |e| {
                                page.edit(move |s| {
                                    if let Some(b) = s.bindings.get_mut(idx) {
                                        b.message_id = e.value();
                                    }
                                });
                            },
                        }
                        input {
                            class: "field-input field-emoji",
                            placeholder: "\u{1f389}",
                            value: "{binding.emoji}",
                            oninput: move |e| {
                                page.edit(move |s| {
                                    if let Some(b) = s.bindings.get_mut(idx) {
                                        b.emoji = e.value();
                                    }
                                });
                            },
                        }
                        input {
                            class: "field-input",
                            placeholder: "Role id",
                            value: "{binding.role_id}",
                            oninput: move |e| {
                                page.edit(move |s| {
                                    if let Some(b) = s.bindings.get_mut(idx) {
                                        b.role_id = e.value();
                                    }
                                });
                            },
                        }
                        button {
                            class: "btn btn-remove",
                            onclick: move |_| {
                                page.edit(move |s| {
                                    if idx < s.bindings.len() {
                                        s.bindings.remove(idx);
                                    }
                                });
                            },
                            "Remove"
                        }
                    }
                }
                if settings.bindings.is_empty() {
                    p { class: "section-hint", "No bindings yet." }
                }
                button {
                    class: "btn",
                    onclick: move |_| {
                        page.edit(|s| {
                            s.bindings.push(ReactionRoleBinding {
                                message_id: String::new(),
                                emoji: String::new(),
                                role_id: String::new(),
                            });
                        });
                    },
                    "Add binding"
                }
            }
        }
    } else {
        rsx! {
            div { class: "page-status", "No settings available." }
        }
    };

    rsx! {
        div { class: "settings-page",
            header { class: "page-header",
                h2 { "Reaction Roles" }
                p { class: "page-hint", "Self-assignable roles driven by message reactions." }
            }
            {body}
        }
    }
}
