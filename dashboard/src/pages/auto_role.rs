//! Auto-role page: roles granted automatically on join.

use dioxus::prelude::*;
use settings_types::{AutoRoleSettings, PageKey};

use super::use_settings_page;

#[component]
pub fn AutoRolePage(server_id: String) -> Element {
    let mut page = use_settings_page::<AutoRoleSettings>(server_id, PageKey::AutoRole);
    let mut new_member_role = use_signal(String::new);
    let mut new_bot_role = use_signal(String::new);

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
                h3 { "Member roles" }
                p { class: "section-hint", "Granted to every human member on join." }
                div { class: "chip-list",
                    for (idx , role) in settings.user_roles.iter().enumerate() {
                        span { class: "role-chip", key: "{role}",
                            "{role}"
                            button {
                                class: "chip-remove",
                                onclick: move |_| {
                                    page.edit(move |s| {
                                        if idx < s.user_roles.len() {
                                            s.user_roles.remove(idx);
                                        }
                                    });
                                },
                                "\u{00d7}"
                            }
                        }
                    }
                    if settings.user_roles.is_empty() {
                        span { class: "chip-list-empty", "No roles configured" }
                    }
                }
                div { class: "add-row",
                    input {
                        class: "field-input",
                        placeholder: "Role id",
                        value: new_member_role,
                        oninput: move |e| new_member_role.set(e.value()),
                    }
                    button {
                        class: "btn",
                        onclick: move |_| {
                            let role = new_member_role().trim().to_string();
                            if role.is_empty() {
                                return;
                            }
                            page.edit(|s| {
                                if !s.user_roles.contains(&role) {
                                    s.user_roles.push(role.clone());
                                }
                            });
                            new_member_role.set(String::new());
                        },
                        "Add"
                    }
                }
            }

            section { class: "settings-section",
                h3 { "Bot roles" }
                p { class: "section-hint", "Granted to bot accounts instead." }
                div { class: "chip-list",
                    for (idx , role) in settings.bot_roles.iter().enumerate() {
                        span { class: "role-chip", key: "{role}",
                            "{role}"
                            button {
                                class: "chip-remove",
                                onclick: move |_| {
                                    page.edit(move |s| {
                                        if idx < s.bot_roles.len() {
                                            s.bot_roles.remove(idx);
                                        }
                                    });
                                },
                                "\u{00d7}"
                            }
                        }
                    }
                    if settings.bot_roles.is_empty() {
                        span { class: "chip-list-empty", "No roles configured" }
                    }
                }
                div { class: "add-row",
                    input {
                        class: "field-input",
                        placeholder: "Role id",
                        value: new_bot_role,
                        oninput: move |e| new_bot_role.set(e.value()),
                    }
                    button {
                        class: "btn",
                        onclick: move |_| {
                            let role = new_bot_role().trim().to_string();
                            if role.is_empty() {
                                return;
                            }
                            page.edit(|s| {
                                if !s.bot_roles.contains(&role) {
                                    s.bot_roles.push(role.clone());
                                }
                            });
                            new_bot_role.set(String::new());
                        },
                        "Add"
                    }
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
                h2 { "Auto Role" }
                p { class: "page-hint", "Roles handed out automatically when someone joins the server." }
            }
            {body}
        }
    }
}
