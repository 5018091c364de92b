//! Custom roles page: vanity roles the bot manages for members.

use dioxus::prelude::*;
use settings_types::{CustomRole, CustomRolesSettings, PageKey};

use super::use_settings_page;

#[component]
pub fn CustomRolesPage(server_id: String) -> Element {
    let mut page = use_settings_page::<CustomRolesSettings>(server_id, PageKey::CustomRoles);

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
                for (idx , role) in settings.roles.iter().enumerate() {
                    div { class: "list-row", key: "{idx}",
                        input {
                            class: "field-input",
                            placeholder: "Role name",
                            value: "{role.name}",
                            oninput: move |e| {
                                page.edit(move |s| {
                                    if let Some(role) = s.roles.get_mut(idx) {
                                        role.name = e.value();
                                    }
                                });
                            },
                        }
                        input {
                            r#type: "color",
                            value: "{role.color}",
                            oninput: move |e| {
                                page.edit(move |s| {
                                    if let Some(role) = s.roles.get_mut(idx) {
                                        role.color = e.value();
                                    }
                                });
                            },
                        }
                        label { class: "inline-check",
                            input {
                                r#type: "checkbox",
                                checked: role.hoist,
                                onchange: move |e: Event<FormData>| {
                                    page.edit(move |s| {
                                        if let Some(role) = s.roles.get_mut(idx) {
                                            role.hoist = e.checked();
                                        }
                                    });
                                },
                            }
                            "Hoist"
                        }
                        label { class: "inline-check",
                            input {
                                r#type: "checkbox",
                                checked: role.mentionable,
                                onchange: move |e: Event<FormData>| {
                                    page.edit(move |s| {
                                        if let Some(role) = s.roles.get_mut(idx) {
                                            role.mentionable = e.checked();
                                        }
                                    });
                                },
                            }
                            "Mentionable"
                        }
                        button {
                            class: "btn btn-remove",
                            onclick: move |_| {
                                page.edit(move |s| {
                                    if idx < s.roles.len() {
                                        s.roles.remove(idx);
                                    }
                                });
                            },
                            "Remove"
                        }
                    }
                }
                if settings.roles.is_empty() {
                    p { class: "section-hint", "No custom roles yet." }
                }
                button {
                    class: "btn",
                    onclick: move |_| {
                        page.edit(|s| {
                            s.roles.push(CustomRole {
                                name: String::new(),
                                color: "#99aab5".to_string(),
                                hoist: false,
                                mentionable: false,
                            });
                        });
                    },
                    "Add role"
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
                h2 { "Custom Roles" }
                p { class: "page-hint", "Roles the bot creates and keeps in sync on the server." }
            }
            {body}
        }
    }
}
