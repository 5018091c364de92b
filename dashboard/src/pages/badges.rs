//! Badges page: decorations members can earn.

use dioxus::prelude::*;
use settings_types::{Badge, BadgesSettings, PageKey};

use super::use_settings_page;

#[component]
pub fn BadgesPage(server_id: String) -> Element {
    let mut page = use_settings_page::<BadgesSettings>(server_id, PageKey::Badges);

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
                for (idx , badge) in settings.badges.iter().enumerate() {
                    div { class: "list-row", key: "{badge.id}",
                        input {
                            class: "field-input",
                            placeholder: "Label",
                            value: "{badge.label}",
                            oninput: move |e| {
                                page.edit(move |s| {
                                    if let Some(b) = s.badges.get_mut(idx) {
                                        b.label = e.value();
                                    }
                                });
                            },
                        }
                        input {
                            class: "field-input field-emoji",
                            placeholder: "\u{2b50}",
                            value: "{badge.emoji}",
                            oninput: move |e| {
                                page.edit(move |s| {
                                    if let Some(b) = s.badges.get_mut(idx) {
                                        b.emoji = e.value();
                                    }
                                });
                            },
                        }
                        input {
                            r#type: "color",
                            value: "{badge.color}",
                            oninput: move |e| {
                                page.edit(move |s| {
                                    if let Some(b) = s.badges.get_mut(idx) {
                                        b.color = e.value();
                                    }
                                });
                            },
                        }
                        button {
                            class: "btn btn-remove",
                            onclick: move |_| {
                                page.edit(move |s| {
                                    if idx < s.badges.len() {
                                        s.badges.remove(idx);
                                    }
                                });
                            },
                            "Remove"
                        }
                    }
                }
                if settings.badges.is_empty() {
                    p { class: "section-hint", "No badges yet." }
                }
                button {
                    class: "btn",
                    onclick: move |_| {
                        page.edit(|s| {
                            s.badges.push(Badge {
                                id: uuid::Uuid::new_v4().to_string(),
                                label: String::new(),
                                emoji: String::new(),
                                color: "#f1c40f".to_string(),
                            });
                        });
                    },
                    "Add badge"
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
                h2 { "Badges" }
                p { class: "page-hint", "Profile decorations the bot can award to members." }
            }
            {body}
        }
    }
}
