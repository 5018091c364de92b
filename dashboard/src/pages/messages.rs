//! Welcome and farewell announcement templates.

use dioxus::prelude::*;
use settings_types::{MessagesSettings, PageKey};

use super::use_settings_page;

#[component]
pub fn MessagesPage(server_id: String) -> Element {
    let mut page = use_settings_page::<MessagesSettings>(server_id, PageKey::Messages);

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
        let welcome_channel = settings.welcome_channel_id.clone().unwrap_or_default();
        let farewell_channel = settings.farewell_channel_id.clone().unwrap_or_default();
        rsx! {
            section { class: "settings-section",
                h3 { "Welcome" }
                div { class: "setting-row",
                    label { "Announce new members" }
                    input {
                        r#type: "checkbox",
                        checked: settings.welcome_enabled,
                        onchange: move |e: Event<FormData>| {
                            page.edit(|s| s.welcome_enabled = e.checked());
                        },
                    }
                }
                div { class: "setting-row",
                    label { "Channel" }
                    input {
                        class: "field-input",
                        placeholder: "Channel id",
                        value: "{welcome_channel}",
                        oninput: move |e| {
                            let value = e.value().trim().to_string();
                            page.edit(|s| {
                                s.welcome_channel_id = if value.is_empty() { None } else { Some(value.clone()) };
                            });
                        },
                    }
                }
                textarea {
                    class: "field-textarea",
                    rows: "3",
                    value: "{settings.welcome_template}",
                    oninput: move |e| page.edit(|s| s.welcome_template = e.value()),
                }
                p { class: "section-hint", "Placeholders: {{user}}, {{server}}" }
            }

            section { class: "settings-section",
                h3 { "Farewell" }
                div { class: "setting-row",
                    label { "Announce departures" }
                    input {
                        r#type: "checkbox",
                        checked: settings.farewell_enabled,
                        onchange: move |e: Event<FormData>| {
                            page.edit(|s| s.farewell_enabled = e.checked());
                        },
                    }
                }
                div { class: "setting-row",
                    label { "Channel" }
                    input {
                        class: "field-input",
                        placeholder: "Channel id",
                        value: "{farewell_channel}",
                        oninput: move |e| {
                            let value = e.value().trim().to_string();
                            page.edit(|s| {
                                s.farewell_channel_id = if value.is_empty() { None } else { Some(value.clone()) };
                            });
                        },
                    }
                }
                textarea {
                    class: "field-textarea",
                    rows: "3",
                    value: "{settings.farewell_template}",
                    oninput: move |e| page.edit(|s| s.farewell_template = e.value()),
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
                h2 { "Messages" }
                p { class: "page-hint", "What the bot posts when members arrive or leave." }
            }
            {body}
        }
    }
}
