//! AI assistant page.

use dioxus::prelude::*;
use settings_types::{AiSettings, PageKey};

use super::use_settings_page;

#[component]
pub fn AiPage(server_id: String) -> Element {
    let mut page = use_settings_page::<AiSettings>(server_id, PageKey::Ai);

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
        let channel = settings.channel_id.clone().unwrap_or_default();
        let temperature = format!("{:.1}", settings.temperature);
        rsx! {
            section { class: "settings-section",
                div { class: "setting-row",
                    label { "Enable the assistant" }
                    input {
                        r#type: "checkbox",
                        checked: settings.enabled,
                        onchange: move |e: Event<FormData>| {
                            page.edit(|s| s.enabled = e.checked());
                        },
                    }
                }
                div { class: "setting-row",
                    label { "Reply channel" }
                    input {
                        class: "field-input",
                        placeholder: "Channel id (empty = everywhere)",
                        value: "{channel}",
                        oninput: move |e| {
                            let value = e.value().trim().to_string();
                            page.edit(|s| {
                                s.channel_id = if value.is_empty() { None } else { Some(value.clone()) };
                            });
                        },
                    }
                }
            }

            section { class: "settings-section",
                h3 { "Persona" }
                p { class: "section-hint", "System prompt the assistant answers with." }
                textarea {
                    class: "field-textarea",
                    rows: "5",
                    value: "{settings.persona}",
                    oninput: move |e| page.edit(|s| s.persona = e.value()),
                }
                div { class: "setting-row",
                    label { "Temperature: {temperature}" }
                    input {
                        r#type: "range",
                        min: "0",
                        max: "1",
                        step: "0.1",
                        value: "{settings.temperature}",
                        oninput: move |e| {
                            if let Ok(value) = e.value().parse::<f32>() {
                                page.edit(|s| s.temperature = value);
                            }
                        },
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
                h2 { "AI Assistant" }
                p { class: "page-hint", "Let the bot answer questions in chat." }
            }
            {body}
        }
    }
}
