//! Basic settings page: prefix, nickname, embed color, language.

use dioxus::prelude::*;
use settings_types::{is_valid_hex_color, BasicSettings, PageKey};

use super::use_settings_page;

const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("de", "Deutsch"),
    ("fr", "Fran\u{e7}ais"),
    ("es", "Espa\u{f1}ol"),
    ("pt", "Portugu\u{ea}s"),
];

#[component]
pub fn BasicPage(server_id: String) -> Element {
    let mut page = use_settings_page::<BasicSettings>(server_id, PageKey::Basic);

    // Ctrl+S funnels into the shell's save flow; the page never persists
    // its own snapshot.
    let on_keydown = use_callback(move |e: KeyboardEvent| {
        if e.key() == Key::Character("s".to_string()) && e.modifiers().ctrl() {
            e.prevent_default();
            page.request_save();
        }
    });

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
        let nickname = settings.nickname.clone().unwrap_or_default();
        let color_ok = is_valid_hex_color(&settings.embed_color);
        rsx! {
            section { class: "settings-section",
                div { class: "setting-row",
                    label { "Command prefix" }
                    input {
                        class: "field-input field-short",
                        maxlength: "3",
                        value: "{settings.prefix}",
                        oninput: move |e| page.edit(|s| s.prefix = e.value()),
                    }
                }
                div { class: "setting-row",
                    label { "Bot nickname" }
                    input {
                        class: "field-input",
                        placeholder: "Default name",
                        value: "{nickname}",
                        oninput: move |e| {
                            let value = e.value().trim().to_string();
                            page.edit(|s| {
                                s.nickname = if value.is_empty() { None } else { Some(value.clone()) };
                            });
                        },
                    }
                }
                div { class: "setting-row",
                    label { "Embed color" }
                    input {
                        r#type: "color",
                        value: "{settings.embed_color}",
                        oninput: move |e| page.edit(|s| s.embed_color = e.value()),
                    }
                    if !color_ok {
                        span { class: "field-warning", "Not a valid hex color" }
                    }
                }
                div { class: "setting-row",
                    label { "Language" }
                    select {
                        class: "field-input",
                        value: "{settings.language}",
                        onchange: move |e: Event<FormData>| {
                            page.edit(|s| s.language = e.value());
                        },
                        for (code , name) in LANGUAGES.iter() {
                            option {
                                value: "{code}",
                                selected: settings.language == *code,
                                "{name}"
                            }
                        }
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
        div {
            class: "settings-page",
            tabindex: "0",
            onkeydown: move |e| on_keydown.call(e),
            header { class: "page-header",
                h2 { "Basic Settings" }
                p { class: "page-hint", "How the bot presents itself on this server." }
            }
            {body}
        }
    }
}
