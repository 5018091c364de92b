use dioxus::prelude::*;
use settings_types::PageKey;

use crate::route::page_label;

/// Sidebar links go through `on_navigate`, never directly to the route
/// signal: the shell's navigation guard decides whether the click lands.
#[component]
pub fn Sidebar(server_id: String, active: PageKey, on_navigate: Callback<PageKey>) -> Element {
    rsx! {
        nav { class: "sidebar",
            div { class: "sidebar-brand",
                span { class: "brand-name", "Guildboard" }
                span { class: "brand-server", "{server_id}" }
            }
            for page in PageKey::all() {
                {
                    let page = *page;
                    let class = if page == active {
                        "sidebar-link sidebar-link-active"
                    } else {
                        "sidebar-link"
                    };
                    rsx! {
                        button {
                            key: "{page.as_str()}",
                            class: "{class}",
                            onclick: move |_| on_navigate.call(page),
                            {page_label(page)}
                        }
                    }
                }
            }
        }
    }
}
