use dioxus::prelude::*;

use crate::sync::SyncState;

/// Floating Save/Revert bar; visible while the mounted page is dirty or a
/// save is in flight.
#[component]
pub fn ActionBar(
    state: SyncState,
    shake_nonce: u32,
    last_saved: Option<String>,
    on_save: Callback<()>,
    on_revert: Callback<()>,
) -> Element {
    if !matches!(state, SyncState::Dirty | SyncState::Saving) {
        return rsx! {};
    }

    let saving = state == SyncState::Saving;
    let class = if shake_nonce > 0 {
        "action-bar action-bar-shake"
    } else {
        "action-bar"
    };

    rsx! {
        div {
            // Remount on every refused navigation so the shake replays.
            key: "shake-{shake_nonce}",
            class: "{class}",
            div { class: "action-bar-text",
                span { "You have unsaved changes" }
                if let Some(stamp) = last_saved {
                    span { class: "action-bar-stamp", "Last saved {stamp}" }
                }
            }
            div { class: "action-bar-buttons",
                button {
                    class: "btn btn-ghost",
                    disabled: saving,
                    onclick: move |_| on_revert.call(()),
                    "Revert"
                }
                button {
                    class: "btn btn-save",
                    disabled: saving,
                    onclick: move |_| on_save.call(()),
                    if saving {
                        span { class: "spinner" }
                        " Saving\u{2026}"
                    } else {
                        "Save changes"
                    }
                }
            }
        }
    }
}
