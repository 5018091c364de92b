//! The layout controller: owns the route signal, the coordination store
//! and the Save/Revert/Reset orchestration for whichever page is mounted.

use dioxus::prelude::*;
use settings_types::PageKey;

use crate::pages::{
    AiPage, AutoRolePage, BadgesPage, BasicPage, CustomRolesPage, MessagesPage, ReactionRolesPage,
};
use crate::route::{self, page_label};
use crate::shell::action_bar::ActionBar;
use crate::shell::effects;
use crate::shell::reset_modal::ResetModal;
use crate::shell::sidebar::Sidebar;
use crate::shell::styles::{DASHBOARD_STYLES, DASHBOARD_TOKENS};
use crate::shell::theme::{
    apply_theme_to_document, get_cached_theme_preference, next_theme, set_cached_theme_preference,
    DEFAULT_THEME,
};
use crate::shell::toast::{use_toast_provider, ToastFrame, ToastSeverity};
use crate::sync::{
    reset_active_page, revert_active_page, save_active_page, use_settings_sync_provider, SyncState,
};

#[component]
pub fn DashboardShell(server_id: String, initial_page: PageKey) -> Element {
    let mut toasts = use_toast_provider();
    let mut sync = use_settings_sync_provider();

    let server_id = use_signal(|| server_id);
    let mut active_page = use_signal(|| initial_page);
    let mut reset_modal_open = use_signal(|| false);
    let mut current_theme =
        use_signal(|| get_cached_theme_preference().unwrap_or_else(|| DEFAULT_THEME.to_string()));
    let mut handled_save_requests = use_signal(|| 0u32);

    use_effect(move || {
        apply_theme_to_document(&current_theme());
    });

    use_effect(move || {
        effects::install_unload_guard(sync);
    });

    // Pages may request a save (Ctrl+S); the flow is still shell-owned.
    use_effect(move || {
        let requested = sync.save_requests();
        if requested > *handled_save_requests.peek() {
            handled_save_requests.set(requested);
            let server_id = server_id.peek().clone();
            spawn(async move {
                save_active_page(server_id, sync, toasts).await;
            });
        }
    });

    let toggle_theme = use_callback(move |_: ()| {
        let next = next_theme(current_theme.peek().as_str());
        set_cached_theme_preference(&next);
        current_theme.set(next);
    });

    let navigate = use_callback(move |target: PageKey| {
        if *active_page.peek() == target {
            return;
        }
        if !sync.attempt_navigation() {
            let message = match sync.state() {
                SyncState::Saving => "Hold on - your changes are still saving",
                SyncState::Resetting => "Hold on - the reset is still in progress",
                _ => "You have unsaved changes - save or revert first",
            };
            toasts.show(message, ToastSeverity::Info);
            return;
        }
        active_page.set(target);
        route::push_route(server_id.peek().as_str(), target);
    });

    let on_save = use_callback(move |_: ()| {
        let server_id = server_id.peek().clone();
        spawn(async move {
            save_active_page(server_id, sync, toasts).await;
        });
    });

    let on_revert = use_callback(move |_: ()| {
        revert_active_page(sync, toasts);
    });

    let on_reset_confirm = use_callback(move |_: ()| {
        reset_modal_open.set(false);
        let server_id = server_id.peek().clone();
        spawn(async move {
            reset_active_page(server_id, sync, toasts).await;
        });
    });

    let page = active_page();
    let state = sync.state();
    let resetting = state == SyncState::Resetting;

    let page_body = match page {
        PageKey::Basic => rsx! {
            BasicPage { server_id: server_id() }
        },
        PageKey::AutoRole => rsx! {
            AutoRolePage { server_id: server_id() }
        },
        PageKey::Ai => rsx! {
            AiPage { server_id: server_id() }
        },
        PageKey::CustomRoles => rsx! {
            CustomRolesPage { server_id: server_id() }
        },
        PageKey::ReactionRoles => rsx! {
            ReactionRolesPage { server_id: server_id() }
        },
        PageKey::Messages => rsx! {
            MessagesPage { server_id: server_id() }
        },
        PageKey::Badges => rsx! {
            BadgesPage { server_id: server_id() }
        },
    };

    rsx! {
        style { {DASHBOARD_TOKENS} }
        style { {DASHBOARD_STYLES} }

        div { class: "dashboard-shell",
            Sidebar {
                server_id: server_id(),
                active: page,
                on_navigate: navigate,
            }

            div { class: "dashboard-main",
                header { class: "dashboard-header",
                    h1 { {page_label(page)} }
                    div { class: "header-actions",
                        button {
                            class: "btn btn-ghost",
                            onclick: move |_| toggle_theme.call(()),
                            if current_theme() == "dark" {
                                "Light mode"
                            } else {
                                "Dark mode"
                            }
                        }
                        button {
                            class: "btn btn-danger-ghost",
                            disabled: resetting,
                            onclick: move |_| reset_modal_open.set(true),
                            if resetting {
                                "Resetting\u{2026}"
                            } else {
                                "Reset All"
                            }
                        }
                    }
                }

                main { class: "dashboard-body", {page_body} }
            }

            ActionBar {
                state,
                shake_nonce: sync.shake_nonce(),
                last_saved: sync.last_saved(),
                on_save,
                on_revert,
            }

            if reset_modal_open() {
                ResetModal {
                    page_label: page_label(page).to_string(),
                    on_confirm: on_reset_confirm,
                    on_cancel: move |_| reset_modal_open.set(false),
                }
            }

            ToastFrame {}
        }
    }
}
