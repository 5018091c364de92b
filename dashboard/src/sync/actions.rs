//! Save/Revert/Reset orchestration for whichever page is mounted.
//!
//! Exactly one persistence discipline: the shell collects the mounted
//! page's snapshot and performs the backend write itself. Pages trigger
//! saves only through `SettingsSync::request_save`.

use dioxus_logger::tracing;

use crate::api;
use crate::shell::toast::{ToastManager, ToastSeverity};

use super::store::SettingsSync;

pub async fn save_active_page(
    server_id: String,
    mut sync: SettingsSync,
    mut toasts: ToastManager,
) {
    if !sync.begin_save() {
        return;
    }
    let Some(collected) = sync.collect() else {
        // Unmount race: nothing to persist, keep the edits flagged.
        sync.finish_save(false);
        return;
    };

    match api::save_settings(&server_id, collected.page, &collected.snapshot).await {
        Ok(()) => {
            if !sync.commit(collected.token, collected.snapshot) {
                tracing::warn!(
                    "saved {} settings but the page was gone before commit",
                    collected.page.as_str()
                );
            }
            sync.finish_save(true);
            sync.mark_saved_now();
            toasts.show("Settings saved", ToastSeverity::Success);
        }
        Err(e) => {
            sync.finish_save(false);
            tracing::error!("failed to save {} settings: {e}", collected.page.as_str());
            toasts.show(format!("Save failed: {e}"), ToastSeverity::Error);
        }
    }
}

/// Synchronous: discards local edits, no network round-trip.
pub fn revert_active_page(mut sync: SettingsSync, mut toasts: ToastManager) {
    if !sync.is_dirty() {
        return;
    }
    sync.revert();
    toasts.show("Changes reverted", ToastSeverity::Info);
}

pub async fn reset_active_page(
    server_id: String,
    mut sync: SettingsSync,
    mut toasts: ToastManager,
) {
    let Some(page) = sync.active_page() else {
        tracing::warn!("reset requested with no settings page mounted");
        return;
    };
    if !sync.begin_reset() {
        return;
    }

    match api::reset_settings(&server_id, page).await {
        Ok(()) => {
            sync.finish_reset(true);
            sync.dispatch_reload();
            toasts.show("Settings restored to defaults", ToastSeverity::Success);
        }
        Err(e) => {
            sync.finish_reset(false);
            tracing::error!("failed to reset {} settings: {e}", page.as_str());
            toasts.show(format!("Reset failed: {e}"), ToastSeverity::Error);
        }
    }
}
