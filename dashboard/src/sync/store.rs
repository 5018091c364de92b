//! Shared coordination store between the shell and the mounted page.
//!
//! The shell never sees the shape of a page's form data; it talks to the
//! page through the narrow [`PageAdapter`] callbacks and a single shared
//! [`SyncCore`]. Dispatches are synchronous and at-most-once: whatever
//! adapter is registered at that instant receives them, and a dispatch
//! with no adapter is logged and dropped.

use dioxus::prelude::*;
use dioxus_logger::tracing;
use serde_json::Value;
use settings_types::PageKey;
use uuid::Uuid;

use super::core::{SyncCore, SyncState};

/// Callbacks through which the shell talks to the mounted settings page.
#[derive(Clone)]
pub struct PageAdapter {
    pub page: PageKey,
    /// Fresh per mount, so a snapshot collected from one mount is never
    /// committed to a page mounted later.
    pub token: Uuid,
    /// Serialize the page's current in-memory snapshot.
    pub collect: Callback<(), Value>,
    /// Accept the persisted snapshot as the new baseline after a save.
    pub commit: Callback<Value>,
    /// Overwrite current with original; discards pending edits.
    pub revert: Callback<()>,
    /// Re-fetch from the backend (after a reset-to-defaults).
    pub reload: Callback<()>,
}

/// A snapshot pulled from the mounted page for one save attempt.
#[derive(Clone)]
pub struct CollectedSnapshot {
    pub page: PageKey,
    pub token: Uuid,
    pub snapshot: Value,
}

/// Context handle shared by the shell and every settings page.
#[derive(Clone, Copy)]
pub struct SettingsSync {
    core: Signal<SyncCore>,
    adapter: Signal<Option<PageAdapter>>,
    shake: Signal<u32>,
    save_requests: Signal<u32>,
    last_saved: Signal<Option<String>>,
}

impl SettingsSync {
    fn new() -> Self {
        Self {
            core: Signal::new(SyncCore::new()),
            adapter: Signal::new(None),
            shake: Signal::new(0),
            save_requests: Signal::new(0),
            last_saved: Signal::new(None),
        }
    }

    pub fn state(&self) -> SyncState {
        self.core.read().state()
    }

    pub fn is_dirty(&self) -> bool {
        self.core.read().is_dirty()
    }

    pub fn is_saving(&self) -> bool {
        self.core.read().is_saving()
    }

    pub fn is_resetting(&self) -> bool {
        self.core.read().is_resetting()
    }

    // ------------------------------------------------------------------
    // Page side
    // ------------------------------------------------------------------

    /// Pushed by the page on every edit; the shell's flag is never computed
    /// independently.
    pub fn report_dirty(&mut self, dirty: bool) {
        self.core.write().report_dirty(dirty);
    }

    pub fn register_page(&mut self, adapter: PageAdapter) {
        {
            let mut slot = self.adapter.write();
            if let Some(existing) = slot.as_ref() {
                // Same token means the same mount re-registered after a
                // reload; only an overlap of two mounts is worth noise.
                if existing.token != adapter.token {
                    tracing::warn!(
                        "settings page {} replaced {} before it unregistered",
                        adapter.page.as_str(),
                        existing.page.as_str()
                    );
                }
            }
            *slot = Some(adapter);
        }
        self.core.write().page_mounted();
    }

    pub fn unregister_page(&mut self, token: Uuid) {
        let mut slot = self.adapter.write();
        if slot.as_ref().is_some_and(|a| a.token == token) {
            *slot = None;
        }
    }

    /// Ask the shell to run a save (Ctrl+S, form submit). Pages never
    /// persist their own snapshot.
    pub fn request_save(&mut self) {
        *self.save_requests.write() += 1;
    }

    pub fn save_requests(&self) -> u32 {
        *self.save_requests.read()
    }

    // ------------------------------------------------------------------
    // Shell side
    // ------------------------------------------------------------------

    pub fn active_page(&self) -> Option<PageKey> {
        self.adapter.peek().as_ref().map(|a| a.page)
    }

    /// Pull the mounted page's current snapshot for a save attempt.
    pub fn collect(&self) -> Option<CollectedSnapshot> {
        let Some(adapter) = self.adapter.peek().as_ref().cloned() else {
            tracing::warn!("collect dispatched with no settings page mounted");
            return None;
        };
        let snapshot = adapter.collect.call(());
        Some(CollectedSnapshot {
            page: adapter.page,
            token: adapter.token,
            snapshot,
        })
    }

    /// Hand the persisted snapshot back to the page it was collected from.
    /// Returns false when that mount is gone (reported, not misapplied).
    pub fn commit(&self, token: Uuid, snapshot: Value) -> bool {
        let adapter = self.adapter.peek().as_ref().cloned();
        match adapter {
            Some(a) if a.token == token => {
                a.commit.call(snapshot);
                true
            }
            Some(a) => {
                tracing::warn!(
                    "save completed for a mount of {} that is no longer active",
                    a.page.as_str()
                );
                false
            }
            None => {
                tracing::warn!("save completed with no settings page mounted");
                false
            }
        }
    }

    pub fn dispatch_revert(&self) -> bool {
        match self.adapter.peek().as_ref().cloned() {
            Some(adapter) => {
                adapter.revert.call(());
                true
            }
            None => {
                tracing::warn!("revert dispatched with no settings page mounted");
                false
            }
        }
    }

    pub fn dispatch_reload(&self) -> bool {
        match self.adapter.peek().as_ref().cloned() {
            Some(adapter) => {
                adapter.reload.call(());
                true
            }
            None => {
                tracing::warn!("reload dispatched with no settings page mounted");
                false
            }
        }
    }

    pub fn begin_save(&mut self) -> bool {
        self.core.write().begin_save()
    }

    pub fn finish_save(&mut self, ok: bool) {
        self.core.write().finish_save(ok);
    }

    /// Discard pending edits. Safe to call when already clean.
    pub fn revert(&mut self) -> bool {
        if !self.core.peek().is_dirty() {
            return true;
        }
        let delivered = self.dispatch_revert();
        self.core.write().revert();
        delivered
    }

    pub fn begin_reset(&mut self) -> bool {
        self.core.write().begin_reset()
    }

    pub fn finish_reset(&mut self, ok: bool) {
        self.core.write().finish_reset(ok);
    }

    // ------------------------------------------------------------------
    // Navigation guard
    // ------------------------------------------------------------------

    /// True means the transition may proceed; false shakes the action bar
    /// and leaves the route untouched.
    pub fn attempt_navigation(&mut self) -> bool {
        if self.core.peek().blocks_navigation() {
            *self.shake.write() += 1;
            return false;
        }
        true
    }

    /// Bumped every time a navigation attempt is refused; the action bar
    /// keys its shake animation off this.
    pub fn shake_nonce(&self) -> u32 {
        *self.shake.read()
    }

    /// Non-reactive read for browser event handlers (`beforeunload`).
    pub fn blocks_navigation_now(&self) -> bool {
        self.core.peek().blocks_navigation()
    }

    pub fn mark_saved_now(&mut self) {
        let stamp = chrono::Local::now().format("%H:%M").to_string();
        self.last_saved.set(Some(stamp));
    }

    pub fn last_saved(&self) -> Option<String> {
        self.last_saved.read().clone()
    }
}

/// Initialize the coordination store at the shell root.
pub fn use_settings_sync_provider() -> SettingsSync {
    use_context_provider(SettingsSync::new)
}

/// Get the coordination store from context (pages and shell components).
pub fn use_settings_sync() -> SettingsSync {
    use_context::<SettingsSync>()
}
