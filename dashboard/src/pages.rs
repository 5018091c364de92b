//! Settings pages and the shared page adapter.
//!
//! `use_settings_page` centralizes the boilerplate every page would
//! otherwise repeat: fetch-on-mount, dirty tracking against the persisted
//! snapshot, and registration with the coordination store. Pages only
//! render fields and call [`SettingsPage::edit`].

mod form;

mod ai;
mod auto_role;
mod badges;
mod basic;
mod custom_roles;
mod messages;
mod reaction_roles;

pub use ai::AiPage;
pub use auto_role::AutoRolePage;
pub use badges::BadgesPage;
pub use basic::BasicPage;
pub use custom_roles::CustomRolesPage;
pub use form::PageForm;
pub use messages::MessagesPage;
pub use reaction_roles::ReactionRolesPage;

use dioxus::prelude::*;
use dioxus_logger::tracing;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use settings_types::PageKey;
use uuid::Uuid;

use crate::api;
use crate::shell::toast::{use_toast, ToastSeverity};
use crate::sync::{use_settings_sync, PageAdapter, SettingsSync};

/// Handle returned by [`use_settings_page`]; everything a page needs to
/// render and edit its form.
pub struct SettingsPage<T: 'static> {
    form: Signal<Option<PageForm<T>>>,
    loading: Signal<bool>,
    load_error: Signal<Option<String>>,
    reload: Callback<()>,
    sync: SettingsSync,
}

impl<T: 'static> Clone for SettingsPage<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SettingsPage<T> {}

impl<T> SettingsPage<T>
where
    T: Clone + PartialEq + Serialize + DeserializeOwned + 'static,
{
    pub fn loading(&self) -> bool {
        *self.loading.read()
    }

    pub fn load_error(&self) -> Option<String> {
        self.load_error.read().clone()
    }

    /// Clone of the in-memory snapshot; `None` until the fetch lands.
    pub fn current(&self) -> Option<T> {
        self.form.read().as_ref().map(|f| f.current().clone())
    }

    pub fn is_dirty(&self) -> bool {
        self.form.read().as_ref().is_some_and(|f| f.is_dirty())
    }

    /// Apply one edit, recompute dirty and push it to the shell. Called on
    /// every field change, not only the first.
    pub fn edit(&mut self, mutate: impl FnOnce(&mut T)) {
        let mut dirty = None;
        if let Some(form) = self.form.write().as_mut() {
            dirty = Some(form.edit(mutate));
        }
        if let Some(dirty) = dirty {
            self.sync.report_dirty(dirty);
        }
    }

    /// Ask the shell to save (Ctrl+S, form submit). The shell collects and
    /// persists; pages never POST their own snapshot.
    pub fn request_save(&mut self) {
        self.sync.request_save();
    }

    /// Fetch the snapshot again (retry button after a failed load).
    pub fn reload(&self) {
        self.reload.call(());
    }
}

pub fn use_settings_page<T>(server_id: String, page: PageKey) -> SettingsPage<T>
where
    T: Clone + PartialEq + Serialize + DeserializeOwned + 'static,
{
    let mut sync = use_settings_sync();
    let mut toasts = use_toast();
    let mut form = use_signal(|| None::<PageForm<T>>);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| None::<String>);
    let token = use_hook(Uuid::new_v4);
    let server_id = use_signal(|| server_id);

    let mut reload_requests = use_signal(|| 0u32);
    let reload = use_callback(move |_: ()| {
        *reload_requests.write() += 1;
    });

    let collect = use_callback(move |_: ()| {
        form.peek()
            .as_ref()
            .and_then(|f| serde_json::to_value(f.current()).ok())
            .unwrap_or(Value::Null)
    });

    let commit = use_callback(move |persisted: Value| {
        match serde_json::from_value::<T>(persisted) {
            Ok(snapshot) => {
                let mut dirty = None;
                if let Some(f) = form.write().as_mut() {
                    f.commit(snapshot);
                    dirty = Some(f.is_dirty());
                }
                if let Some(dirty) = dirty {
                    sync.report_dirty(dirty);
                }
            }
            Err(e) => {
                tracing::warn!(
                    "persisted {} snapshot no longer matches the page shape: {e}",
                    page.as_str()
                );
            }
        }
    });

    let revert = use_callback(move |_: ()| {
        let mut reverted = false;
        if let Some(f) = form.write().as_mut() {
            f.revert();
            reverted = true;
        }
        if reverted {
            sync.report_dirty(false);
        }
    });

    let load = use_callback(move |_: ()| {
        let server_id = server_id.peek().clone();
        spawn(async move {
            loading.set(true);
            match api::fetch_settings(&server_id, page).await {
                Ok(value) => match serde_json::from_value::<T>(value) {
                    Ok(snapshot) => {
                        form.set(Some(PageForm::new(snapshot)));
                        load_error.set(None);
                        sync.register_page(PageAdapter {
                            page,
                            token,
                            collect,
                            commit,
                            revert,
                            reload,
                        });
                    }
                    Err(e) => {
                        tracing::error!("{} settings have an unexpected shape: {e}", page.as_str());
                        form.set(None);
                        sync.unregister_page(token);
                        load_error.set(Some(format!("unexpected response shape: {e}")));
                        toasts.show("Failed to load settings", ToastSeverity::Error);
                    }
                },
                Err(e) => {
                    tracing::error!("failed to load {} settings: {e}", page.as_str());
                    form.set(None);
                    sync.unregister_page(token);
                    load_error.set(Some(e.to_string()));
                    toasts.show(format!("Failed to load settings: {e}"), ToastSeverity::Error);
                }
            }
            loading.set(false);
        });
    });

    // Initial fetch on mount, and again whenever a reload is dispatched
    // (reset-to-defaults, retry button).
    use_effect(move || {
        let _ = reload_requests();
        load.call(());
    });

    use_drop(move || {
        sync.unregister_page(token);
    });

    SettingsPage {
        form,
        loading,
        load_error,
        reload,
        sync,
    }
}
