//! Unsaved-changes coordination between the shell and the mounted page.

mod actions;
mod core;
mod store;

pub use actions::{reset_active_page, revert_active_page, save_active_page};
pub use core::{SyncCore, SyncState};
pub use store::{
    use_settings_sync, use_settings_sync_provider, CollectedSnapshot, PageAdapter, SettingsSync,
};
