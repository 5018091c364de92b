use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::sync::SettingsSync;

/// Prompt before a tab close or reload while edits or a write are pending.
/// The in-app navigation guard cannot catch those.
pub fn install_unload_guard(sync: SettingsSync) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let callback = Closure::wrap(Box::new(move |event: web_sys::BeforeUnloadEvent| {
        if sync.blocks_navigation_now() {
            event.prevent_default();
            event.set_return_value("You have unsaved changes.");
        }
    }) as Box<dyn FnMut(web_sys::BeforeUnloadEvent)>);

    let _ = window
        .add_event_listener_with_callback("beforeunload", callback.as_ref().unchecked_ref());

    // Keep listener alive for app lifetime.
    callback.forget();
}
