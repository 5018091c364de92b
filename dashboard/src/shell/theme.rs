//! Theme preference, cached in localStorage.

pub const DEFAULT_THEME: &str = "dark";

const STORAGE_KEY: &str = "guildboard-theme";

pub fn next_theme(current: &str) -> String {
    if current == "dark" {
        "light".to_string()
    } else {
        "dark".to_string()
    }
}

pub fn apply_theme_to_document(theme: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-theme", theme);
    }
}

pub fn get_cached_theme_preference() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(STORAGE_KEY).ok()?
}

pub fn set_cached_theme_preference(theme: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(Some(storage)) = window.local_storage() else {
        return;
    };
    let _ = storage.set_item(STORAGE_KEY, theme);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_alternate() {
        assert_eq!(next_theme("dark"), "light");
        assert_eq!(next_theme("light"), "dark");
        assert_eq!(next_theme("weird"), "dark");
    }
}
