//! Route ↔ URL mapping.
//!
//! The dashboard has no router component; the shell holds the active page
//! in a signal and mirrors it into the History API so deep links and
//! reloads land on the right page.

use settings_types::PageKey;

/// Server shown when the URL does not name one (local development).
pub const DEFAULT_SERVER_ID: &str = "demo";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardRoute {
    pub server_id: String,
    pub page: PageKey,
}

pub fn route_path(server_id: &str, page: PageKey) -> String {
    format!("/servers/{}/{}", server_id, page.as_str())
}

/// Parse `/servers/{serverId}/{pageKey}`. A missing or unknown page key
/// falls back to the first sidebar page so stale links still land somewhere.
pub fn parse_path(path: &str) -> Option<DashboardRoute> {
    let mut parts = path.trim_matches('/').split('/');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some("servers"), Some(server_id), page, None) if !server_id.is_empty() => {
            let page = page
                .and_then(PageKey::from_key)
                .unwrap_or(PageKey::all()[0]);
            Some(DashboardRoute {
                server_id: server_id.to_string(),
                page,
            })
        }
        _ => None,
    }
}

pub fn current_route() -> Option<DashboardRoute> {
    let window = web_sys::window()?;
    let path = window.location().pathname().ok()?;
    parse_path(&path)
}

pub fn push_route(server_id: &str, page: PageKey) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    let path = route_path(server_id, page);
    if history
        .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path))
        .is_err()
    {
        dioxus_logger::tracing::warn!("failed to push history state for {path}");
    }
}

pub fn page_label(page: PageKey) -> &'static str {
    match page {
        PageKey::Basic => "Basic Settings",
        PageKey::AutoRole => "Auto Role",
        PageKey::Ai => "AI Assistant",
        PageKey::CustomRoles => "Custom Roles",
        PageKey::ReactionRoles => "Reaction Roles",
        PageKey::Messages => "Messages",
        PageKey::Badges => "Badges",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_paths_round_trip() {
        for page in PageKey::all() {
            let path = route_path("42", *page);
            let parsed = parse_path(&path).expect("should parse");
            assert_eq!(parsed.server_id, "42");
            assert_eq!(parsed.page, *page);
        }
    }

    #[test]
    fn unknown_page_falls_back_to_first() {
        let parsed = parse_path("/servers/42/not-a-page").expect("should parse");
        assert_eq!(parsed.page, PageKey::all()[0]);

        let parsed = parse_path("/servers/42").expect("should parse");
        assert_eq!(parsed.page, PageKey::all()[0]);
    }

    #[test]
    fn non_dashboard_paths_do_not_parse() {
        assert_eq!(parse_path("/"), None);
        assert_eq!(parse_path("/servers"), None);
        assert_eq!(parse_path("/servers//ai"), None);
        assert_eq!(parse_path("/servers/42/ai/extra"), None);
        assert_eq!(parse_path("/login"), None);
    }
}
