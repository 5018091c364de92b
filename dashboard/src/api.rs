use gloo_net::http::Request;
use serde_json::Value;
use settings_types::PageKey;
use std::fmt;
use std::sync::OnceLock;

/// Get the API base URL based on current environment
/// - In development (localhost): use http://localhost:8080
/// - In production: use same origin (API serves static files)
fn get_api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8080".to_string()
    } else {
        "".to_string()
    }
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

// ============================================================================
// Errors
// ============================================================================

/// Failure modes of the settings store API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request never completed (network/CORS).
    Network(String),
    /// Backend refused the request (401/403).
    Permission(u16),
    /// Any other non-2xx status.
    Http { status: u16, message: String },
    /// Response body could not be encoded or parsed.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "request failed: {e}"),
            ApiError::Permission(status) => {
                write!(f, "missing permission (HTTP {status})")
            }
            ApiError::Http { status, message } if message.is_empty() => {
                write!(f, "HTTP error: {status}")
            }
            ApiError::Http { status, message } => {
                write!(f, "HTTP error: {status} ({message})")
            }
            ApiError::Decode(e) => write!(f, "failed to parse response: {e}"),
        }
    }
}

async fn error_from_response(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    if status == 401 || status == 403 {
        return ApiError::Permission(status);
    }
    let body = response.text().await.unwrap_or_default();
    ApiError::Http {
        status,
        message: error_message_from_body(&body),
    }
}

/// Pull a human-readable message out of a JSON error body, if there is one.
fn error_message_from_body(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return String::new();
    }
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        if let Some(error) = json.get("error").and_then(|v| v.as_str()) {
            return error.to_string();
        }
        if let Some(message) = json.get("message").and_then(|v| v.as_str()) {
            return message.to_string();
        }
    }
    body.to_string()
}

// ============================================================================
// Settings store
// ============================================================================

fn settings_path(server_id: &str, page: PageKey) -> String {
    format!("/api/servers/{}/settings/{}", server_id, page.as_str())
}

fn encoded_server_id(server_id: &str) -> String {
    js_sys::encode_uri_component(server_id)
        .as_string()
        .unwrap_or_else(|| server_id.to_string())
}

/// The backend returns either `{ "settings": <snapshot> }` or a bare
/// snapshot depending on the page; accept both.
pub fn settings_payload(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key("settings") => {
            map.remove("settings").unwrap_or(Value::Null)
        }
        other => other,
    }
}

pub async fn fetch_settings(server_id: &str, page: PageKey) -> Result<Value, ApiError> {
    let url = format!(
        "{}{}",
        api_base(),
        settings_path(&encoded_server_id(server_id), page)
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    let value: Value = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    Ok(settings_payload(value))
}

/// Replace one page's persisted configuration. Success carries no body
/// contract; anything 2xx counts.
pub async fn save_settings(
    server_id: &str,
    page: PageKey,
    snapshot: &Value,
) -> Result<(), ApiError> {
    let url = format!(
        "{}{}",
        api_base(),
        settings_path(&encoded_server_id(server_id), page)
    );
    let body = serde_json::json!({ "settings": snapshot });

    let response = Request::post(&url)
        .json(&body)
        .map_err(|e| ApiError::Decode(format!("failed to encode request: {e}")))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    Ok(())
}

/// Reset one page to the backend's default configuration.
pub async fn reset_settings(server_id: &str, page: PageKey) -> Result<(), ApiError> {
    let url = format!(
        "{}{}",
        api_base(),
        settings_path(&encoded_server_id(server_id), page)
    );

    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn settings_path_carries_server_and_page() {
        assert_eq!(
            settings_path("42", PageKey::AutoRole),
            "/api/servers/42/settings/auto-role"
        );
    }

    #[test]
    fn wrapped_and_bare_payloads_are_equivalent() {
        let snapshot = json!({ "userRoles": ["123"], "botRoles": [] });
        let wrapped = json!({ "settings": snapshot.clone() });
        assert_eq!(settings_payload(wrapped), snapshot);
        assert_eq!(settings_payload(snapshot.clone()), snapshot);
    }

    #[test]
    fn error_message_prefers_error_then_message_fields() {
        assert_eq!(
            error_message_from_body(r#"{"error":"bad page key"}"#),
            "bad page key"
        );
        assert_eq!(
            error_message_from_body(r#"{"message":"nope"}"#),
            "nope"
        );
        assert_eq!(error_message_from_body("plain text"), "plain text");
        assert_eq!(error_message_from_body("   "), "");
    }

    #[test]
    fn display_formats_by_variant() {
        let err = ApiError::Http {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error: 500 (boom)");
        assert_eq!(
            ApiError::Http {
                status: 502,
                message: String::new()
            }
            .to_string(),
            "HTTP error: 502"
        );
        assert_eq!(
            ApiError::Permission(403).to_string(),
            "missing permission (HTTP 403)"
        );
    }
}
