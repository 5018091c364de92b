//! Settings wire types shared between the dashboard and the bot backend
//!
//! Every settings page exchanges exactly one snapshot struct with the
//! backend. Field names are camelCase on the wire; snapshots are compared
//! structurally (`PartialEq`) to decide whether a page has unsaved edits.

use serde::{Deserialize, Serialize};

// ============================================================================
// Page Keys
// ============================================================================

/// Backend key for one settings page. The string forms are part of the REST
/// contract (`/settings/{pageKey}`) and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKey {
    AutoRole,
    Ai,
    CustomRoles,
    ReactionRoles,
    Messages,
    Badges,
    Basic,
}

impl PageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageKey::AutoRole => "auto-role",
            PageKey::Ai => "ai",
            PageKey::CustomRoles => "custom-roles",
            PageKey::ReactionRoles => "reaction-roles",
            PageKey::Messages => "messages",
            PageKey::Badges => "badges",
            PageKey::Basic => "basic",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "auto-role" => Some(PageKey::AutoRole),
            "ai" => Some(PageKey::Ai),
            "custom-roles" => Some(PageKey::CustomRoles),
            "reaction-roles" => Some(PageKey::ReactionRoles),
            "messages" => Some(PageKey::Messages),
            "badges" => Some(PageKey::Badges),
            "basic" => Some(PageKey::Basic),
            _ => None,
        }
    }

    /// All pages, in sidebar order.
    pub fn all() -> &'static [PageKey] {
        &[
            PageKey::Basic,
            PageKey::AutoRole,
            PageKey::Ai,
            PageKey::CustomRoles,
            PageKey::ReactionRoles,
            PageKey::Messages,
            PageKey::Badges,
        ]
    }
}

// ============================================================================
// Auto-role
// ============================================================================

/// Roles granted automatically when a member or bot joins the server.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoRoleSettings {
    #[serde(default)]
    pub user_roles: Vec<String>,
    #[serde(default)]
    pub bot_roles: Vec<String>,
}

// ============================================================================
// AI
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSettings {
    #[serde(default)]
    pub enabled: bool,
    /// Channel the bot replies in; `None` means every channel.
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default = "default_persona")]
    pub persona: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_persona() -> String {
    "You are a friendly server assistant.".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            channel_id: None,
            persona: default_persona(),
            temperature: default_temperature(),
        }
    }
}

// ============================================================================
// Custom roles
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomRole {
    pub name: String,
    #[serde(default = "default_role_color")]
    pub color: String,
    /// Show the role separately in the member list.
    #[serde(default)]
    pub hoist: bool,
    #[serde(default)]
    pub mentionable: bool,
}

fn default_role_color() -> String {
    "#99aab5".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomRolesSettings {
    #[serde(default)]
    pub roles: Vec<CustomRole>,
}

// ============================================================================
// Reaction roles
// ============================================================================

/// One emoji-on-message binding that grants a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionRoleBinding {
    pub message_id: String,
    pub emoji: String,
    pub role_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionRolesSettings {
    #[serde(default)]
    pub bindings: Vec<ReactionRoleBinding>,
}

// ============================================================================
// Messages
// ============================================================================

/// Welcome/farewell announcements. Templates may use `{user}` and `{server}`
/// placeholders; substitution happens bot-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagesSettings {
    #[serde(default)]
    pub welcome_enabled: bool,
    #[serde(default)]
    pub welcome_channel_id: Option<String>,
    #[serde(default = "default_welcome_template")]
    pub welcome_template: String,
    #[serde(default)]
    pub farewell_enabled: bool,
    #[serde(default)]
    pub farewell_channel_id: Option<String>,
    #[serde(default = "default_farewell_template")]
    pub farewell_template: String,
}

fn default_welcome_template() -> String {
    "Welcome to {server}, {user}!".to_string()
}

fn default_farewell_template() -> String {
    "{user} has left {server}.".to_string()
}

impl Default for MessagesSettings {
    fn default() -> Self {
        Self {
            welcome_enabled: false,
            welcome_channel_id: None,
            welcome_template: default_welcome_template(),
            farewell_enabled: false,
            farewell_channel_id: None,
            farewell_template: default_farewell_template(),
        }
    }
}

// ============================================================================
// Badges
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default = "default_badge_color")]
    pub color: String,
}

fn default_badge_color() -> String {
    "#f1c40f".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgesSettings {
    #[serde(default)]
    pub badges: Vec<Badge>,
}

// ============================================================================
// Basic
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicSettings {
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default = "default_embed_color")]
    pub embed_color: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_prefix() -> String {
    "!".to_string()
}

fn default_embed_color() -> String {
    "#5865f2".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for BasicSettings {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            nickname: None,
            embed_color: default_embed_color(),
            language: default_language(),
        }
    }
}

// ============================================================================
// Colors
// ============================================================================

/// Parse a hex color string (e.g., "#ff0000") to RGB bytes.
pub fn parse_hex_color(hex: &str) -> Option<[u8; 3]> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r, g, b])
}

pub fn is_valid_hex_color(hex: &str) -> bool {
    parse_hex_color(hex).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_keys_round_trip() {
        for key in PageKey::all() {
            assert_eq!(PageKey::from_key(key.as_str()), Some(*key));
        }
        assert_eq!(PageKey::from_key("does-not-exist"), None);
    }

    #[test]
    fn auto_role_uses_camel_case_wire_names() {
        let settings = AutoRoleSettings {
            user_roles: vec!["123".to_string()],
            bot_roles: vec![],
        };
        let value = serde_json::to_value(&settings).expect("serialize");
        assert_eq!(value["userRoles"][0], "123");
        assert!(value["botRoles"].as_array().expect("array").is_empty());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: AiSettings = serde_json::from_value(serde_json::json!({})).expect("parse");
        assert_eq!(settings, AiSettings::default());

        let settings: BasicSettings =
            serde_json::from_value(serde_json::json!({ "prefix": "?" })).expect("parse");
        assert_eq!(settings.prefix, "?");
        assert_eq!(settings.embed_color, default_embed_color());
    }

    #[test]
    fn hex_colors_parse() {
        assert_eq!(parse_hex_color("#ff0000"), Some([255, 0, 0]));
        assert_eq!(parse_hex_color("5865f2"), Some([0x58, 0x65, 0xf2]));
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#gggggg"), None);
        assert!(is_valid_hex_color(&default_role_color()));
        assert!(is_valid_hex_color(&default_badge_color()));
    }
}
