//! Typed session context injected into every list controller
//!
//! Replaces ad hoc reads of browser storage: the frontend loads one `SessionContext`
//! at start-up from a `KeyValueStore`, hands it to the controllers, and tears it down
//! on sign-out.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

const ACTOR_KEY: &str = "session_username";
const REMEMBER_ME_KEY: &str = "session_remember_me";
const HOTEL_KEY: &str = "session_hotel_id";
const ACCESS_TOKEN_KEY: &str = "auth_access_token";
const REFRESH_TOKEN_KEY: &str = "auth_refresh_token";
const THEME_KEY: &str = "ui_theme";
const ACCENT_KEY: &str = "ui_accent_color";
const STATUS_COLORS_KEY: &str = "ui_status_colors";

/// Persistent string storage (browser `localStorage`, or memory in tests)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory `KeyValueStore`
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiPreferences {
    pub theme: Theme,
    pub accent_color: String,
    /// Reservation status → CSS color
    pub status_colors: BTreeMap<String, String>,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            accent_color: "#1976d2".to_string(),
            status_colors: BTreeMap::new(),
        }
    }
}

/// Who is working on which hotel, with which token
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionContext {
    /// User name stamped into audit fields
    pub actor: Option<String>,
    pub remember_me: bool,
    /// Selected hotel/property; scopes every list request
    pub hotel_id: Option<String>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub preferences: UiPreferences,
}

impl SessionContext {
    pub fn load(store: &impl KeyValueStore) -> Self {
        let non_empty = |key: &str| store.get(key).filter(|v| !v.trim().is_empty());

        let mut preferences = UiPreferences::default();
        if let Some(theme) = store.get(THEME_KEY) {
            preferences.theme = Theme::parse(&theme);
        }
        if let Some(accent) = non_empty(ACCENT_KEY) {
            preferences.accent_color = accent;
        }
        if let Some(raw) = store.get(STATUS_COLORS_KEY) {
            match serde_json::from_str(&raw) {
                Ok(colors) => preferences.status_colors = colors,
                Err(e) => log::warn!("ignoring malformed status colors: {}", e),
            }
        }

        Self {
            actor: non_empty(ACTOR_KEY),
            remember_me: store.get(REMEMBER_ME_KEY).as_deref() == Some("true"),
            hotel_id: non_empty(HOTEL_KEY),
            access_token: non_empty(ACCESS_TOKEN_KEY),
            refresh_token: non_empty(REFRESH_TOKEN_KEY),
            preferences,
        }
    }

    /// Write the session to `store`; the user name is written only with "remember me"
    pub fn persist(&self, store: &mut impl KeyValueStore) {
        let remembered = self.actor.as_deref().filter(|_| self.remember_me);
        put(store, ACTOR_KEY, remembered);
        store.set(REMEMBER_ME_KEY, if self.remember_me { "true" } else { "false" });
        put(store, HOTEL_KEY, self.hotel_id.as_deref());
        put(store, ACCESS_TOKEN_KEY, self.access_token.as_deref());
        put(store, REFRESH_TOKEN_KEY, self.refresh_token.as_deref());
        store.set(THEME_KEY, self.preferences.theme.as_str());
        store.set(ACCENT_KEY, &self.preferences.accent_color);
        match serde_json::to_string(&self.preferences.status_colors) {
            Ok(json) => store.set(STATUS_COLORS_KEY, &json),
            Err(e) => log::warn!("status colors not saved: {}", e),
        }
    }

    /// Sign-out: clear tokens and hotel; the user name survives only with "remember me".
    /// UI preferences are kept.
    pub fn teardown(&mut self, store: &mut impl KeyValueStore) {
        store.remove(ACCESS_TOKEN_KEY);
        store.remove(REFRESH_TOKEN_KEY);
        store.remove(HOTEL_KEY);
        self.access_token = None;
        self.refresh_token = None;
        self.hotel_id = None;
        if !self.remember_me {
            store.remove(ACTOR_KEY);
            self.actor = None;
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

fn put(store: &mut impl KeyValueStore, key: &str, value: Option<&str>) {
    match value {
        Some(v) => store.set(key, v),
        None => store.remove(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in(remember_me: bool) -> SessionContext {
        SessionContext {
            actor: Some("reception".into()),
            remember_me,
            hotel_id: Some("H-01".into()),
            access_token: Some("abc".into()),
            refresh_token: Some("def".into()),
            preferences: UiPreferences {
                theme: Theme::Dark,
                accent_color: "#ff9800".into(),
                status_colors: BTreeMap::from([("CheckedIn".to_string(), "#4caf50".to_string())]),
            },
        }
    }

    #[test]
    fn empty_store_gives_anonymous_session() {
        let session = SessionContext::load(&MemoryStore::default());
        assert_eq!(session, SessionContext::default());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn persisted_session_loads_back() {
        let mut store = MemoryStore::default();
        let session = signed_in(true);
        session.persist(&mut store);
        assert_eq!(SessionContext::load(&store), session);
    }

    #[test]
    fn teardown_forgets_user_without_remember_me() {
        let mut store = MemoryStore::default();
        let mut session = signed_in(false);
        session.persist(&mut store);
        session.teardown(&mut store);

        let reloaded = SessionContext::load(&store);
        assert_eq!(reloaded.actor, None);
        assert_eq!(reloaded.hotel_id, None);
        assert_eq!(reloaded.access_token, None);
        assert_eq!(reloaded.preferences.theme, Theme::Dark);
        assert_eq!(reloaded, session);
    }

    #[test]
    fn user_name_is_not_stored_without_remember_me() {
        let mut store = MemoryStore::default();
        signed_in(true).persist(&mut store);
        signed_in(false).persist(&mut store);

        assert_eq!(store.get(ACTOR_KEY), None);
        let reloaded = SessionContext::load(&store);
        assert_eq!(reloaded.actor, None);
        assert_eq!(reloaded.hotel_id.as_deref(), Some("H-01"));
    }

    #[test]
    fn teardown_keeps_remembered_user() {
        let mut store = MemoryStore::default();
        let mut session = signed_in(true);
        session.persist(&mut store);
        session.teardown(&mut store);
        assert_eq!(SessionContext::load(&store).actor.as_deref(), Some("reception"));
    }

    #[test]
    fn malformed_status_colors_fall_back_to_defaults() {
        let mut store = MemoryStore::default();
        store.set(STATUS_COLORS_KEY, "{not json");
        store.set(HOTEL_KEY, "   ");
        let session = SessionContext::load(&store);
        assert!(session.preferences.status_colors.is_empty());
        assert_eq!(session.hotel_id, None);
    }
}
