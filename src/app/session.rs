//! Session Store
//!
//! Persistent key-value storage for the session: access token, refresh token
//! and the selected role, held in three independent string slots. Consumers
//! receive an injected `Arc<dyn SessionStore>` rather than touching storage
//! directly, so tests can substitute an in-memory store.
//!
//! The interface is synchronous and infallible, matching the fire-and-forget
//! semantics of origin-scoped key-value storage: a failed file write is
//! logged and the in-memory view stays authoritative for the process.
//! No token format validation, no expiry metadata, no encryption.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::shared::auth::{AuthRole, TokenPair};

const ACCESS_KEY: &str = "accessToken";
const REFRESH_KEY: &str = "refreshToken";
const ROLE_KEY: &str = "authRole";

/// Read/write/clear operations over the stored session
pub trait SessionStore: Send + Sync {
    /// Overwrite both token slots from a pair
    fn set_tokens(&self, tokens: &TokenPair);
    /// Current access token, if any
    fn access_token(&self) -> Option<String>;
    /// Current refresh token, if any
    fn refresh_token(&self) -> Option<String>;
    /// Persist the selected role
    fn set_role(&self, role: AuthRole);
    /// Stored role string, if any
    fn role(&self) -> Option<String>;
    /// Remove the token slots, leaving the role untouched
    fn clear_tokens(&self);
    /// Remove all three slots
    fn clear(&self);
}

/// In-memory session store for tests and demo flows
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slots: Mutex<BTreeMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn get(&self, key: &str) -> Option<String> {
        self.slots.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.slots.lock().unwrap().insert(key.to_string(), value);
    }
}

impl SessionStore for MemorySessionStore {
    fn set_tokens(&self, tokens: &TokenPair) {
        let mut slots = self.slots.lock().unwrap();
        slots.insert(ACCESS_KEY.to_string(), tokens.access_token.clone());
        slots.insert(REFRESH_KEY.to_string(), tokens.refresh_token.clone());
    }

    fn access_token(&self) -> Option<String> {
        self.get(ACCESS_KEY)
    }

    fn refresh_token(&self) -> Option<String> {
        self.get(REFRESH_KEY)
    }

    fn set_role(&self, role: AuthRole) {
        self.set(ROLE_KEY, role.as_str().to_string());
    }

    fn role(&self) -> Option<String> {
        self.get(ROLE_KEY)
    }

    fn clear_tokens(&self) {
        let mut slots = self.slots.lock().unwrap();
        slots.remove(ACCESS_KEY);
        slots.remove(REFRESH_KEY);
    }

    fn clear(&self) {
        self.slots.lock().unwrap().clear();
    }
}

/// File-backed session store
///
/// Keeps the slots in a JSON object persisted to a file in the platform
/// data directory. The file is rewritten wholesale on every mutation; from a
/// caller's perspective `clear()` removes all keys atomically.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    slots: Mutex<BTreeMap<String, String>>,
}

impl FileSessionStore {
    /// Open the store at the default platform location
    pub fn new() -> Self {
        Self::at_path(Self::default_path())
    }

    /// Open the store at an explicit path (used by tests)
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let slots = Self::load(&path);
        Self {
            path,
            slots: Mutex::new(slots),
        }
    }

    /// Session file path under the platform data directory
    fn default_path() -> PathBuf {
        let mut path = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
        path.push("workio");
        path.push("session.json");
        path
    }

    fn load(path: &Path) -> BTreeMap<String, String> {
        match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("session file unreadable, starting empty: {}", e);
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        }
    }

    fn persist(&self, slots: &BTreeMap<String, String>) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("could not create session directory: {}", e);
                return;
            }
        }
        match serde_json::to_string_pretty(slots) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&self.path, json) {
                    tracing::warn!("could not persist session: {}", e);
                }
            }
            Err(e) => tracing::warn!("could not serialize session: {}", e),
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        self.slots.lock().unwrap().get(key).cloned()
    }
}

impl Default for FileSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for FileSessionStore {
    fn set_tokens(&self, tokens: &TokenPair) {
        let mut slots = self.slots.lock().unwrap();
        slots.insert(ACCESS_KEY.to_string(), tokens.access_token.clone());
        slots.insert(REFRESH_KEY.to_string(), tokens.refresh_token.clone());
        self.persist(&slots);
    }

    fn access_token(&self) -> Option<String> {
        self.get(ACCESS_KEY)
    }

    fn refresh_token(&self) -> Option<String> {
        self.get(REFRESH_KEY)
    }

    fn set_role(&self, role: AuthRole) {
        let mut slots = self.slots.lock().unwrap();
        slots.insert(ROLE_KEY.to_string(), role.as_str().to_string());
        self.persist(&slots);
    }

    fn role(&self) -> Option<String> {
        self.get(ROLE_KEY)
    }

    fn clear_tokens(&self) {
        let mut slots = self.slots.lock().unwrap();
        slots.remove(ACCESS_KEY);
        slots.remove(REFRESH_KEY);
        self.persist(&slots);
    }

    fn clear(&self) {
        let mut slots = self.slots.lock().unwrap();
        slots.clear();
        self.persist(&slots);
    }
}
