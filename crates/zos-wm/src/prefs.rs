//! User preference store and shell state initialization
//!
//! The window layer itself never persists anything: layout is rebuilt from
//! scratch on every load. The shell around it does remember a handful of
//! user choices, which it reads through an injected [`PreferenceStore`]
//! rather than from ambient browser globals, so everything stays
//! constructible in tests.

use std::cell::RefCell;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::WmResult;

/// Keys under which shell preferences are stored
pub mod keys {
    /// `"true"` / `"false"`
    pub const SIDEBAR_PINNED: &str = "shell.sidebarPinned";
    /// JSON array of agent ids
    pub const PINNED_AGENTS: &str = "shell.pinnedAgents";
    /// JSON array of agent ids
    pub const ACTIVE_AGENTS: &str = "shell.activeAgents";
    /// Image URL or data URI
    pub const PROFILE_IMAGE: &str = "shell.profileImage";
    /// UI language code
    pub const LANGUAGE: &str = "shell.language";
}

/// String key-value store (browser `localStorage` or equivalent)
pub trait PreferenceStore {
    /// Read a value; `None` if the key was never written
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value
    fn set(&self, key: &str, value: &str) -> WmResult<()>;

    /// Delete a value
    fn remove(&self, key: &str) -> WmResult<()>;
}

/// In-memory store for tests and headless hosts
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryPreferences {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// True when nothing is stored
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> WmResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> WmResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Remembered shell choices
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellPreferences {
    /// Whether the agent side panel stays open
    pub sidebar_pinned: bool,
    /// Agents pinned to the side panel
    pub pinned_agents: Vec<String>,
    /// Agents currently enabled
    pub active_agents: Vec<String>,
    /// Profile image URL or data URI
    pub profile_image: Option<String>,
    /// UI language code
    pub language: String,
}

impl Default for ShellPreferences {
    fn default() -> Self {
        Self {
            sidebar_pinned: false,
            pinned_agents: Vec::new(),
            active_agents: Vec::new(),
            profile_image: None,
            language: "en".to_string(),
        }
    }
}

impl ShellPreferences {
    /// Build shell state from the store.
    ///
    /// Missing keys take their defaults; malformed values are logged and
    /// replaced by defaults rather than failing startup.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let defaults = Self::default();

        let sidebar_pinned = match store.get(keys::SIDEBAR_PINNED).as_deref() {
            None => defaults.sidebar_pinned,
            Some("true") => true,
            Some("false") => false,
            Some(other) => {
                warn!(key = keys::SIDEBAR_PINNED, value = other, "malformed preference");
                defaults.sidebar_pinned
            }
        };

        Self {
            sidebar_pinned,
            pinned_agents: load_list(store, keys::PINNED_AGENTS),
            active_agents: load_list(store, keys::ACTIVE_AGENTS),
            profile_image: store
                .get(keys::PROFILE_IMAGE)
                .filter(|value| !value.is_empty()),
            language: store
                .get(keys::LANGUAGE)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.language),
        }
    }

    /// Write every field back to the store
    pub fn save(&self, store: &dyn PreferenceStore) -> WmResult<()> {
        store.set(
            keys::SIDEBAR_PINNED,
            if self.sidebar_pinned { "true" } else { "false" },
        )?;
        store.set(keys::PINNED_AGENTS, &serde_json::to_string(&self.pinned_agents)?)?;
        store.set(keys::ACTIVE_AGENTS, &serde_json::to_string(&self.active_agents)?)?;
        match &self.profile_image {
            Some(image) => store.set(keys::PROFILE_IMAGE, image)?,
            None => store.remove(keys::PROFILE_IMAGE)?,
        }
        store.set(keys::LANGUAGE, &self.language)
    }

    /// Toggle the side panel pin and persist just that key
    pub fn set_sidebar_pinned(&mut self, store: &dyn PreferenceStore, pinned: bool) -> WmResult<()> {
        self.sidebar_pinned = pinned;
        store.set(keys::SIDEBAR_PINNED, if pinned { "true" } else { "false" })
    }

    /// Pin or unpin an agent and persist the list
    pub fn toggle_pinned_agent(&mut self, store: &dyn PreferenceStore, agent: &str) -> WmResult<()> {
        if let Some(idx) = self.pinned_agents.iter().position(|a| a == agent) {
            self.pinned_agents.remove(idx);
        } else {
            self.pinned_agents.push(agent.to_string());
        }
        store.set(keys::PINNED_AGENTS, &serde_json::to_string(&self.pinned_agents)?)
    }
}

fn load_list(store: &dyn PreferenceStore, key: &'static str) -> Vec<String> {
    let Some(raw) = store.get(key) else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(list) => list,
        Err(err) => {
            warn!(key, error = %err, "malformed preference list");
            Vec::new()
        }
    }
}
