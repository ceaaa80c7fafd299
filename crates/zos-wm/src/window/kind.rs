//! Window kinds

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WmError;

/// What a window shows; selects the renderer and the instance policy
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum WindowKind {
    /// Conversation with an agent. Any number may be open at once.
    #[default]
    Chat,
    /// Settings form (singleton)
    Settings,
    /// Account form (singleton)
    Account,
    /// Agent directory (singleton)
    Directory,
}

impl WindowKind {
    /// Every kind, in launcher order
    pub const ALL: [WindowKind; 4] = [
        WindowKind::Chat,
        WindowKind::Settings,
        WindowKind::Account,
        WindowKind::Directory,
    ];

    /// Stable string id used by the host
    pub fn id(&self) -> &'static str {
        match self {
            WindowKind::Chat => "chat",
            WindowKind::Settings => "settings",
            WindowKind::Account => "account",
            WindowKind::Directory => "directory",
        }
    }

    /// Whether several instances of this kind may be open simultaneously
    pub fn is_multi_instance(&self) -> bool {
        matches!(self, WindowKind::Chat)
    }

    /// String table key for the window title
    pub fn title_key(&self) -> &'static str {
        match self {
            WindowKind::Chat => "window.title.chat",
            WindowKind::Settings => "window.title.settings",
            WindowKind::Account => "window.title.account",
            WindowKind::Directory => "window.title.directory",
        }
    }

    /// Title used when the string table has no entry
    pub fn default_title(&self) -> &'static str {
        match self {
            WindowKind::Chat => "Conversation",
            WindowKind::Settings => "Settings",
            WindowKind::Account => "Account",
            WindowKind::Directory => "Directory",
        }
    }
}

impl FromStr for WindowKind {
    type Err = WmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chat" | "conversation" => Ok(WindowKind::Chat),
            "settings" => Ok(WindowKind::Settings),
            "account" => Ok(WindowKind::Account),
            "directory" => Ok(WindowKind::Directory),
            _ => Err(WmError::UnknownWindowKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for WindowKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
