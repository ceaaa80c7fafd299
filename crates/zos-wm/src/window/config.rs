//! Window configuration for opening

use serde_json::Value;

use crate::math::{Size, Vec2};

use super::WindowKind;

/// Configuration for opening a window
#[derive(Clone, Debug, Default)]
pub struct WindowConfig {
    /// Kind of window to open
    pub kind: WindowKind,
    /// Title override (None = string table title, numbered for multi-instance kinds)
    pub title: Option<String>,
    /// Initial position (None = centered with cascade)
    pub position: Option<Vec2>,
    /// Initial size (None = fraction of the content area)
    pub size: Option<Size>,
    /// Opaque renderer data, handed back to the host untouched
    pub payload: Option<Value>,
}

impl WindowConfig {
    /// Config for `kind` with every placement decision left to the registry
    pub fn new(kind: WindowKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }
}
