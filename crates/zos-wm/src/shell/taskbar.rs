//! Taskbar over all open windows

use serde::Serialize;

use crate::registry::WindowRegistry;
use crate::types::WindowId;
use crate::window::WindowKind;

/// One taskbar affordance
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskbarItem {
    pub id: WindowId,
    pub kind: WindowKind,
    pub title: String,
    pub is_minimized: bool,
    /// Window holding the highest stacking index among those not minimized.
    ///
    /// A minimized window keeps its index, so the highest index overall may
    /// belong to a window sitting in the tray; that window is never marked.
    pub is_active: bool,
}

/// Affordances for every open window, minimized or not, in open order
pub fn items(registry: &WindowRegistry) -> Vec<TaskbarItem> {
    let active = registry.focused();
    registry
        .windows()
        .map(|w| TaskbarItem {
            id: w.id,
            kind: w.kind,
            title: w.title.clone(),
            is_minimized: w.is_minimized,
            is_active: Some(w.id) == active,
        })
        .collect()
}

/// Taskbar click: focus the window whatever its state
pub fn click(registry: &mut WindowRegistry, id: WindowId) {
    registry.focus(id);
}
