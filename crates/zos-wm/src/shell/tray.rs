//! Minimized-window tray

use serde::Serialize;

use crate::registry::WindowRegistry;
use crate::types::WindowId;
use crate::window::WindowKind;

/// One tray affordance
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrayItem {
    pub id: WindowId,
    pub kind: WindowKind,
    pub title: String,
    /// Ordinal shown on the second and later minimized windows of a
    /// multi-instance kind, so otherwise identical icons can be told apart
    pub badge: Option<u32>,
}

/// Affordances for every minimized window, in open order
pub fn items(registry: &WindowRegistry) -> Vec<TrayItem> {
    let mut seen_per_kind: Vec<(WindowKind, u32)> = Vec::new();

    registry
        .windows()
        .filter(|w| w.is_minimized)
        .map(|w| {
            let badge = if w.kind.is_multi_instance() {
                let ordinal = match seen_per_kind.iter_mut().find(|(kind, _)| *kind == w.kind) {
                    Some((_, count)) => {
                        *count += 1;
                        *count
                    }
                    None => {
                        seen_per_kind.push((w.kind, 1));
                        1
                    }
                };
                (ordinal > 1).then_some(ordinal)
            } else {
                None
            };

            TrayItem {
                id: w.id,
                kind: w.kind,
                title: w.title.clone(),
                badge,
            }
        })
        .collect()
}

/// Tray click: restore the window and bring it to the top
pub fn click(registry: &mut WindowRegistry, id: WindowId) {
    registry.focus(id);
}
