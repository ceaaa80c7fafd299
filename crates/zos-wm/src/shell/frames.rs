//! Render list for the host UI

use serde::Serialize;

use crate::math::Rect;
use crate::registry::{RenderContent, WindowRegistry};
use crate::types::{WindowId, ZIndex};
use crate::window::WindowKind;

/// A visible window with its resolved on-screen frame
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowFrame {
    pub id: WindowId,
    pub kind: WindowKind,
    pub title: String,
    /// Where to draw the window (content area when maximized)
    pub rect: Rect,
    pub z_index: ZIndex,
    pub focused: bool,
    pub maximized: bool,
}

/// Visible windows back to front
pub fn render_frames(registry: &WindowRegistry) -> Vec<WindowFrame> {
    let viewport = registry.viewport();
    let focused = registry.focused();

    registry
        .windows_by_z()
        .into_iter()
        .filter(|w| w.is_visible())
        .map(|w| WindowFrame {
            id: w.id,
            kind: w.kind,
            title: w.title.clone(),
            rect: w.frame(&viewport),
            z_index: w.z_index,
            focused: Some(w.id) == focused,
            maximized: w.is_maximized,
        })
        .collect()
}

/// Visible windows back to front, each paired with its rendered content
pub fn render_with<R: RenderContent>(
    registry: &WindowRegistry,
    renderer: &R,
) -> Vec<(WindowFrame, R::Output)> {
    render_frames(registry)
        .into_iter()
        .filter_map(|frame| {
            let window = registry.get(frame.id)?;
            let content = renderer.render(window.kind, window.id, &window.payload);
            Some((frame, content))
        })
        .collect()
}
