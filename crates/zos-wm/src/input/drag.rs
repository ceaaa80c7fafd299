//! Title bar drag
//!
//! Moves are incremental: each event applies the delta since the previous
//! event to the window's *current* position. When the clamp pins a window
//! against an edge, the pointer can keep travelling and coming back does not
//! make the window jump, which an anchor-relative model would do.

use tracing::warn;

use super::PointerSession;
use crate::math::Vec2;
use crate::registry::WindowRegistry;
use crate::types::WindowId;
use crate::window::WindowRegion;

/// An in-progress window drag
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    session: PointerSession,
    /// Pointer position of the previous event
    last: Vec2,
}

impl DragSession {
    /// Start a drag from a pointer-down on `region` of window `id`.
    ///
    /// Returns `None` (and leaves the window alone) unless the pointer is on
    /// the title bar of an existing, non-maximized window. On success the
    /// window is focused.
    pub fn begin(
        registry: &mut WindowRegistry,
        id: WindowId,
        region: WindowRegion,
        pointer: Vec2,
    ) -> Option<Self> {
        if region != WindowRegion::TitleBar || !pointer.is_finite() {
            return None;
        }
        let window = registry.get(id)?;
        if !window.accepts_gestures() {
            return None;
        }

        let session = PointerSession::capture(window, pointer);
        registry.focus(id);
        Some(Self {
            session,
            last: pointer,
        })
    }

    /// Window being dragged
    pub fn window_id(&self) -> WindowId {
        self.session.window_id
    }

    /// Geometry captured at gesture start
    pub fn session(&self) -> &PointerSession {
        &self.session
    }

    /// Apply one pointer-move
    pub fn update(&mut self, registry: &mut WindowRegistry, pointer: Vec2) {
        if !pointer.is_finite() {
            warn!(id = self.session.window_id, "ignoring non-finite pointer position");
            return;
        }
        let Some(window) = registry.get(self.session.window_id) else {
            return;
        };

        let proposed = window.position + (pointer - self.last);
        registry.move_window(self.session.window_id, proposed.x, proposed.y);
        self.last = pointer;
    }
}
