//! Frame resize
//!
//! Unlike drags, resizes are anchor-relative: every event recomputes the
//! geometry from the pointer's total travel since gesture start, since
//! corner handles change two dimensions at once and compounding per-event
//! deltas would drift.

use tracing::warn;

use super::PointerSession;
use crate::math::{Size, Vec2};
use crate::registry::WindowRegistry;
use crate::types::WindowId;
use crate::window::ResizeDirection;

/// An in-progress window resize
#[derive(Clone, Debug, PartialEq)]
pub struct ResizeSession {
    session: PointerSession,
    direction: ResizeDirection,
}

impl ResizeSession {
    /// Start resizing window `id` from the `direction` handle.
    ///
    /// Returns `None` for unknown or maximized windows. On success the
    /// window is focused.
    pub fn begin(
        registry: &mut WindowRegistry,
        id: WindowId,
        direction: ResizeDirection,
        pointer: Vec2,
    ) -> Option<Self> {
        if !pointer.is_finite() {
            return None;
        }
        let window = registry.get(id)?;
        if !window.accepts_gestures() {
            return None;
        }

        let session = PointerSession::capture(window, pointer);
        registry.focus(id);
        Some(Self { session, direction })
    }

    /// Window being resized
    pub fn window_id(&self) -> WindowId {
        self.session.window_id
    }

    /// Handle the gesture started from
    pub fn direction(&self) -> ResizeDirection {
        self.direction
    }

    /// Apply one pointer-move
    pub fn update(&mut self, registry: &mut WindowRegistry, pointer: Vec2) {
        if !pointer.is_finite() {
            warn!(id = self.session.window_id, "ignoring non-finite pointer position");
            return;
        }
        let id = self.session.window_id;
        let Some(window) = registry.get(id) else {
            return;
        };

        let current = (window.position, window.size);
        let viewport = registry.viewport();
        let limits = registry.config().limits;
        let proposed = calculate_resize(
            self.direction,
            &self.session,
            window.position,
            window.size,
            pointer - self.session.anchor,
            limits.min_size,
        );

        if self.direction.moves_origin() {
            let clamped = limits.clamp_position(proposed.0, proposed.1, &viewport);
            let (position, size) = anchor_to_clamped_origin(
                self.direction,
                &self.session,
                current,
                proposed,
                clamped,
                limits.min_size,
            );
            registry.set_geometry(id, position, size);
        } else {
            registry.resize(id, proposed.1.width, proposed.1.height);
        }
    }
}

/// Compute the geometry for a resize with total pointer travel `delta`.
///
/// East and south handles grow from the start size and floor at
/// `min_size`. West and north handles also move the origin; when the
/// candidate size would fall below the floor the current width/x (or
/// height/y) are kept as-is, so the window does not jump when shrunk past
/// the floor from the left or top.
pub fn calculate_resize(
    direction: ResizeDirection,
    start: &PointerSession,
    current_position: Vec2,
    current_size: Size,
    delta: Vec2,
    min_size: Size,
) -> (Vec2, Size) {
    let mut position = current_position;
    let mut size = current_size;

    if direction.e {
        size.width = (start.start_size.width + delta.x).max(min_size.width);
    }
    if direction.s {
        size.height = (start.start_size.height + delta.y).max(min_size.height);
    }
    if direction.w {
        let candidate = start.start_size.width - delta.x;
        if candidate >= min_size.width {
            size.width = candidate;
            position.x = start.start_position.x + delta.x;
        }
    }
    if direction.n {
        let candidate = start.start_size.height - delta.y;
        if candidate >= min_size.height {
            size.height = candidate;
            position.y = start.start_position.y + delta.y;
        }
    }

    (position, size)
}

/// Refit a west/north resize whose origin was clamped.
///
/// The opposite edge stays where it was at gesture start, so the dimension
/// is recomputed from the clamped origin. If that falls below the floor the
/// current origin and dimension are kept.
fn anchor_to_clamped_origin(
    direction: ResizeDirection,
    start: &PointerSession,
    (current_position, current_size): (Vec2, Size),
    (mut position, mut size): (Vec2, Size),
    clamped: Vec2,
    min_size: Size,
) -> (Vec2, Size) {
    if direction.w && clamped.x != position.x {
        let width = start.start_position.x + start.start_size.width - clamped.x;
        if width >= min_size.width {
            position.x = clamped.x;
            size.width = width;
        } else {
            position.x = current_position.x;
            size.width = current_size.width;
        }
    }
    if direction.n && clamped.y != position.y {
        let height = start.start_position.y + start.start_size.height - clamped.y;
        if height >= min_size.height {
            position.y = clamped.y;
            size.height = height;
        } else {
            position.y = current_position.y;
            size.height = current_size.height;
        }
    }
    (position, size)
}
