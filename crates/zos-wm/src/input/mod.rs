//! Pointer gesture handling
//!
//! Drags and resizes are explicit state machines with `begin`, `update` and
//! `end` entry points. The host adapter translates its platform pointer
//! events into these calls; nothing in here attaches or detaches listeners.
//!
//! Only one gesture is active process-wide. A pointer-up anywhere ends it,
//! and because every update has already committed clamped geometry there is
//! nothing to revert.

mod drag;
mod resize;

pub use drag::DragSession;
pub use resize::{calculate_resize, ResizeSession};

use serde::Serialize;
use tracing::debug;

use crate::math::{Size, Vec2};
use crate::registry::WindowRegistry;
use crate::types::WindowId;
use crate::window::{ResizeDirection, WindowInstance, WindowRegion};

/// Result of feeding a pointer event to the window layer
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InputResult {
    /// Event was consumed by the window layer
    Handled,
    /// Event was not for us
    Unhandled,
    /// Event belongs to window content at window-local coordinates
    #[serde(rename_all = "camelCase")]
    Forward {
        window_id: WindowId,
        local_x: f32,
        local_y: f32,
    },
}

/// Pointer and window geometry captured when a gesture starts
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSession {
    pub window_id: WindowId,
    /// Pointer position at gesture start
    pub anchor: Vec2,
    pub start_position: Vec2,
    pub start_size: Size,
}

impl PointerSession {
    fn capture(window: &WindowInstance, pointer: Vec2) -> Self {
        Self {
            window_id: window.id,
            anchor: pointer,
            start_position: window.position,
            start_size: window.size,
        }
    }
}

/// Current gesture
#[derive(Clone, Debug, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(DragSession),
    Resizing(ResizeSession),
}

/// Arbitrates the single active gesture
#[derive(Debug, Default)]
pub struct InputRouter {
    state: GestureState,
}

impl InputRouter {
    /// Create an idle router
    pub fn new() -> Self {
        Self::default()
    }

    /// Current gesture state
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Whether a drag or resize is in progress
    pub fn is_active(&self) -> bool {
        !matches!(self.state, GestureState::Idle)
    }

    /// Whether a drag is in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging(_))
    }

    /// Whether a resize is in progress
    pub fn is_resizing(&self) -> bool {
        matches!(self.state, GestureState::Resizing(_))
    }

    /// Window targeted by the active gesture
    pub fn target(&self) -> Option<WindowId> {
        match &self.state {
            GestureState::Idle => None,
            GestureState::Dragging(drag) => Some(drag.window_id()),
            GestureState::Resizing(resize) => Some(resize.window_id()),
        }
    }

    /// Pointer-down on `region` of window `id`; starts a drag if it is the title bar
    pub fn begin_drag(
        &mut self,
        registry: &mut WindowRegistry,
        id: WindowId,
        region: WindowRegion,
        pointer: Vec2,
    ) -> InputResult {
        if self.is_active() {
            return InputResult::Unhandled;
        }
        match DragSession::begin(registry, id, region, pointer) {
            Some(session) => {
                debug!(id, "drag started");
                self.state = GestureState::Dragging(session);
                InputResult::Handled
            }
            None => InputResult::Unhandled,
        }
    }

    /// Pointer-down on a resize handle of window `id`
    pub fn begin_resize(
        &mut self,
        registry: &mut WindowRegistry,
        id: WindowId,
        direction: ResizeDirection,
        pointer: Vec2,
    ) -> InputResult {
        if self.is_active() {
            return InputResult::Unhandled;
        }
        match ResizeSession::begin(registry, id, direction, pointer) {
            Some(session) => {
                debug!(id, direction = direction.as_str(), "resize started");
                self.state = GestureState::Resizing(session);
                InputResult::Handled
            }
            None => InputResult::Unhandled,
        }
    }

    /// Pointer-move; applies to the active gesture in arrival order
    pub fn update(&mut self, registry: &mut WindowRegistry, pointer: Vec2) -> InputResult {
        match &mut self.state {
            GestureState::Idle => InputResult::Unhandled,
            GestureState::Dragging(drag) => {
                drag.update(registry, pointer);
                InputResult::Handled
            }
            GestureState::Resizing(resize) => {
                resize.update(registry, pointer);
                InputResult::Handled
            }
        }
    }

    /// Pointer-up anywhere in the document ends the gesture
    pub fn end(&mut self) -> InputResult {
        match std::mem::take(&mut self.state) {
            GestureState::Idle => InputResult::Unhandled,
            GestureState::Dragging(drag) => {
                debug!(id = drag.window_id(), "drag ended");
                InputResult::Handled
            }
            GestureState::Resizing(resize) => {
                debug!(id = resize.window_id(), "resize ended");
                InputResult::Handled
            }
        }
    }
}
