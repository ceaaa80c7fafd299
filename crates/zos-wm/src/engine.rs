//! Shell engine coordinating the window layer
//!
//! The engine is what a host adapter talks to. It owns the registry and the
//! gesture router, shares the viewport with the registry, and turns raw
//! pointer coordinates into registry commands and gesture calls.

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::WmConfig;
use crate::error::WmResult;
use crate::input::{InputResult, InputRouter};
use crate::math::Vec2;
use crate::registry::{RenderContent, WindowRegistry};
use crate::shell::{self, taskbar, tray, TaskbarItem, TrayItem, WindowFrame};
use crate::types::WindowId;
use crate::viewport::{SharedViewport, Viewport};
use crate::window::{ResizeDirection, WindowKind, WindowRegion};

/// Window layer entry point for host adapters
pub struct ShellEngine {
    /// Window registry
    pub windows: WindowRegistry,
    /// Gesture router
    pub input: InputRouter,
    viewport: SharedViewport,
}

impl ShellEngine {
    /// Create an engine for a viewport with the stock configuration
    pub fn new(viewport: Viewport) -> Self {
        Self::with_config(viewport, WmConfig::default())
    }

    /// Create an engine with explicit tunables
    pub fn with_config(viewport: Viewport, config: WmConfig) -> Self {
        let viewport = SharedViewport::new(viewport);
        Self {
            windows: WindowRegistry::with_config(viewport.clone(), config),
            input: InputRouter::new(),
            viewport,
        }
    }

    /// Host viewport changed (browser resize)
    pub fn set_viewport(&mut self, viewport: Viewport) {
        debug!(
            width = viewport.width,
            height = viewport.height,
            header = viewport.header_height,
            "viewport updated"
        );
        self.viewport.set(viewport);
    }

    /// Current viewport
    pub fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    // =========================================================================
    // Operations surface
    // =========================================================================

    /// Open a window of `kind`
    pub fn open(&mut self, kind: WindowKind, payload: Option<Value>) -> WindowId {
        self.windows.open(kind, payload)
    }

    /// Open a window from the host's string kind id
    pub fn open_by_id(&mut self, kind: &str, payload: Option<Value>) -> WmResult<WindowId> {
        let kind = kind.parse::<WindowKind>().map_err(|err| {
            warn!(kind, "host asked for an unknown window kind");
            err
        })?;
        Ok(self.windows.open(kind, payload))
    }

    /// Close a window
    pub fn close_window(&mut self, id: WindowId) {
        self.windows.close(id);
    }

    /// Minimize a window
    pub fn minimize_window(&mut self, id: WindowId) {
        self.windows.minimize(id);
    }

    /// Toggle maximize on a window
    pub fn maximize_window(&mut self, id: WindowId) {
        self.windows.maximize(id);
    }

    /// Focus a window
    pub fn focus_window(&mut self, id: WindowId) {
        self.windows.focus(id);
    }

    /// Move a window
    pub fn move_window(&mut self, id: WindowId, x: f32, y: f32) {
        self.windows.move_window(id, x, y);
    }

    /// Resize a window
    pub fn resize_window(&mut self, id: WindowId, width: f32, height: f32) {
        self.windows.resize(id, width, height);
    }

    // =========================================================================
    // Direct gesture starts (host chrome bypasses hit testing)
    // =========================================================================

    /// Start a drag from the host-rendered title bar of `id`
    pub fn start_move_drag(&mut self, id: WindowId, x: f32, y: f32) -> InputResult {
        self.input
            .begin_drag(&mut self.windows, id, WindowRegion::TitleBar, Vec2::new(x, y))
    }

    /// Start a resize from a host-rendered handle (`"n"`, `"se"`, ...)
    pub fn start_resize_drag(&mut self, id: WindowId, direction: &str, x: f32, y: f32) -> InputResult {
        let direction = match direction.parse::<ResizeDirection>() {
            Ok(direction) => direction,
            Err(err) => {
                warn!(id, %err, "ignoring resize start");
                return InputResult::Unhandled;
            }
        };
        self.input
            .begin_resize(&mut self.windows, id, direction, Vec2::new(x, y))
    }

    // =========================================================================
    // Pointer events
    // =========================================================================

    /// Pointer-down at viewport coordinates
    pub fn handle_pointer_down(&mut self, x: f32, y: f32) -> InputResult {
        if self.input.is_active() {
            return InputResult::Unhandled;
        }
        let point = Vec2::new(x, y);
        let Some((id, region)) = self.windows.region_at(point) else {
            return InputResult::Unhandled;
        };

        match region {
            WindowRegion::CloseButton => {
                self.windows.close(id);
                InputResult::Handled
            }
            WindowRegion::MinimizeButton => {
                self.windows.minimize(id);
                InputResult::Handled
            }
            WindowRegion::MaximizeButton => {
                self.windows.maximize(id);
                InputResult::Handled
            }
            WindowRegion::TitleBar => {
                // Maximized windows refuse the drag but still come to the front
                if self.input.begin_drag(&mut self.windows, id, region, point)
                    == InputResult::Unhandled
                {
                    self.windows.focus(id);
                }
                InputResult::Handled
            }
            WindowRegion::Resize(direction) => {
                self.input
                    .begin_resize(&mut self.windows, id, direction, point);
                InputResult::Handled
            }
            WindowRegion::Content => {
                self.windows.focus(id);
                let viewport = self.viewport.get();
                match self.windows.get(id) {
                    Some(window) => {
                        let local = point - window.frame(&viewport).position();
                        InputResult::Forward {
                            window_id: id,
                            local_x: local.x,
                            local_y: local.y,
                        }
                    }
                    None => InputResult::Unhandled,
                }
            }
        }
    }

    /// Pointer-move at viewport coordinates
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        self.input.update(&mut self.windows, Vec2::new(x, y))
    }

    /// Pointer-up anywhere in the document
    pub fn handle_pointer_up(&mut self) -> InputResult {
        self.input.end()
    }

    // =========================================================================
    // Shell views
    // =========================================================================

    /// Tray affordances for minimized windows
    pub fn tray_items(&self) -> Vec<TrayItem> {
        tray::items(&self.windows)
    }

    /// Taskbar affordances for all windows
    pub fn taskbar_items(&self) -> Vec<TaskbarItem> {
        taskbar::items(&self.windows)
    }

    /// Tray click
    pub fn tray_click(&mut self, id: WindowId) {
        tray::click(&mut self.windows, id);
    }

    /// Taskbar click
    pub fn taskbar_click(&mut self, id: WindowId) {
        taskbar::click(&mut self.windows, id);
    }

    /// Visible windows back to front
    pub fn frames(&self) -> Vec<WindowFrame> {
        shell::render_frames(&self.windows)
    }

    /// Visible windows with rendered content
    pub fn render<R: RenderContent>(&self, renderer: &R) -> Vec<(WindowFrame, R::Output)> {
        shell::render_with(&self.windows, renderer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Size, FRAME_STYLE};
    use crate::window::WindowConfig;

    fn engine_with_window() -> (ShellEngine, WindowId) {
        let mut engine = ShellEngine::new(Viewport::new(1200.0, 800.0, 64.0));
        let id = engine.windows.open_with(WindowConfig {
            position: Some(Vec2::new(100.0, 150.0)),
            size: Some(Size::new(480.0, 350.0)),
            ..WindowConfig::new(WindowKind::Chat)
        });
        (engine, id)
    }

    #[test]
    fn test_title_bar_drag_end_to_end() {
        let (mut engine, id) = engine_with_window();

        assert_eq!(engine.handle_pointer_down(200.0, 160.0), InputResult::Handled);
        assert!(engine.input.is_dragging());
        engine.handle_pointer_move(250.0, 140.0);
        engine.handle_pointer_up();

        assert!(!engine.input.is_active());
        assert_eq!(engine.windows.get(id).unwrap().position, Vec2::new(150.0, 130.0));
    }

    #[test]
    fn test_pointer_up_outside_window_ends_drag() {
        let (mut engine, id) = engine_with_window();
        engine.handle_pointer_down(200.0, 160.0);
        engine.handle_pointer_move(5000.0, 5000.0);
        assert_eq!(engine.handle_pointer_up(), InputResult::Handled);

        // Later moves no longer affect the window
        let pos = engine.windows.get(id).unwrap().position;
        assert_eq!(engine.handle_pointer_move(0.0, 0.0), InputResult::Unhandled);
        assert_eq!(engine.windows.get(id).unwrap().position, pos);
    }

    #[test]
    fn test_content_click_focuses_and_forwards() {
        let (mut engine, id) = engine_with_window();
        let other = engine.open(WindowKind::Settings, None);
        engine.move_window(other, 900.0, 600.0);
        assert_eq!(engine.windows.focused(), Some(other));

        let result = engine.handle_pointer_down(300.0, 300.0);
        assert_eq!(
            result,
            InputResult::Forward {
                window_id: id,
                local_x: 200.0,
                local_y: 150.0,
            }
        );
        assert_eq!(engine.windows.focused(), Some(id));
        assert!(!engine.input.is_active());
    }

    #[test]
    fn test_resize_handle_end_to_end() {
        let (mut engine, id) = engine_with_window();
        // South-east corner of a 480x350 window at (100, 150)
        engine.handle_pointer_down(578.0, 498.0);
        assert!(engine.input.is_resizing());
        engine.handle_pointer_move(628.0, 548.0);
        engine.handle_pointer_up();
        assert_eq!(engine.windows.get(id).unwrap().size, Size::new(530.0, 400.0));
    }

    #[test]
    fn test_buttons_run_commands() {
        let (mut engine, id) = engine_with_window();
        let button_y = 150.0 + FRAME_STYLE.title_bar_height / 2.0;
        let close_x = 100.0 + 480.0 - FRAME_STYLE.button_margin - FRAME_STYLE.button_size / 2.0;
        let maximize_x = close_x - FRAME_STYLE.button_size - FRAME_STYLE.button_spacing;
        let minimize_x = maximize_x - FRAME_STYLE.button_size - FRAME_STYLE.button_spacing;

        engine.handle_pointer_down(minimize_x, button_y);
        assert!(engine.windows.get(id).unwrap().is_minimized);
        assert_eq!(engine.tray_items().len(), 1);

        engine.tray_click(id);
        engine.handle_pointer_down(maximize_x, button_y);
        assert!(engine.windows.get(id).unwrap().is_maximized);

        engine.maximize_window(id);
        engine.handle_pointer_down(close_x, button_y);
        assert!(engine.windows.get(id).is_none());
    }

    #[test]
    fn test_maximized_title_click_focuses_without_drag() {
        let (mut engine, id) = engine_with_window();
        let other = engine.open(WindowKind::Settings, None);
        engine.maximize_window(id);
        engine.minimize_window(other);
        engine.focus_window(other);
        engine.minimize_window(other);

        assert_eq!(engine.handle_pointer_down(300.0, 70.0), InputResult::Handled);
        assert!(!engine.input.is_active());
        assert_eq!(engine.windows.get(id).unwrap().z_index, engine.windows.top_z());
    }

    #[test]
    fn test_direct_resize_start() {
        let (mut engine, id) = engine_with_window();
        assert_eq!(
            engine.start_resize_drag(id, "diagonal", 0.0, 0.0),
            InputResult::Unhandled
        );
        assert_eq!(
            engine.start_resize_drag(id, "e", 580.0, 300.0),
            InputResult::Handled
        );
        engine.handle_pointer_move(620.0, 300.0);
        engine.handle_pointer_up();
        assert_eq!(engine.windows.get(id).unwrap().size.width, 520.0);
    }

    #[test]
    fn test_direct_move_start() {
        let (mut engine, id) = engine_with_window();
        assert_eq!(engine.start_move_drag(id, 150.0, 160.0), InputResult::Handled);
        engine.handle_pointer_move(160.0, 170.0);
        engine.handle_pointer_up();
        assert_eq!(engine.windows.get(id).unwrap().position, Vec2::new(110.0, 160.0));
    }

    #[test]
    fn test_open_by_id() {
        let mut engine = ShellEngine::new(Viewport::new(1200.0, 800.0, 64.0));
        let id = engine.open_by_id("directory", None).unwrap();
        assert_eq!(engine.windows.get(id).unwrap().kind, WindowKind::Directory);
        assert!(engine.open_by_id("terminal", None).is_err());
    }

    #[test]
    fn test_set_viewport_reaches_registry() {
        let (mut engine, id) = engine_with_window();
        engine.set_viewport(Viewport::new(640.0, 480.0, 0.0));
        engine.move_window(id, 5000.0, 5000.0);
        assert_eq!(engine.windows.get(id).unwrap().position, Vec2::new(540.0, 380.0));
        assert_eq!(engine.viewport(), Viewport::new(640.0, 480.0, 0.0));
    }

    #[test]
    fn test_pointer_down_on_empty_desktop() {
        let (mut engine, _) = engine_with_window();
        assert_eq!(engine.handle_pointer_down(1100.0, 750.0), InputResult::Unhandled);
    }
}
