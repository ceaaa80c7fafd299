//! Window record and frame geometry

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ResizeDirection, WindowId, WindowKind, WindowRegion, ZIndex};
use crate::math::{Rect, Size, Vec2, FRAME_STYLE};
use crate::viewport::Viewport;

/// One open window.
///
/// Instances are owned by the `WindowRegistry`, which hands out shared
/// references only; every mutation goes through a registry command.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowInstance {
    /// Unique identifier, stable for the window's lifetime
    pub id: WindowId,
    /// Selects the renderer and the instance policy
    pub kind: WindowKind,
    /// Display title
    pub title: String,
    /// Top-left corner in viewport pixels (ignored while maximized)
    pub position: Vec2,
    /// Outer size in viewport pixels (ignored while maximized)
    pub size: Size,
    /// Hidden from the desktop, shown only in the tray
    pub is_minimized: bool,
    /// Filling the content area below the header
    pub is_maximized: bool,
    /// Stacking index (higher = on top)
    pub z_index: ZIndex,
    /// Renderer data, never interpreted here
    pub payload: Value,
}

impl WindowInstance {
    /// Stored geometry as a rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Rectangle the window actually occupies on screen.
    ///
    /// Maximized windows cover the content area and their stored geometry
    /// is left untouched for when they are restored.
    pub fn frame(&self, viewport: &Viewport) -> Rect {
        if self.is_maximized {
            viewport.content_area()
        } else {
            self.rect()
        }
    }

    /// Whether the window is drawn on the desktop (minimized ones live in the tray)
    #[inline]
    pub fn is_visible(&self) -> bool {
        !self.is_minimized
    }

    /// Whether drag and resize gestures may start on this window
    #[inline]
    pub fn accepts_gestures(&self) -> bool {
        !self.is_maximized && !self.is_minimized
    }

    /// Find which frame region contains `point`, or `None` if it misses the window
    pub fn region_at(&self, point: Vec2, viewport: &Viewport) -> Option<WindowRegion> {
        let frame = self.frame(viewport);
        if !frame.contains(point) {
            return None;
        }

        if let Some(region) = hit_test_buttons(&frame, point) {
            return Some(region);
        }

        // Maximized windows expose no resize handles
        if !self.is_maximized {
            if let Some(dir) = hit_test_resize_corners(&frame, point) {
                return Some(WindowRegion::Resize(dir));
            }
        }

        if title_bar_rect(&frame).contains(point) {
            return Some(WindowRegion::TitleBar);
        }

        if !self.is_maximized {
            if let Some(dir) = hit_test_resize_edges(&frame, point) {
                return Some(WindowRegion::Resize(dir));
            }
        }

        Some(WindowRegion::Content)
    }
}

/// Title bar strip along the top of `frame`
pub(crate) fn title_bar_rect(frame: &Rect) -> Rect {
    Rect::new(frame.x, frame.y, frame.width, FRAME_STYLE.title_bar_height)
}

/// Title bar button `slot` counted from the right edge (0 = close)
fn button_rect(frame: &Rect, slot: f32) -> Rect {
    let x = frame.right()
        - FRAME_STYLE.button_margin
        - FRAME_STYLE.button_size * (slot + 1.0)
        - FRAME_STYLE.button_spacing * slot;
    let y = frame.y + (FRAME_STYLE.title_bar_height - FRAME_STYLE.button_size) / 2.0;
    Rect::new(x, y, FRAME_STYLE.button_size, FRAME_STYLE.button_size)
}

fn hit_test_buttons(frame: &Rect, point: Vec2) -> Option<WindowRegion> {
    if button_rect(frame, 0.0).contains(point) {
        return Some(WindowRegion::CloseButton);
    }
    if button_rect(frame, 1.0).contains(point) {
        return Some(WindowRegion::MaximizeButton);
    }
    if button_rect(frame, 2.0).contains(point) {
        return Some(WindowRegion::MinimizeButton);
    }
    None
}

fn hit_test_resize_corners(frame: &Rect, point: Vec2) -> Option<ResizeDirection> {
    let handle = FRAME_STYLE.corner_handle_size;
    let left = point.x < frame.x + handle;
    let right = point.x >= frame.right() - handle;
    let top = point.y < frame.y + handle;
    let bottom = point.y >= frame.bottom() - handle;

    match (top, bottom, left, right) {
        (true, _, true, _) => Some(ResizeDirection::NW),
        (true, _, _, true) => Some(ResizeDirection::NE),
        (_, true, true, _) => Some(ResizeDirection::SW),
        (_, true, _, true) => Some(ResizeDirection::SE),
        _ => None,
    }
}

fn hit_test_resize_edges(frame: &Rect, point: Vec2) -> Option<ResizeDirection> {
    let handle = FRAME_STYLE.resize_handle_size;
    if point.y < frame.y + handle {
        return Some(ResizeDirection::N);
    }
    if point.y >= frame.bottom() - handle {
        return Some(ResizeDirection::S);
    }
    if point.x < frame.x + handle {
        return Some(ResizeDirection::W);
    }
    if point.x >= frame.right() - handle {
        return Some(ResizeDirection::E);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport::new(1200.0, 800.0, 64.0);

    fn create_test_window() -> WindowInstance {
        WindowInstance {
            id: 1,
            kind: WindowKind::Chat,
            title: "Conversation 1".to_string(),
            position: Vec2::new(100.0, 100.0),
            size: Size::new(600.0, 400.0),
            is_minimized: false,
            is_maximized: false,
            z_index: 1,
            payload: Value::Null,
        }
    }

    #[test]
    fn test_frame_uses_stored_geometry() {
        let w = create_test_window();
        assert_eq!(w.frame(&VIEWPORT), Rect::new(100.0, 100.0, 600.0, 400.0));
    }

    #[test]
    fn test_frame_maximized_fills_content_area() {
        let mut w = create_test_window();
        w.is_maximized = true;
        assert_eq!(w.frame(&VIEWPORT), Rect::new(0.0, 64.0, 1200.0, 736.0));
        // Stored geometry is untouched
        assert_eq!(w.rect(), Rect::new(100.0, 100.0, 600.0, 400.0));
    }

    #[test]
    fn test_region_title_and_content() {
        let w = create_test_window();
        assert_eq!(
            w.region_at(Vec2::new(300.0, 115.0), &VIEWPORT),
            Some(WindowRegion::TitleBar)
        );
        assert_eq!(
            w.region_at(Vec2::new(400.0, 300.0), &VIEWPORT),
            Some(WindowRegion::Content)
        );
        assert_eq!(w.region_at(Vec2::new(50.0, 50.0), &VIEWPORT), None);
    }

    #[test]
    fn test_region_buttons() {
        let w = create_test_window();
        // Close button sits at the right end of the title bar
        let close = button_rect(&w.rect(), 0.0).center();
        assert_eq!(w.region_at(close, &VIEWPORT), Some(WindowRegion::CloseButton));

        let maximize = button_rect(&w.rect(), 1.0).center();
        assert_eq!(
            w.region_at(maximize, &VIEWPORT),
            Some(WindowRegion::MaximizeButton)
        );

        let minimize = button_rect(&w.rect(), 2.0).center();
        assert_eq!(
            w.region_at(minimize, &VIEWPORT),
            Some(WindowRegion::MinimizeButton)
        );
    }

    #[test]
    fn test_region_resize_handles() {
        let w = create_test_window();
        assert_eq!(
            w.region_at(Vec2::new(101.0, 101.0), &VIEWPORT),
            Some(WindowRegion::Resize(ResizeDirection::NW))
        );
        assert_eq!(
            w.region_at(Vec2::new(699.0, 499.0), &VIEWPORT),
            Some(WindowRegion::Resize(ResizeDirection::SE))
        );
        assert_eq!(
            w.region_at(Vec2::new(400.0, 498.0), &VIEWPORT),
            Some(WindowRegion::Resize(ResizeDirection::S))
        );
        assert_eq!(
            w.region_at(Vec2::new(101.0, 300.0), &VIEWPORT),
            Some(WindowRegion::Resize(ResizeDirection::W))
        );
        assert_eq!(
            w.region_at(Vec2::new(698.0, 300.0), &VIEWPORT),
            Some(WindowRegion::Resize(ResizeDirection::E))
        );
    }

    #[test]
    fn test_maximized_has_no_resize_handles() {
        let mut w = create_test_window();
        w.is_maximized = true;
        assert_eq!(
            w.region_at(Vec2::new(1.0, 400.0), &VIEWPORT),
            Some(WindowRegion::Content)
        );
        assert_eq!(
            w.region_at(Vec2::new(300.0, 70.0), &VIEWPORT),
            Some(WindowRegion::TitleBar)
        );
    }

    #[test]
    fn test_gesture_acceptance() {
        let mut w = create_test_window();
        assert!(w.accepts_gestures());
        w.is_maximized = true;
        assert!(!w.accepts_gestures());
    }

    #[test]
    fn test_serializes_camel_case() {
        let w = create_test_window();
        let json = serde_json::to_value(&w).unwrap();
        assert_eq!(json["isMinimized"], Value::Bool(false));
        assert_eq!(json["zIndex"], Value::from(1));
        assert_eq!(json["kind"], Value::from("chat"));
    }
}
