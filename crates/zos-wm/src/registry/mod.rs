//! Window registry: lifecycle, focus and geometry commits
//!
//! The registry owns every open [`WindowInstance`]. Hosts and the gesture
//! controllers drive it through a small command surface:
//! `open`, `close`, `minimize`, `maximize`, `focus`, `move_window`, `resize`.
//!
//! None of these commands fail. A command naming an unknown id is ignored,
//! because the UI can race a close against an in-flight drag event, and
//! geometry is always clamped rather than rejected.

mod host;

pub use host::{DefaultStrings, RenderContent, StringTable, WindowObserver};

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, trace};

use crate::config::WmConfig;
use crate::math::{Size, Vec2};
use crate::types::{WindowId, ZIndex};
use crate::viewport::{Viewport, ViewportProvider};
use crate::window::{WindowConfig, WindowInstance, WindowKind, WindowRegion};
use crate::zorder::{self, ZOrder};

/// Owner of all open windows
pub struct WindowRegistry {
    /// Open windows keyed by id; ids grow monotonically so iteration is open order
    windows: BTreeMap<WindowId, WindowInstance>,
    /// Stacking counter
    z_order: ZOrder,
    /// Next window id
    next_id: WindowId,
    /// Title ordinals handed out per multi-instance kind
    title_ordinals: BTreeMap<WindowKind, u32>,
    viewport: Box<dyn ViewportProvider>,
    config: WmConfig,
    strings: Box<dyn StringTable>,
    observer: Option<Box<dyn WindowObserver>>,
}

impl WindowRegistry {
    /// Create a registry with the stock configuration
    pub fn new(viewport: impl ViewportProvider + 'static) -> Self {
        Self::with_config(viewport, WmConfig::default())
    }

    /// Create a registry with explicit tunables
    pub fn with_config(viewport: impl ViewportProvider + 'static, config: WmConfig) -> Self {
        Self {
            windows: BTreeMap::new(),
            z_order: ZOrder::new(),
            next_id: 1,
            title_ordinals: BTreeMap::new(),
            viewport: Box::new(viewport),
            config,
            strings: Box::new(DefaultStrings),
            observer: None,
        }
    }

    /// Replace the translation lookup used for default titles
    pub fn set_string_table(&mut self, strings: impl StringTable + 'static) {
        self.strings = Box::new(strings);
    }

    /// Register the observer told about new multi-instance windows
    pub fn set_observer(&mut self, observer: impl WindowObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Register a closure as the window-opened observer
    pub fn on_window_opened<F>(&mut self, callback: F)
    where
        F: FnMut(&str, WindowId) + 'static,
    {
        self.observer = Some(Box::new(callback));
    }

    /// Active configuration
    pub fn config(&self) -> &WmConfig {
        &self.config
    }

    /// Current viewport, read from the provider
    pub fn viewport(&self) -> Viewport {
        self.viewport.viewport()
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Open a window of `kind`.
    ///
    /// Singleton kinds that already have an instance are focused (and
    /// restored from the tray) instead; their id is returned and no window
    /// is created.
    pub fn open(&mut self, kind: WindowKind, payload: Option<Value>) -> WindowId {
        self.open_with(WindowConfig {
            kind,
            payload,
            ..Default::default()
        })
    }

    /// Open a window with explicit title, geometry or payload
    pub fn open_with(&mut self, config: WindowConfig) -> WindowId {
        let kind = config.kind;

        if !kind.is_multi_instance() {
            if let Some(existing) = self.find_kind(kind) {
                debug!(id = existing, kind = kind.id(), "singleton already open, focusing");
                self.focus(existing);
                return existing;
            }
        }

        let viewport = self.viewport.viewport();
        let (position, size) = self.initial_geometry(&viewport, config.position, config.size);
        let title = match config.title {
            Some(title) => title,
            None => self.default_title(kind),
        };

        let id = self.next_id;
        self.next_id += 1;

        let window = WindowInstance {
            id,
            kind,
            title: title.clone(),
            position,
            size,
            is_minimized: false,
            is_maximized: false,
            z_index: self.z_order.advance(),
            payload: config.payload.unwrap_or(Value::Null),
        };
        debug!(
            id,
            kind = kind.id(),
            x = position.x,
            y = position.y,
            width = size.width,
            height = size.height,
            "window opened"
        );
        self.windows.insert(id, window);

        if kind.is_multi_instance() {
            if let Some(observer) = self.observer.as_mut() {
                observer.on_window_opened(&title, id);
            }
        }

        id
    }

    /// Remove a window. Closing an absent id does nothing.
    pub fn close(&mut self, id: WindowId) {
        if self.windows.remove(&id).is_some() {
            debug!(id, "window closed");
        }
    }

    /// Send a window to the tray. The stacking index is kept.
    pub fn minimize(&mut self, id: WindowId) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.is_minimized = true;
            debug!(id, "window minimized");
        }
    }

    /// Toggle maximized state; maximizing also brings the window back from the tray
    pub fn maximize(&mut self, id: WindowId) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.is_maximized = !window.is_maximized;
            window.is_minimized = false;
            debug!(id, maximized = window.is_maximized, "window maximize toggled");
        }
    }

    /// Raise a window above all others and restore it from the tray
    pub fn focus(&mut self, id: WindowId) {
        if let Some(window) = self.windows.get_mut(&id) {
            let z = self.z_order.assign_top(window);
            window.is_minimized = false;
            debug!(id, z, "window focused");
        }
    }

    /// Move a window's top-left corner, clamped to the viewport.
    ///
    /// Ignored while maximized so the stored geometry does not drift.
    pub fn move_window(&mut self, id: WindowId, x: f32, y: f32) {
        let viewport = self.viewport.viewport();
        let limits = self.config.limits;
        if let Some(window) = self.windows.get_mut(&id) {
            if window.is_maximized {
                return;
            }
            window.position = limits.clamp_position(Vec2::new(x, y), window.size, &viewport);
            trace!(id, x = window.position.x, y = window.position.y, "window moved");
        }
    }

    /// Resize a window, clamped to the floor and the viewport.
    ///
    /// Ignored while maximized so the stored geometry does not drift.
    pub fn resize(&mut self, id: WindowId, width: f32, height: f32) {
        let viewport = self.viewport.viewport();
        let limits = self.config.limits;
        if let Some(window) = self.windows.get_mut(&id) {
            if window.is_maximized {
                return;
            }
            window.size = limits.clamp_size(Size::new(width, height), window.position, &viewport);
            trace!(
                id,
                width = window.size.width,
                height = window.size.height,
                "window resized"
            );
        }
    }

    /// Commit position and size together.
    ///
    /// The position is clamped against the new size and the size against the
    /// clamped position, so handles that move the origin commit a consistent
    /// frame. Ignored while maximized.
    pub fn set_geometry(&mut self, id: WindowId, position: Vec2, size: Size) {
        let viewport = self.viewport.viewport();
        let limits = self.config.limits;
        if let Some(window) = self.windows.get_mut(&id) {
            if window.is_maximized {
                return;
            }
            window.position = limits.clamp_position(position, size, &viewport);
            window.size = limits.clamp_size(size, window.position, &viewport);
            trace!(
                id,
                x = window.position.x,
                y = window.position.y,
                width = window.size.width,
                height = window.size.height,
                "window geometry set"
            );
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Get a window by id
    pub fn get(&self, id: WindowId) -> Option<&WindowInstance> {
        self.windows.get(&id)
    }

    /// Whether `id` names an open window
    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.contains_key(&id)
    }

    /// Number of open windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    /// True when no window is open
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Number of open windows of `kind`
    pub fn count_of_kind(&self, kind: WindowKind) -> usize {
        self.windows.values().filter(|w| w.kind == kind).count()
    }

    /// Oldest open window of `kind`
    pub fn find_kind(&self, kind: WindowKind) -> Option<WindowId> {
        self.windows.values().find(|w| w.kind == kind).map(|w| w.id)
    }

    /// All windows in the order they were opened
    pub fn windows(&self) -> impl Iterator<Item = &WindowInstance> {
        self.windows.values()
    }

    /// All windows sorted back to front
    pub fn windows_by_z(&self) -> Vec<&WindowInstance> {
        let mut windows: Vec<&WindowInstance> = self.windows.values().collect();
        zorder::sort_back_to_front(&mut windows);
        windows
    }

    /// Topmost window that is not minimized
    pub fn focused(&self) -> Option<WindowId> {
        self.windows
            .values()
            .filter(|w| w.is_visible())
            .max_by_key(|w| w.z_index)
            .map(|w| w.id)
    }

    /// Highest stacking index handed out so far
    pub fn top_z(&self) -> ZIndex {
        self.z_order.top()
    }

    /// Find the topmost visible window under `point` and the region hit
    pub fn region_at(&self, point: Vec2) -> Option<(WindowId, WindowRegion)> {
        let viewport = self.viewport.viewport();
        self.windows_by_z()
            .into_iter()
            .rev()
            .filter(|w| w.is_visible())
            .find_map(|w| w.region_at(point, &viewport).map(|region| (w.id, region)))
    }

    // =========================================================================
    // Placement helpers
    // =========================================================================

    /// Centered default geometry with cascade, or the requested geometry, clamped
    fn initial_geometry(
        &self,
        viewport: &Viewport,
        position: Option<Vec2>,
        size: Option<Size>,
    ) -> (Vec2, Size) {
        let limits = &self.config.limits;
        let area = viewport.content_area();
        let size = size.unwrap_or_else(|| area.size().scale(self.config.default_fill));

        let position = position.unwrap_or_else(|| {
            let cycle = self.config.cascade_cycle.max(1) as usize;
            let cascade = (self.windows.len() % cycle) as f32 * self.config.cascade_step;
            Vec2::new(
                area.x + (area.width - size.width) / 2.0 + cascade,
                area.y + (area.height - size.height) / 2.0 + cascade,
            )
        });

        let position = limits.clamp_position(position, size, viewport);
        let size = limits.clamp_size(size, position, viewport);
        (position, size)
    }

    /// Title from the string table; multi-instance kinds get a running ordinal
    fn default_title(&mut self, kind: WindowKind) -> String {
        let base = self
            .strings
            .lookup(kind.title_key())
            .unwrap_or_else(|| kind.default_title().to_string());

        if kind.is_multi_instance() {
            let ordinal = self.title_ordinals.entry(kind).or_insert(0);
            *ordinal += 1;
            format!("{} {}", base, ordinal)
        } else {
            base
        }
    }
}
