//! Viewport provider
//!
//! The host owns the browser viewport. The window layer only needs to ask,
//! synchronously and at call time, how large it is and how tall the fixed
//! header strip at the top is.

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::math::{Rect, Size};

/// Viewport dimensions as reported by the host
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Viewport width in pixels
    pub width: f32,
    /// Viewport height in pixels
    pub height: f32,
    /// Height of the fixed header above the window area (0 = none)
    pub header_height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1920.0, 1080.0, 0.0)
    }
}

impl Viewport {
    /// Create a viewport description
    pub const fn new(width: f32, height: f32, header_height: f32) -> Self {
        Self {
            width,
            height,
            header_height,
        }
    }

    /// Full viewport size
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Area available to windows: full width, everything below the header.
    ///
    /// This is also the frame a maximized window occupies.
    pub fn content_area(&self) -> Rect {
        Rect::new(
            0.0,
            self.header_height,
            self.width,
            (self.height - self.header_height).max(0.0),
        )
    }
}

/// Synchronous source of the current viewport
pub trait ViewportProvider {
    /// Current viewport dimensions
    fn viewport(&self) -> Viewport;
}

impl ViewportProvider for Viewport {
    fn viewport(&self) -> Viewport {
        *self
    }
}

impl<F> ViewportProvider for F
where
    F: Fn() -> Viewport,
{
    fn viewport(&self) -> Viewport {
        self()
    }
}

/// Viewport cell shared between the host adapter and the registry.
///
/// The adapter calls [`SharedViewport::set`] from its resize listener; the
/// registry reads the latest value whenever it needs one.
#[derive(Clone, Debug, Default)]
pub struct SharedViewport(Rc<Cell<Viewport>>);

impl SharedViewport {
    /// Create a shared cell holding `viewport`
    pub fn new(viewport: Viewport) -> Self {
        Self(Rc::new(Cell::new(viewport)))
    }

    /// Replace the current viewport
    pub fn set(&self, viewport: Viewport) {
        self.0.set(viewport);
    }

    /// Read the current viewport
    pub fn get(&self) -> Viewport {
        self.0.get()
    }
}

impl ViewportProvider for SharedViewport {
    fn viewport(&self) -> Viewport {
        self.get()
    }
}
