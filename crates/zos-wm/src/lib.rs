//! Window Layer for the Zero OS Web Shell
//!
//! This crate provides the multi-window layer a browser-hosted shell sits on:
//! - Window lifecycle (open, close, minimize, maximize, focus)
//! - Viewport-aware geometry clamping
//! - Title bar drag and eight-handle resize gestures
//! - Stacking order driven by a monotonic counter
//! - Minimized tray and taskbar views
//!
//! ## Architecture
//!
//! - [`math`]: Geometry primitives (`Vec2`, `Size`, `Rect`) and frame style
//! - [`geometry`]: Position and size clamping against the viewport
//! - [`window`]: Window kinds, instances and frame hit testing
//! - [`registry`]: Owner of open windows and the command surface
//! - [`input`]: Drag and resize controllers behind one gesture router
//! - [`shell`]: Tray, taskbar and render-list projections
//! - [`prefs`]: Shell preferences over a pluggable key/value store
//!
//! ## Example
//!
//! ```rust
//! use zos_wm::{ShellEngine, Viewport, WindowKind};
//!
//! let mut engine = ShellEngine::new(Viewport::new(1200.0, 800.0, 64.0));
//!
//! let id = engine.open(WindowKind::Chat, None);
//! engine.minimize_window(id);
//! assert_eq!(engine.tray_items().len(), 1);
//!
//! engine.tray_click(id);
//! assert_eq!(engine.windows.focused(), Some(id));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: State management is testable without a browser
//! 2. **Commands Never Fail**: Unknown ids are ignored and geometry is clamped
//! 3. **Late-Bound Viewport**: Clamps read the viewport at call time

pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod math;
pub mod prefs;
pub mod registry;
pub mod shell;
pub mod types;
pub mod viewport;
pub mod window;
pub mod zorder;

mod engine;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use config::WmConfig;
pub use error::{WmError, WmResult};
pub use geometry::{clamp_position, clamp_size, GeometryLimits};
pub use input::{calculate_resize, GestureState, InputResult, InputRouter};
pub use math::{FrameStyle, Rect, Size, Vec2, FRAME_STYLE};
pub use prefs::{MemoryPreferences, PreferenceStore, ShellPreferences};
pub use registry::{DefaultStrings, RenderContent, StringTable, WindowObserver, WindowRegistry};
pub use shell::{TaskbarItem, TrayItem, WindowFrame};
pub use types::{WindowId, ZIndex};
pub use viewport::{SharedViewport, Viewport, ViewportProvider};
pub use window::{ResizeDirection, WindowConfig, WindowInstance, WindowKind, WindowRegion};
pub use zorder::ZOrder;

pub use engine::ShellEngine;
