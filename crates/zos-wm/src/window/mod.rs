//! Window entity model
//!
//! Provides the window record, window kinds and frame hit testing.

mod config;
mod kind;
mod region;
#[allow(clippy::module_inception)]
mod window;

pub use config::WindowConfig;
pub use kind::WindowKind;
pub use region::{ResizeDirection, WindowRegion};
pub use window::WindowInstance;

// Re-export WindowId from crate types module for convenience
pub use crate::types::{WindowId, ZIndex};
