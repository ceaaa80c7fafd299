//! Shell surfaces over the registry
//!
//! The tray, the taskbar and the render list are pure views: they read the
//! registry's window collection and hold no state of their own. Clicks are
//! routed straight back into registry commands.

mod frames;
pub mod taskbar;
pub mod tray;

pub use frames::{render_frames, render_with, WindowFrame};
pub use taskbar::TaskbarItem;
pub use tray::TrayItem;
