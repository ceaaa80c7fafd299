//! Geometry primitives for window placement
//!
//! All coordinates are viewport pixels with the origin at the top-left
//! corner of the browser viewport.

mod rect;
mod size;
mod style;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use style::{FrameStyle, FRAME_STYLE};
pub use vec2::Vec2;
