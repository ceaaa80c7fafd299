//! Geometry constraint solver
//!
//! Two pure functions keep window geometry usable:
//!
//! - [`clamp_position`] keeps a window's title bar reachable. Horizontally a
//!   window may be parked almost entirely off either side (only
//!   `edge_margin` pixels must remain visible), while vertically it can never
//!   rise above the top inset. The asymmetry is deliberate and preserved.
//! - [`clamp_size`] keeps a window at least `min_size` large and no larger
//!   than the space between its position and the viewport's right/bottom
//!   edge.
//!
//! Non-finite input (a malformed pointer event producing `NaN`) is never
//! propagated into stored geometry: it is replaced per component with a
//! documented fallback before clamping.

use serde::{Deserialize, Serialize};

use crate::math::{Size, Vec2};
use crate::viewport::Viewport;

/// Tunable bounds used by the clamp functions
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryLimits {
    /// Pixels of a window that must stay inside the viewport horizontally,
    /// and the distance the title bar must keep from the bottom edge
    pub edge_margin: f32,
    /// Smallest top inset, used when the viewport has no header
    pub min_top_inset: f32,
    /// Size floor so window chrome stays usable
    pub min_size: Size,
    /// Replacement for non-finite position components
    pub fallback_position: Vec2,
    /// Replacement for non-finite size components
    pub fallback_size: Size,
}

impl Default for GeometryLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl GeometryLimits {
    /// Stock limits: 100px margin, 250x180 floor, (100, 150) / 480x350 fallbacks
    pub const DEFAULT: GeometryLimits = GeometryLimits {
        edge_margin: 100.0,
        min_top_inset: 10.0,
        min_size: Size::new(250.0, 180.0),
        fallback_position: Vec2::new(100.0, 150.0),
        fallback_size: Size::new(480.0, 350.0),
    };

    /// Lowest allowed `y` for a window's top edge
    #[inline]
    pub fn top_inset(&self, viewport: &Viewport) -> f32 {
        viewport.header_height.max(self.min_top_inset)
    }

    /// Clamp a proposed top-left position for a window of `size`.
    ///
    /// `x` is bounded to `[-width + margin, viewport.width - margin]`,
    /// `y` to `[top_inset, viewport.height - margin]`.
    pub fn clamp_position(&self, proposed: Vec2, size: Size, viewport: &Viewport) -> Vec2 {
        let x = finite_or(proposed.x, self.fallback_position.x);
        let y = finite_or(proposed.y, self.fallback_position.y);

        let min_x = -size.width + self.edge_margin;
        let max_x = viewport.width - self.edge_margin;
        let min_y = self.top_inset(viewport);
        let max_y = viewport.height - self.edge_margin;

        Vec2::new(clamp_axis(x, min_x, max_x), clamp_axis(y, min_y, max_y))
    }

    /// Clamp a proposed size for a window whose top-left corner is `position`.
    ///
    /// Each dimension is bounded to `[min, viewport_extent - position]`.
    pub fn clamp_size(&self, proposed: Size, position: Vec2, viewport: &Viewport) -> Size {
        let width = finite_or(proposed.width, self.fallback_size.width);
        let height = finite_or(proposed.height, self.fallback_size.height);

        let max_width = viewport.width - position.x;
        let max_height = viewport.height - position.y;

        Size::new(
            clamp_axis(width, self.min_size.width, max_width),
            clamp_axis(height, self.min_size.height, max_height),
        )
    }
}

/// Clamp a proposed position with the stock [`GeometryLimits`]
pub fn clamp_position(proposed: Vec2, current_size: Size, viewport: &Viewport) -> Vec2 {
    GeometryLimits::DEFAULT.clamp_position(proposed, current_size, viewport)
}

/// Clamp a proposed size with the stock [`GeometryLimits`]
pub fn clamp_size(proposed: Size, position: Vec2, viewport: &Viewport) -> Size {
    GeometryLimits::DEFAULT.clamp_size(proposed, position, viewport)
}

#[inline]
fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Like `f32::clamp`, but never panics: when the range is inverted (a
/// viewport smaller than the floor) the lower bound wins.
#[inline]
fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_coord() -> impl Strategy<Value = f32> {
        prop_oneof![
            8 => -5000.0f32..5000.0,
            1 => Just(f32::NAN),
        ]
    }

    fn any_viewport() -> impl Strategy<Value = Viewport> {
        (100.0f32..4000.0, 100.0f32..3000.0, 0.0f32..120.0)
            .prop_map(|(w, h, header)| Viewport::new(w, h, header))
    }

    proptest! {
        /// Clamping an already clamped position is a no-op
        #[test]
        fn clamp_position_idempotent(
            x in any_coord(),
            y in any_coord(),
            w in 0.0f32..3000.0,
            h in 0.0f32..3000.0,
            viewport in any_viewport(),
        ) {
            let size = Size::new(w, h);
            let once = clamp_position(Vec2::new(x, y), size, &viewport);
            let twice = clamp_position(once, size, &viewport);
            prop_assert_eq!(once, twice);
        }

        /// Clamping an already clamped size is a no-op
        #[test]
        fn clamp_size_idempotent(
            w in any_coord(),
            h in any_coord(),
            x in -2000.0f32..2000.0,
            y in 0.0f32..2000.0,
            viewport in any_viewport(),
        ) {
            let pos = Vec2::new(x, y);
            let once = clamp_size(Size::new(w, h), pos, &viewport);
            let twice = clamp_size(once, pos, &viewport);
            prop_assert_eq!(once, twice);
        }

        /// Clamped output is always finite
        #[test]
        fn clamp_output_finite(
            x in any_coord(),
            y in any_coord(),
            viewport in any_viewport(),
        ) {
            let size = clamp_size(Size::new(x, y), Vec2::new(0.0, 0.0), &viewport);
            prop_assert!(size.is_finite());
            let pos = clamp_position(Vec2::new(x, y), size, &viewport);
            prop_assert!(pos.is_finite());
        }

        /// Size never drops below the usability floor
        #[test]
        fn clamp_size_respects_floor(
            w in any_coord(),
            h in any_coord(),
            viewport in any_viewport(),
        ) {
            let s = clamp_size(Size::new(w, h), Vec2::new(50.0, 50.0), &viewport);
            prop_assert!(s.width >= GeometryLimits::DEFAULT.min_size.width);
            prop_assert!(s.height >= GeometryLimits::DEFAULT.min_size.height);
        }
    }
}
