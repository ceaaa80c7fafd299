//! Z-order manager
//!
//! A single counter that only ever grows. Each window that gains focus (or
//! opens, or starts a gesture) is stamped with the next value, so sorting by
//! `z_index` reproduces the focus history: most recently touched on top.

use crate::types::ZIndex;
use crate::window::WindowInstance;

/// Monotonic stacking counter
#[derive(Clone, Debug, Default)]
pub struct ZOrder {
    counter: ZIndex,
}

impl ZOrder {
    /// Create a counter starting below every valid index
    pub fn new() -> Self {
        Self { counter: 0 }
    }

    /// Highest index handed out so far (0 = none yet)
    pub fn top(&self) -> ZIndex {
        self.counter
    }

    /// Advance the counter and return the new top index.
    ///
    /// Saturates at `ZIndex::MAX`; past that point indices stop increasing.
    pub fn advance(&mut self) -> ZIndex {
        self.counter = self.counter.saturating_add(1);
        self.counter
    }

    /// Stamp `window` with a fresh top index
    pub fn assign_top(&mut self, window: &mut WindowInstance) -> ZIndex {
        window.z_index = self.advance();
        window.z_index
    }
}

/// Sort windows back to front
pub fn sort_back_to_front(windows: &mut [&WindowInstance]) {
    windows.sort_by_key(|w| w.z_index);
}
