//! Window frame regions and resize handle directions

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WmError;

/// Set of window edges moved by a resize handle.
///
/// Edge handles carry one direction, corner handles two (`se`, `nw`, ...).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResizeDirection {
    pub n: bool,
    pub s: bool,
    pub e: bool,
    pub w: bool,
}

impl ResizeDirection {
    pub const N: Self = Self::from_flags(true, false, false, false);
    pub const S: Self = Self::from_flags(false, true, false, false);
    pub const E: Self = Self::from_flags(false, false, true, false);
    pub const W: Self = Self::from_flags(false, false, false, true);
    pub const NE: Self = Self::from_flags(true, false, true, false);
    pub const NW: Self = Self::from_flags(true, false, false, true);
    pub const SE: Self = Self::from_flags(false, true, true, false);
    pub const SW: Self = Self::from_flags(false, true, false, true);

    /// The eight handles on a window frame
    pub const HANDLES: [Self; 8] = [
        Self::N,
        Self::S,
        Self::E,
        Self::W,
        Self::NE,
        Self::NW,
        Self::SE,
        Self::SW,
    ];

    const fn from_flags(n: bool, s: bool, e: bool, w: bool) -> Self {
        Self { n, s, e, w }
    }

    /// Handle name as used by the host (`"n"`, `"se"`, ...)
    pub fn as_str(&self) -> &'static str {
        match (self.n, self.s, self.e, self.w) {
            (true, false, false, false) => "n",
            (false, true, false, false) => "s",
            (false, false, true, false) => "e",
            (false, false, false, true) => "w",
            (true, false, true, false) => "ne",
            (true, false, false, true) => "nw",
            (false, true, true, false) => "se",
            (false, true, false, true) => "sw",
            _ => "",
        }
    }

    /// True when the handle moves the window's left or top edge
    pub fn moves_origin(&self) -> bool {
        self.n || self.w
    }
}

impl FromStr for ResizeDirection {
    type Err = WmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "n" => Ok(Self::N),
            "s" => Ok(Self::S),
            "e" => Ok(Self::E),
            "w" => Ok(Self::W),
            "ne" => Ok(Self::NE),
            "nw" => Ok(Self::NW),
            "se" => Ok(Self::SE),
            "sw" => Ok(Self::SW),
            _ => Err(WmError::InvalidResizeDirection(s.to_string())),
        }
    }
}

/// Part of a window frame under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowRegion {
    /// Draggable title region
    TitleBar,
    /// Window content (owned by the host renderer)
    Content,
    CloseButton,
    MinimizeButton,
    MaximizeButton,
    /// One of the eight resize handles
    Resize(ResizeDirection),
}
