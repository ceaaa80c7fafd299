//! Window frame metrics used for hit testing

/// Frame metrics shared with the host's window chrome
pub struct FrameStyle {
    /// Height of the draggable title region
    pub title_bar_height: f32,
    /// Thickness of the edge resize handles
    pub resize_handle_size: f32,
    /// Extent of the corner resize handles along each edge
    pub corner_handle_size: f32,
    /// Side length of the square title bar buttons
    pub button_size: f32,
    /// Gap between neighbouring buttons
    pub button_spacing: f32,
    /// Gap between the close button and the right edge
    pub button_margin: f32,
}

/// Default frame style
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 36.0,
    resize_handle_size: 6.0,
    corner_handle_size: 12.0,
    button_size: 20.0,
    button_spacing: 6.0,
    button_margin: 10.0,
};
