use std::error::Error;

/// Outline rectangle in the coordinate space of the displayed element,
/// not the native capture. The two spaces must not be mixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// The visual outline of the sampled central region.
pub trait DeviceOverlay: Send + Sync {
    /// On-screen size of the element the video is rendered into.
    fn viewport_size(&self) -> (u32, u32);
    fn set_region(&mut self, rect: OverlayRect) -> Result<(), Box<dyn Error + Send + Sync>>;
}
