use image::RgbaImage;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraFacing {
    Front,
    Rear,
}

/// Requested stream properties. The device treats width/height as ideals,
/// not guarantees; query [`DeviceCamera::stream_resolution`] for the native
/// resolution actually delivered.
#[derive(Debug, Clone)]
pub struct StreamConstraints {
    pub facing: CameraFacing,
    pub ideal_width: u32,
    pub ideal_height: u32,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CameraError {
    #[error("camera permission denied")]
    PermissionDenied,
    #[error("camera device unavailable")]
    DeviceUnavailable,
    #[error("no active camera stream")]
    NotStreaming,
}

/// A single camera device. The stream is acquired exclusively by one
/// owner for its lifetime; running two owners against one device at the
/// same time is unsupported.
pub trait DeviceCamera: Send + Sync {
    fn request_stream(&self, constraints: &StreamConstraints) -> Result<(), CameraError>;
    fn stream_resolution(&self) -> Result<(u32, u32), CameraError>;
    fn capture_frame(&self) -> Result<RgbaImage, CameraError>;
    /// Releases all tracks of the active stream. No-op without a stream.
    fn release_stream(&self);
}
