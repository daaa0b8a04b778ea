use crate::device_overlay::interface::{DeviceOverlay, OverlayRect};
use std::error::Error;

pub struct DeviceOverlayFake {
    viewport: (u32, u32),
    last_rect: Option<OverlayRect>,
}

impl DeviceOverlayFake {
    pub fn new(viewport: (u32, u32)) -> Self {
        Self {
            viewport,
            last_rect: None,
        }
    }

    #[allow(dead_code)]
    pub fn last_rect(&self) -> Option<OverlayRect> {
        self.last_rect
    }
}

impl DeviceOverlay for DeviceOverlayFake {
    fn viewport_size(&self) -> (u32, u32) {
        self.viewport
    }

    fn set_region(&mut self, rect: OverlayRect) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.last_rect = Some(rect);
        Ok(())
    }
}
