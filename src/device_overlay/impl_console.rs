use crate::device_overlay::interface::{DeviceOverlay, OverlayRect};
use crate::library::logger::interface::Logger;
use std::error::Error;
use std::sync::Arc;

pub struct DeviceOverlayConsole {
    logger: Arc<dyn Logger + Send + Sync>,
    viewport: (u32, u32),
}

impl DeviceOverlayConsole {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, viewport: (u32, u32)) -> Self {
        Self {
            logger: logger.with_namespace("overlay"),
            viewport,
        }
    }
}

impl DeviceOverlay for DeviceOverlayConsole {
    fn viewport_size(&self) -> (u32, u32) {
        self.viewport
    }

    fn set_region(&mut self, rect: OverlayRect) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info(&format!(
            "Analysis area: {}x{} at ({}, {})",
            rect.width, rect.height, rect.left, rect.top
        ))?;
        Ok(())
    }
}
