use crate::device_display::interface::{DeviceDisplay, StatusColor};
use crate::library::logger::interface::Logger;
use std::error::Error;
use std::sync::Arc;

/// Records every status pushed at it, for assertions.
pub struct DeviceDisplayFake {
    logger: Arc<dyn Logger + Send + Sync>,
    history: Vec<(String, StatusColor)>,
}

impl DeviceDisplayFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("display").with_namespace("fake"),
            history: Vec::new(),
        }
    }

    #[allow(dead_code)]
    pub fn history(&self) -> &[(String, StatusColor)] {
        &self.history
    }

    #[allow(dead_code)]
    pub fn last(&self) -> Option<&(String, StatusColor)> {
        self.history.last()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn set_status(
        &mut self,
        text: &str,
        color: StatusColor,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let _ = self
            .logger
            .info(&format!("set_status({:?}, {:?})", text, color));
        self.history.push((text.to_string(), color));
        Ok(())
    }
}
