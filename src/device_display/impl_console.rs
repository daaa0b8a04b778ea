use crate::device_display::interface::{DeviceDisplay, StatusColor};
use std::error::Error;

pub struct DeviceDisplayConsole {}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self {}
    }
}

fn ansi_code(color: StatusColor) -> &'static str {
    match color {
        StatusColor::Red => "\x1b[31m",
        StatusColor::Neutral => "\x1b[0m",
        StatusColor::Purple => "\x1b[35m",
        StatusColor::Orange => "\x1b[33m",
        StatusColor::Green => "\x1b[32m",
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn set_status(
        &mut self,
        text: &str,
        color: StatusColor,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        println!("{}{}\x1b[0m", ansi_code(color), text);
        Ok(())
    }
}
