use super::main::LensGuard;
use crate::device_display::interface::StatusColor;
use crate::lens_guard::core::Status;

pub fn status_line(status: Status) -> (&'static str, StatusColor) {
    match status {
        Status::TouchingLens => ("Finger touching the lens!", StatusColor::Purple),
        Status::NearDetected => ("Finger detected, but far!", StatusColor::Orange),
        Status::Clear => ("Camera clear", StatusColor::Green),
    }
}

impl LensGuard {
    pub fn render(&self, status: Status) {
        let (text, color) = status_line(status);
        self.set_status(text, color);
    }

    pub fn render_camera_error(&self) {
        self.set_status("Error: Camera access denied", StatusColor::Red);
    }

    pub fn render_stopped(&self) {
        self.set_status("Camera stopped", StatusColor::Neutral);
    }

    fn set_status(&self, text: &str, color: StatusColor) {
        let mut display = self.device_display.lock().unwrap();
        if let Err(error) = display.set_status(text, color) {
            let _ = self
                .logger
                .error(&format!("Display update failed: {}", error));
        }
    }
}
