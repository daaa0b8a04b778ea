use config::Config;
use device_camera::impl_fake::DeviceCameraFake;
use device_display::impl_console::DeviceDisplayConsole;
use device_display::impl_gui::DeviceDisplayGui;
use device_display::interface::DeviceDisplay;
use device_overlay::impl_console::DeviceOverlayConsole;
use lens_guard::main::LensGuard;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use library::scheduler::impl_display_rate::DisplayRateScheduler;
use std::sync::{Arc, Mutex};
use std::time::Duration;

mod config;
mod device_camera;
mod device_display;
mod device_overlay;
mod lens_guard;
mod library;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let device_camera = Arc::new(DeviceCameraFake::new(logger.clone()));

    let device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>> =
        if std::env::args().any(|arg| arg == "--gui") {
            Arc::new(Mutex::new(DeviceDisplayGui::new()))
        } else {
            Arc::new(Mutex::new(DeviceDisplayConsole::new()))
        };

    let device_overlay = Arc::new(Mutex::new(DeviceOverlayConsole::new(
        logger.clone(),
        (640, 480),
    )));

    let scheduler = Arc::new(DisplayRateScheduler::new(60));

    let guard = LensGuard::new(
        config,
        logger,
        device_camera,
        device_display,
        device_overlay,
        scheduler,
    );

    guard.start()?;

    std::thread::sleep(Duration::from_secs(10));

    guard.stop();

    Ok(())
}
