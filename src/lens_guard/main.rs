use crate::config::Config;
use crate::device_camera::interface::{CameraError, DeviceCamera};
use crate::device_display::interface::DeviceDisplay;
use crate::device_overlay::interface::DeviceOverlay;
use crate::lens_guard::core::overlay_rect;
use crate::library::logger::interface::Logger;
use crate::library::scheduler::interface::FrameScheduler;
use std::sync::{Arc, Mutex};
use std::time::Instant;

#[derive(Debug, Default, Clone)]
pub struct RunState {
    pub is_running: bool,
    pub last_processed: Option<Instant>,
}

/// Owns the camera lifecycle, drives the sampling loop, classifies the
/// feed. One guard per camera stream; running two guards against one
/// device at the same time is unsupported.
#[derive(Clone)]
pub struct LensGuard {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    pub device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    pub device_overlay: Arc<Mutex<dyn DeviceOverlay + Send + Sync>>,
    pub scheduler: Arc<dyn FrameScheduler + Send + Sync>,
    pub run_state: Arc<Mutex<RunState>>,
}

impl LensGuard {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        device_overlay: Arc<Mutex<dyn DeviceOverlay + Send + Sync>>,
        scheduler: Arc<dyn FrameScheduler + Send + Sync>,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("lens_guard"),
            device_camera,
            device_display,
            device_overlay,
            scheduler,
            run_state: Arc::new(Mutex::new(RunState::default())),
        }
    }

    pub fn is_running(&self) -> bool {
        self.run_state.lock().unwrap().is_running
    }

    /// Acquires the camera stream and begins the sampling loop. No-op when
    /// already running. On acquisition failure the error status is pushed
    /// to the display, the guard stays stopped, and the caller decides
    /// whether to try again.
    pub fn start(&self) -> Result<(), CameraError> {
        if self.is_running() {
            return Ok(());
        }

        if let Err(error) = self
            .device_camera
            .request_stream(&self.config.stream_constraints)
        {
            let _ = self.logger.error(&format!("Camera access failed: {}", error));
            self.render_camera_error();
            return Err(error);
        }

        let native = match self.device_camera.stream_resolution() {
            Ok(native) => native,
            Err(error) => {
                let _ = self.logger.error(&format!("Camera access failed: {}", error));
                self.device_camera.release_stream();
                self.render_camera_error();
                return Err(error);
            }
        };
        self.apply_overlay(native);

        {
            let mut state = self.run_state.lock().unwrap();
            state.is_running = true;
            state.last_processed = None;
        }

        let guard = self.clone();
        self.scheduler
            .schedule(Box::new(move || guard.tick(Instant::now())));

        let _ = self
            .logger
            .info(&format!("Started, native resolution {}x{}", native.0, native.1));
        Ok(())
    }

    /// Halts the loop and releases the camera. No-op when not running.
    /// The next scheduled tick observes the flag and stops rescheduling.
    pub fn stop(&self) {
        {
            let mut state = self.run_state.lock().unwrap();
            if !state.is_running {
                return;
            }
            state.is_running = false;
        }

        self.device_camera.release_stream();
        self.render_stopped();
        let _ = self.logger.info("Stopped");
    }

    fn apply_overlay(&self, native: (u32, u32)) {
        let mut overlay = self.device_overlay.lock().unwrap();
        let rect = overlay_rect(native, overlay.viewport_size());
        if let Err(error) = overlay.set_region(rect) {
            let _ = self
                .logger
                .error(&format!("Overlay update failed: {}", error));
        }
    }
}
