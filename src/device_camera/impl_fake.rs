use crate::device_camera::interface::{CameraError, DeviceCamera, StreamConstraints};
use crate::library::logger::interface::Logger;
use image::{Rgba, RgbaImage};
use rand::Rng;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub struct DeviceCameraFake {
    logger: Arc<dyn Logger + Send + Sync>,
    frame: Mutex<RgbaImage>,
    streaming: AtomicBool,
    fail_request: AtomicBool,
    request_count: AtomicUsize,
    capture_count: AtomicUsize,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("fake"),
            frame: Mutex::new(noise_frame(64, 48)),
            streaming: AtomicBool::new(false),
            fail_request: AtomicBool::new(false),
            request_count: AtomicUsize::new(0),
            capture_count: AtomicUsize::new(0),
        }
    }

    #[allow(dead_code)]
    pub fn set_frame(&self, frame: RgbaImage) {
        *self.frame.lock().unwrap() = frame;
    }

    #[allow(dead_code)]
    pub fn set_fail_request(&self, fail: bool) {
        self.fail_request.store(fail, Ordering::SeqCst);
    }

    #[allow(dead_code)]
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    #[allow(dead_code)]
    pub fn capture_count(&self) -> usize {
        self.capture_count.load(Ordering::SeqCst)
    }

    #[allow(dead_code)]
    pub fn is_streaming(&self) -> bool {
        self.streaming.load(Ordering::SeqCst)
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn request_stream(&self, constraints: &StreamConstraints) -> Result<(), CameraError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);
        if self.fail_request.load(Ordering::SeqCst) {
            return Err(CameraError::PermissionDenied);
        }
        let _ = self.logger.info(&format!(
            "Stream requested: {:?} facing, ideal {}x{}",
            constraints.facing, constraints.ideal_width, constraints.ideal_height
        ));
        self.streaming.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn stream_resolution(&self) -> Result<(u32, u32), CameraError> {
        if !self.streaming.load(Ordering::SeqCst) {
            return Err(CameraError::NotStreaming);
        }
        let frame = self.frame.lock().unwrap();
        Ok((frame.width(), frame.height()))
    }

    fn capture_frame(&self) -> Result<RgbaImage, CameraError> {
        if !self.streaming.load(Ordering::SeqCst) {
            return Err(CameraError::NotStreaming);
        }
        self.capture_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.frame.lock().unwrap().clone())
    }

    fn release_stream(&self) {
        if self.streaming.swap(false, Ordering::SeqCst) {
            let _ = self.logger.info("Stream released");
        }
    }
}

fn noise_frame(width: u32, height: u32) -> RgbaImage {
    let mut rng = rand::rng();
    RgbaImage::from_fn(width, height, |_, _| {
        Rgba([rng.random(), rng.random(), rng.random(), 255])
    })
}
