use crate::device_camera::interface::{CameraFacing, StreamConstraints};
use std::time::Duration;

/// Thresholds for the skin-tone heuristics. Ratios are fractions in [0,1],
/// the variance threshold is in squared channel units.
#[derive(Debug, Clone)]
pub struct SkinToneThresholds {
    pub full_warm_ratio_close: f64,
    pub full_warm_ratio_far: f64,
    pub central_warm_ratio_far: f64,
    pub color_variance: f64,
}

impl Default for SkinToneThresholds {
    fn default() -> Self {
        Self {
            full_warm_ratio_close: 0.8,
            full_warm_ratio_far: 0.2,
            central_warm_ratio_far: 0.05,
            color_variance: 2000.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Minimum wall-clock gap between two analysis cycles.
    pub frame_interval: Duration,
    pub thresholds: SkinToneThresholds,
    pub stream_constraints: StreamConstraints,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(500),
            thresholds: SkinToneThresholds::default(),
            stream_constraints: StreamConstraints {
                facing: CameraFacing::Rear,
                ideal_width: 640,
                ideal_height: 480,
            },
            logger_timezone: mountain_standard_time(),
        }
    }
}

fn mountain_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::west_opt(7 * 3600).unwrap()
}
