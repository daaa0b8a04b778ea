use super::main::LensGuard;
use crate::lens_guard::core::{analyze, classify, FrameSample};
use crate::library::scheduler::interface::TickOutcome;
use std::time::Instant;

impl LensGuard {
    /// One scheduler callback invocation. Skips the cycle when the
    /// sampling interval has not elapsed yet; halts the loop once the
    /// guard has been stopped.
    pub fn tick(&self, now: Instant) -> TickOutcome {
        let due = {
            let mut state = self.run_state.lock().unwrap();
            if !state.is_running {
                return TickOutcome::Stop;
            }
            match state.last_processed {
                Some(last) if now.duration_since(last) < self.config.frame_interval => false,
                _ => {
                    state.last_processed = Some(now);
                    true
                }
            }
        };
        if !due {
            return TickOutcome::Continue;
        }

        let frame = match self.device_camera.capture_frame() {
            Ok(frame) => frame,
            Err(error) => {
                let _ = self
                    .logger
                    .error(&format!("Frame capture failed: {}", error));
                return TickOutcome::Continue;
            }
        };

        let sample = FrameSample::from_image(&frame);
        let signals = match analyze(&sample) {
            Ok(signals) => signals,
            Err(error) => {
                let _ = self.logger.error(&format!("Frame analysis failed: {}", error));
                return TickOutcome::Continue;
            }
        };

        let status = classify(&signals, &self.config.thresholds);

        let _ = self.logger.info(&format!(
            "full_warm_ratio: {:.3}, central_warm_ratio: {:.3}, color_variance: {:.1}, status: {:?}",
            signals.full_warm_ratio, signals.central_warm_ratio, signals.color_variance, status
        ));

        self.render(status);
        TickOutcome::Continue
    }
}
