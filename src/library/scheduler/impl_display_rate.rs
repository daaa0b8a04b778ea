use crate::library::scheduler::interface::{FrameScheduler, TickOutcome};
use std::time::{Duration, Instant};

/// Drives the callback on a dedicated thread at a fixed display rate.
pub struct DisplayRateScheduler {
    frame_budget: Duration,
}

impl DisplayRateScheduler {
    pub fn new(refresh_rate_hz: u32) -> Self {
        Self {
            frame_budget: Duration::from_millis(1000 / refresh_rate_hz.max(1) as u64),
        }
    }
}

impl FrameScheduler for DisplayRateScheduler {
    fn schedule(&self, mut tick: Box<dyn FnMut() -> TickOutcome + Send>) {
        let frame_budget = self.frame_budget;
        std::thread::spawn(move || loop {
            let frame_start = Instant::now();

            if tick() == TickOutcome::Stop {
                break;
            }

            let elapsed = frame_start.elapsed();
            if elapsed < frame_budget {
                std::thread::sleep(frame_budget - elapsed);
            }
        });
    }
}
