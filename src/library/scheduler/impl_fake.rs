use crate::library::scheduler::interface::{FrameScheduler, TickOutcome};
use std::sync::Mutex;

/// Holds the scheduled callback so tests can fire invocations by hand.
pub struct FrameSchedulerFake {
    tick: Mutex<Option<Box<dyn FnMut() -> TickOutcome + Send>>>,
}

impl FrameSchedulerFake {
    pub fn new() -> Self {
        Self {
            tick: Mutex::new(None),
        }
    }

    #[allow(dead_code)]
    pub fn is_scheduled(&self) -> bool {
        self.tick.lock().unwrap().is_some()
    }

    /// Runs one callback invocation. Returns None if nothing is scheduled.
    /// A Stop outcome drops the callback, matching the real loop's halt.
    #[allow(dead_code)]
    pub fn fire(&self) -> Option<TickOutcome> {
        let mut slot = self.tick.lock().unwrap();
        let tick = slot.as_mut()?;
        let outcome = tick();
        if outcome == TickOutcome::Stop {
            *slot = None;
        }
        Some(outcome)
    }
}

impl FrameScheduler for FrameSchedulerFake {
    fn schedule(&self, tick: Box<dyn FnMut() -> TickOutcome + Send>) {
        *self.tick.lock().unwrap() = Some(tick);
    }
}
