/// What the scheduled callback wants the scheduler to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Invoke the callback again on the next display frame.
    Continue,
    /// Halt the loop. The callback will not be invoked again.
    Stop,
}

/// A per-display-frame callback loop. The callback is invoked once per
/// display refresh until it returns [`TickOutcome::Stop`].
pub trait FrameScheduler: Send + Sync {
    fn schedule(&self, tick: Box<dyn FnMut() -> TickOutcome + Send>);
}
