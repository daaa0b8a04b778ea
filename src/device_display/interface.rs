use std::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Red,
    Neutral,
    Purple,
    Orange,
    Green,
}

/// A status readout: one line of text plus a color hint.
pub trait DeviceDisplay: Send + Sync {
    fn set_status(
        &mut self,
        text: &str,
        color: StatusColor,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;
}
