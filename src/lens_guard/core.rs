use crate::config::SkinToneThresholds;
use crate::device_overlay::interface::OverlayRect;
use image::RgbaImage;
use thiserror::Error;

const CHANNELS: usize = 4;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("analysis region has no pixels")]
    EmptyRegion,
}

/// A flat RGBA snapshot of a rectangular pixel region. Built fresh per
/// analysis cycle and discarded afterwards.
#[derive(Debug, Clone)]
pub struct FrameSample {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl FrameSample {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), (width * height) as usize * CHANNELS);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn from_image(image: &RgbaImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            data: image.as_raw().clone(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        (self.width * self.height) as usize
    }

    /// Copies out a sub-rectangle. The region is clamped to the sample
    /// bounds, so an out-of-range region yields an empty sample rather
    /// than a panic.
    pub fn region(&self, region: Region) -> FrameSample {
        let x_end = region.x.saturating_add(region.width).min(self.width);
        let y_end = region.y.saturating_add(region.height).min(self.height);
        let x_start = region.x.min(self.width);
        let y_start = region.y.min(self.height);
        let out_width = x_end - x_start;
        let out_height = y_end - y_start;

        let mut data = Vec::with_capacity((out_width * out_height) as usize * CHANNELS);
        for y in y_start..y_end {
            let row_start = ((y * self.width + x_start) as usize) * CHANNELS;
            let row_end = row_start + out_width as usize * CHANNELS;
            data.extend_from_slice(&self.data[row_start..row_end]);
        }

        FrameSample {
            width: out_width,
            height: out_height,
            data,
        }
    }

    fn pixels(&self) -> impl Iterator<Item = (u8, u8, u8)> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|px| (px[0], px[1], px[2]))
    }
}

/// Rectangle in native capture coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// The middle third of the frame in both dimensions, in native pixels.
pub fn central_region(frame_width: u32, frame_height: u32) -> Region {
    Region {
        x: frame_width / 3,
        y: frame_height / 3,
        width: frame_width / 3,
        height: frame_height / 3,
    }
}

/// Where to draw the analysis outline: central-region size in native
/// pixels, centered inside the displayed element.
pub fn overlay_rect(native: (u32, u32), viewport: (u32, u32)) -> OverlayRect {
    let region_width = (native.0 / 3) as f64;
    let region_height = (native.1 / 3) as f64;
    OverlayRect {
        left: (viewport.0 as f64 - region_width) / 2.0,
        top: (viewport.1 as f64 - region_height) / 2.0,
        width: region_width,
        height: region_height,
    }
}

/// Per-pixel skin-tone predicate. Purely channel-wise; neighboring pixels
/// are never consulted.
pub fn is_skin_tone(r: u8, g: u8, b: u8) -> bool {
    r > g && r > b && r > 50 && g > 15 && b < 150
}

/// Fraction of pixels in the sample that pass [`is_skin_tone`].
pub fn warm_ratio(sample: &FrameSample) -> Result<f64, AnalysisError> {
    if sample.pixel_count() == 0 {
        return Err(AnalysisError::EmptyRegion);
    }
    let warm = sample
        .pixels()
        .filter(|&(r, g, b)| is_skin_tone(r, g, b))
        .count();
    Ok(warm as f64 / sample.pixel_count() as f64)
}

/// Mean of the per-channel population variances over R, G and B.
/// Alpha is ignored.
pub fn color_variance(sample: &FrameSample) -> Result<f64, AnalysisError> {
    if sample.pixel_count() == 0 {
        return Err(AnalysisError::EmptyRegion);
    }

    let mut sums = [0.0f64; 3];
    let mut sums_sq = [0.0f64; 3];
    for (r, g, b) in sample.pixels() {
        for (i, channel) in [r, g, b].into_iter().enumerate() {
            let value = channel as f64;
            sums[i] += value;
            sums_sq[i] += value * value;
        }
    }

    let count = sample.pixel_count() as f64;
    let variance_sum: f64 = (0..3)
        .map(|i| {
            let mean = sums[i] / count;
            sums_sq[i] / count - mean * mean
        })
        .sum();
    Ok(variance_sum / 3.0)
}

/// The three per-cycle signals. Pure functions of one frame; no memory of
/// prior frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signals {
    pub full_warm_ratio: f64,
    pub central_warm_ratio: f64,
    pub color_variance: f64,
}

pub fn analyze(frame: &FrameSample) -> Result<Signals, AnalysisError> {
    let full_warm_ratio = warm_ratio(frame)?;
    let variance = color_variance(frame)?;
    let central = frame.region(central_region(frame.width(), frame.height()));
    let central_warm_ratio = warm_ratio(&central)?;
    Ok(Signals {
        full_warm_ratio,
        central_warm_ratio,
        color_variance: variance,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Clear,
    NearDetected,
    TouchingLens,
}

/// First matching rule wins; the touch rule is checked before the near
/// rule even when both would match.
pub fn classify(signals: &Signals, thresholds: &SkinToneThresholds) -> Status {
    if signals.full_warm_ratio > thresholds.full_warm_ratio_close
        && signals.color_variance < thresholds.color_variance
    {
        Status::TouchingLens
    } else if signals.full_warm_ratio > thresholds.full_warm_ratio_far
        || signals.central_warm_ratio > thresholds.central_warm_ratio_far
    {
        Status::NearDetected
    } else {
        Status::Clear
    }
}
