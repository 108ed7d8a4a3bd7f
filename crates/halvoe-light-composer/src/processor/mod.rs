//! Output processing pipeline
//!
//! Applies post-processing to a copy of the pixel buffer right before it is
//! sent to hardware. The buffer itself always keeps the commanded colors.
//! Currently includes:
//! - Color correction (white balance of the strip)
//! - Global brightness cap

mod brightness;
mod color_correction;

pub use brightness::GlobalBrightness;
pub use color_correction::ColorCorrection;

use crate::color::Rgb;

/// Output processing parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Global brightness cap (0-255)
    pub brightness: u8,
    /// Color correction in 0xRRGGBB format, 0xFFFFFF disables it
    pub color_correction: u32,
}

impl OutputConfig {
    pub const fn new(brightness: u8, color_correction: u32) -> Self {
        Self {
            brightness,
            color_correction,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new(255, 0xFF_FFFF)
    }
}

/// Output processor - applies post-processing to frames
///
/// Processing is applied in a specific order to ensure correct results.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputProcessor {
    pub color_correction: ColorCorrection,
    pub brightness: GlobalBrightness,
}

impl OutputProcessor {
    pub fn new(config: OutputConfig) -> Self {
        Self {
            color_correction: ColorCorrection::from_rgb(config.color_correction),
            brightness: GlobalBrightness::new(config.brightness),
        }
    }

    /// Produce the hardware frame for a pixel buffer
    ///
    /// Processing order:
    /// 1. Color correction
    /// 2. Brightness scaling
    pub fn apply<const N: usize>(&self, pixels: &[Rgb; N]) -> [Rgb; N] {
        let mut frame = *pixels;
        self.color_correction.apply(&mut frame);
        self.brightness.apply(&mut frame);
        frame
    }
}
