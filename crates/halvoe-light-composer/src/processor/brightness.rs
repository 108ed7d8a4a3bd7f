//! Global brightness cap
//!
//! Limits the power drawn by the strip. Applied to every flushed frame
//! regardless of what the pixel buffer holds.

use crate::{color::Rgb, math8::scale8};

#[derive(Debug, Clone, Copy)]
pub struct GlobalBrightness {
    /// Scale factor (0-255 = 0.0-1.0)
    scale: u8,
}

impl Default for GlobalBrightness {
    fn default() -> Self {
        Self { scale: 255 }
    }
}

impl GlobalBrightness {
    pub const fn new(scale: u8) -> Self {
        Self { scale }
    }

    pub fn apply<const N: usize>(&self, frame: &mut [Rgb; N]) {
        // full scale is a no-op, scale8 would otherwise dim 255 to 254
        if self.scale == 255 {
            return;
        }
        for pixel in frame.iter_mut() {
            pixel.r = scale8(pixel.r, self.scale);
            pixel.g = scale8(pixel.g, self.scale);
            pixel.b = scale8(pixel.b, self.scale);
        }
    }
}
