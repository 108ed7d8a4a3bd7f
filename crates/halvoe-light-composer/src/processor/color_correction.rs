//! Color correction processor
//!
//! Applies multiplicative color correction to each RGB channel.
//! Used for the white balance of the strip.
//!
//! The correction color represents the scaling factors for each channel:
//! - 0xFFFFFF = no correction (100% for all channels)
//! - 0xFFB0F0 = R at 100%, G at 69%, B at 94% (typical SMD5050 strip)

use crate::{
    color::{Rgb, rgb_from_u32},
    math8::scale8,
};

/// Color correction processor
///
/// Applies per-channel multiplicative scaling to correct color output.
/// Default is no correction (all channels at 100%).
#[derive(Debug, Clone, Copy)]
pub struct ColorCorrection {
    /// Correction factors for each channel (0-255 = 0%-100%)
    factors: Rgb,
}

impl Default for ColorCorrection {
    fn default() -> Self {
        Self {
            factors: Rgb {
                r: 255,
                g: 255,
                b: 255,
            },
        }
    }
}

impl ColorCorrection {
    /// Create color correction from a u32 color value (0xRRGGBB format)
    pub const fn from_rgb(color: u32) -> Self {
        Self {
            factors: rgb_from_u32(color),
        }
    }

    /// Check if correction is active (not all channels at 100%)
    pub fn is_active(&self) -> bool {
        self.factors.r != 255 || self.factors.g != 255 || self.factors.b != 255
    }

    /// Apply color correction to a frame
    pub fn apply<const N: usize>(&self, frame: &mut [Rgb; N]) {
        if !self.is_active() {
            return;
        }

        for pixel in frame.iter_mut() {
            pixel.r = correct(pixel.r, self.factors.r);
            pixel.g = correct(pixel.g, self.factors.g);
            pixel.b = correct(pixel.b, self.factors.b);
        }
    }
}

#[inline]
fn correct(value: u8, factor: u8) -> u8 {
    if factor == 255 {
        value
    } else {
        scale8(value, factor)
    }
}
