//! LED Driver abstraction layer
//!
//! Provides trait-based abstractions for the strip and the onboard indicator,
//! allowing the renderer to stay hardware-agnostic.

use crate::color::Rgb;

/// Abstract LED strip driver
///
/// Implement this trait to support different hardware platforms.
/// The renderer is generic over this trait. Writes are fire-and-forget:
/// a failed transfer is dropped by the implementation.
pub trait LedDriver<const N: usize> {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb; N]);
}

/// Single onboard RGB indicator LED
///
/// Callers always pass colors in RGB order, any channel swapping required by
/// the board belongs to the implementation.
pub trait IndicatorDriver {
    /// Show a color on the indicator
    fn write(&mut self, color: Rgb);
}
