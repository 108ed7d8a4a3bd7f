//! Effect system
//!
//! Effects are stateful per-frame pixel generators. Each effect implements
//! the `EffectImpl` trait and is stored by value, so nothing allocates.

mod fire;

pub use fire::{FireConfig, FireEffect, heat_color};

use embassy_time::Duration;

use crate::color::Rgb;

/// Trait for effect implementations
///
/// Each effect must be able to render a frame given the current time.
/// Effects are stateful and can maintain internal state between frames.
pub trait EffectImpl<const N: usize> {
    /// Render a single frame
    ///
    /// # Arguments
    /// * `time` - Current time since system start (for animations)
    ///
    /// # Returns
    /// Array of RGB colors for each LED
    fn render(&mut self, time: Duration) -> [Rgb; N];

    /// Reset effect state
    ///
    /// Called when effect is activated after being inactive.
    fn reset(&mut self) {}
}
