//! Color temperature model
//!
//! Temperatures arrive from the network in mireds. They are converted to
//! Kelvin and mapped linearly onto a warm/cold channel pair: the warm value
//! drives red and green, the cold value drives blue.

use super::{Rgb, scale_rgb};
use crate::math8::{clamp8, map_range};

/// Default warm end of the range, in Kelvin
pub const TEMPERATURE_WARM_KELVIN: u16 = 2000;
/// Default cold end of the range, in Kelvin
pub const TEMPERATURE_COLD_KELVIN: u16 = 6500;

/// Convert a Kelvin temperature to mireds
///
/// Returns 0 for a zero input.
pub fn kelvin_to_mireds(kelvin: u16) -> u16 {
    reciprocal(kelvin)
}

/// Convert a mireds value to Kelvin
///
/// Returns 0 for a zero input.
pub fn mireds_to_kelvin(mireds: u16) -> u16 {
    reciprocal(mireds)
}

#[allow(clippy::cast_possible_truncation)]
fn reciprocal(value: u16) -> u16 {
    if value == 0 {
        return 0;
    }
    // inputs below 16 overflow u16
    (1_000_000 / u32::from(value)).min(u32::from(u16::MAX)) as u16
}

/// Supported color temperature range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureRange {
    /// Warmest supported temperature in Kelvin
    pub warm_kelvin: u16,
    /// Coldest supported temperature in Kelvin
    pub cold_kelvin: u16,
}

impl TemperatureRange {
    pub const fn new(warm_kelvin: u16, cold_kelvin: u16) -> Self {
        Self {
            warm_kelvin,
            cold_kelvin,
        }
    }

    /// Range expressed in mireds as `(min, max)`
    ///
    /// High Kelvin is low mireds, so the cold end is the minimum.
    pub fn mireds(&self) -> (u16, u16) {
        (
            kelvin_to_mireds(self.cold_kelvin),
            kelvin_to_mireds(self.warm_kelvin),
        )
    }
}
