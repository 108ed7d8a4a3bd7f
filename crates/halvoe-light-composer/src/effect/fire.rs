//! Fire simulation effect
//!
//! One-dimensional heat simulation (Fire2012 by Mark Kriegsman): every frame
//! each cell cools a little, heat drifts up the strip and diffuses, new sparks
//! ignite near the bottom, and finally every cell's heat is mapped to a
//! black → red → yellow → white ramp.

use embassy_time::Duration;
use rand_core::RngCore;

use super::EffectImpl;
use crate::{
    color::Rgb,
    math8::{qadd8, qsub8, random8, random8_lim, random8_range, scale8_video},
};

/// Number of cells at the bottom of the strip where sparks can ignite
const SPARK_ZONE: u8 = 7;
/// Minimum heat added by a spark
const SPARK_HEAT_MIN: u8 = 160;
/// Upper bound (exclusive) of heat added by a spark
const SPARK_HEAT_MAX: u8 = 255;

/// Fire simulation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireConfig {
    /// How much the air cools as it rises.
    /// Less cooling means taller flames, more cooling means shorter flames.
    pub cooling: u8,
    /// Chance (out of 255) that a new spark ignites each frame.
    /// Higher chance means a more roaring fire.
    pub sparking: u8,
    /// Render the flame from the last LED towards the first
    pub reverse: bool,
}

impl FireConfig {
    pub const fn new(cooling: u8, sparking: u8) -> Self {
        Self {
            cooling,
            sparking,
            reverse: false,
        }
    }

    #[must_use]
    pub const fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }
}

impl Default for FireConfig {
    fn default() -> Self {
        Self::new(55, 120)
    }
}

/// Fire effect
///
/// Keeps one heat cell per LED. The heat is never read outside the effect.
pub struct FireEffect<R, const N: usize> {
    config: FireConfig,
    heat: [u8; N],
    rng: R,
}

impl<R: RngCore, const N: usize> FireEffect<R, N> {
    /// Create a new fire effect with a cold strip
    pub fn new(config: FireConfig, rng: R) -> Self {
        Self {
            config,
            heat: [0; N],
            rng,
        }
    }

    /// Total heat currently stored in the simulation
    pub fn total_heat(&self) -> u32 {
        self.heat.iter().map(|&h| u32::from(h)).sum()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn step(&mut self) {
        // Step 1. Cool down every cell a little
        let cooling_lim = ((usize::from(self.config.cooling) * 10) / N + 2).min(255) as u8;
        for cell in &mut self.heat {
            *cell = qsub8(*cell, random8_range(&mut self.rng, 0, cooling_lim));
        }

        // Step 2. Heat from each cell drifts up and diffuses a little
        for k in (2..N).rev() {
            let sum = u16::from(self.heat[k - 1]) + 2 * u16::from(self.heat[k - 2]);
            self.heat[k] = (sum / 3) as u8;
        }

        // Step 3. Randomly ignite new sparks of heat near the bottom
        if random8(&mut self.rng) < self.config.sparking {
            let y = usize::from(random8_lim(&mut self.rng, SPARK_ZONE));
            if y < N {
                let spark = random8_range(&mut self.rng, SPARK_HEAT_MIN, SPARK_HEAT_MAX);
                self.heat[y] = qadd8(self.heat[y], spark);
            }
        }
    }
}

impl<R: RngCore, const N: usize> EffectImpl<N> for FireEffect<R, N> {
    fn render(&mut self, _time: Duration) -> [Rgb; N] {
        let mut leds = [Rgb::default(); N];
        if N == 0 {
            return leds;
        }

        self.step();

        // Step 4. Map from heat cells to LED colors
        for (j, &heat) in self.heat.iter().enumerate() {
            let pixel = if self.config.reverse { N - 1 - j } else { j };
            leds[pixel] = heat_color(heat);
        }
        leds
    }

    fn reset(&mut self) {
        self.heat = [0; N];
    }
}

/// Approximate black body color for a heat value
///
/// The heat range is split in three ramps: black to red, red to yellow and
/// yellow to white.
pub fn heat_color(temperature: u8) -> Rgb {
    // Scale heat down from 0-255 to 0-191
    let t192 = scale8_video(temperature, 191);

    // Position within the current ramp, scaled up to 0..252
    let heatramp = (t192 & 0x3F) << 2;

    if t192 & 0x80 != 0 {
        // hottest third
        Rgb {
            r: 255,
            g: 255,
            b: heatramp,
        }
    } else if t192 & 0x40 != 0 {
        Rgb {
            r: 255,
            g: heatramp,
            b: 0,
        }
    } else {
        // coolest third
        Rgb {
            r: heatramp,
            g: 0,
            b: 0,
        }
    }
}
