//! Strip renderer
//!
//! The renderer owns the pixel buffer and is the only thing that writes to
//! the strip driver. Colors and effect frames only land in the buffer; the
//! buffer reaches hardware through [`StripRenderer::flush`], which is rate
//! limited so that bursts of commands never translate into bursts of
//! hardware writes. The last buffer contents before a flush win.

use embassy_time::{Duration, Instant};
use rand_core::RngCore;

use crate::{
    color::Rgb,
    driver::LedDriver,
    effect::{EffectImpl, FireEffect},
    processor::OutputProcessor,
};

/// What the next presented frame is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSource {
    /// Keep the buffer as last filled
    Solid,
    /// Render a fresh fire frame into the buffer first
    Fire,
}

/// Strip renderer
///
/// Generic over `D: LedDriver` to support different hardware backends and
/// over `R: RngCore` for the fire simulation.
pub struct StripRenderer<D, R, const N: usize> {
    /// Hardware driver for LED output
    driver: D,
    /// Commanded colors, one per LED
    pixels: [Rgb; N],
    /// Fire simulation, advanced only when a fire frame is requested
    fire: FireEffect<R, N>,
    /// Output processor applied to every flushed frame
    processor: OutputProcessor,
    /// Minimum time between two hardware writes
    flush_interval: Duration,
    /// Time of the last hardware write
    last_flush: Option<Instant>,
}

impl<D: LedDriver<N>, R: RngCore, const N: usize> StripRenderer<D, R, N> {
    /// Create a renderer with a black buffer
    ///
    /// Nothing is written to the driver until the first flush.
    pub fn new(
        driver: D,
        fire: FireEffect<R, N>,
        processor: OutputProcessor,
        flush_interval: Duration,
    ) -> Self {
        Self {
            driver,
            pixels: [Rgb::default(); N],
            fire,
            processor,
            flush_interval,
            last_flush: None,
        }
    }

    /// Current buffer contents (before output processing)
    pub fn pixels(&self) -> &[Rgb; N] {
        &self.pixels
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Fill every pixel with one color, does not flush
    pub fn set_solid(&mut self, color: Rgb) {
        self.pixels = [color; N];
    }

    /// Cool the fire down to a dark strip
    ///
    /// The next fire frame starts a fresh flame instead of resuming the one
    /// left behind the last time the fire was shown.
    pub fn reset_fire(&mut self) {
        self.fire.reset();
    }

    /// Render one fire frame into the buffer, does not flush
    pub fn render_fire_frame(&mut self, now: Instant) {
        self.pixels = self.fire.render(Duration::from_millis(now.as_millis()));
    }

    /// Whether enough time passed since the last hardware write
    pub fn flush_due(&self, now: Instant) -> bool {
        match self.last_flush {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.flush_interval,
        }
    }

    /// Push the buffer to the strip if the flush interval elapsed
    ///
    /// Returns whether a hardware write happened.
    pub fn flush(&mut self, now: Instant) -> bool {
        if !self.flush_due(now) {
            return false;
        }
        let frame = self.processor.apply(&self.pixels);
        self.driver.write(&frame);
        self.last_flush = Some(now);
        true
    }

    /// Draw and flush one frame if the flush interval elapsed
    ///
    /// Fire frames are only rendered when they are going to be shown, so the
    /// flame advances exactly once per hardware write.
    pub fn present(&mut self, now: Instant, source: FrameSource) -> bool {
        if !self.flush_due(now) {
            return false;
        }
        match source {
            FrameSource::Solid => {}
            FrameSource::Fire => self.render_fire_frame(now),
        }
        self.flush(now)
    }
}
