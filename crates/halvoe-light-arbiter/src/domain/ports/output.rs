use embassy_time::Instant;
use halvoe_light_composer::{FrameSource, Rgb};

/// Shared access to the strip renderer
///
/// Every call is one critical section on the renderer.
pub trait StripPort {
    /// Fill the pixel buffer with one color, does not flush
    fn set_solid(&self, color: Rgb);

    /// Drop the fire simulation state so the next flame starts cold
    fn reset_fire(&self);

    /// Render one fire frame into the pixel buffer, does not flush
    fn render_fire_frame(&self, now: Instant);

    /// Push the buffer to the strip if the show interval elapsed
    fn flush(&self, now: Instant) -> bool;

    /// Draw from `source` and flush, only if the show interval elapsed
    fn present(&self, now: Instant, source: FrameSource) -> bool;
}

/// Shared access to the onboard indicator LED
pub trait IndicatorPort {
    fn show(&self, color: Rgb);
}
