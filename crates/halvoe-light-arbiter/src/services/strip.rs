use core::cell::RefCell;

use embassy_sync::blocking_mutex::{Mutex, raw::RawMutex};
use embassy_time::Instant;
use halvoe_light_composer::{FrameSource, IndicatorDriver, LedDriver, Rgb, StripRenderer};
use rand_core::RngCore;

use crate::domain::ports::{IndicatorPort, StripPort};

/// Strip renderer shared between command callbacks and the pacing loop
///
/// Every operation, including draw-and-flush, runs under one lock.
pub struct SharedStrip<M: RawMutex, D, R, const N: usize> {
    renderer: Mutex<M, RefCell<StripRenderer<D, R, N>>>,
}

impl<M: RawMutex, D: LedDriver<N>, R: RngCore, const N: usize> SharedStrip<M, D, R, N> {
    pub const fn new(renderer: StripRenderer<D, R, N>) -> Self {
        Self {
            renderer: Mutex::new(RefCell::new(renderer)),
        }
    }

    /// Run `f` with exclusive access to the renderer
    pub fn with<T>(&self, f: impl FnOnce(&mut StripRenderer<D, R, N>) -> T) -> T {
        self.renderer.lock(|cell| f(&mut cell.borrow_mut()))
    }
}

impl<M: RawMutex, D: LedDriver<N>, R: RngCore, const N: usize> StripPort
    for SharedStrip<M, D, R, N>
{
    fn set_solid(&self, color: Rgb) {
        self.with(|renderer| renderer.set_solid(color));
    }

    fn reset_fire(&self) {
        self.with(StripRenderer::reset_fire);
    }

    fn render_fire_frame(&self, now: Instant) {
        self.with(|renderer| renderer.render_fire_frame(now));
    }

    fn flush(&self, now: Instant) -> bool {
        self.with(|renderer| renderer.flush(now))
    }

    fn present(&self, now: Instant, source: FrameSource) -> bool {
        let shown = self.with(|renderer| renderer.present(now, source));
        if shown {
            log::trace!("strip: frame shown at {} ms", now.as_millis());
        }
        shown
    }
}

/// Onboard indicator LED behind a lock
pub struct SharedIndicator<M: RawMutex, I> {
    driver: Mutex<M, RefCell<I>>,
}

impl<M: RawMutex, I: IndicatorDriver> SharedIndicator<M, I> {
    pub const fn new(driver: I) -> Self {
        Self {
            driver: Mutex::new(RefCell::new(driver)),
        }
    }

    /// Run `f` with exclusive access to the driver
    pub fn with<T>(&self, f: impl FnOnce(&mut I) -> T) -> T {
        self.driver.lock(|cell| f(&mut cell.borrow_mut()))
    }
}

impl<M: RawMutex, I: IndicatorDriver> IndicatorPort for SharedIndicator<M, I> {
    fn show(&self, color: Rgb) {
        self.with(|driver| driver.write(color));
    }
}
