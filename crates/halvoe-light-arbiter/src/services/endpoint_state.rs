use core::sync::atomic::{AtomicBool, AtomicU8, AtomicU16, Ordering};

use halvoe_light_composer::TemperatureRange;

use crate::domain::{
    entity::{ColorMode, FireCommandState, LightCommandState},
    ports::{FireEndpoint, LightEndpoint},
};

/// Atomic light endpoint attributes
/// Uses atomics for lock-free access from the network and pacing contexts.
#[derive(Debug)]
pub struct AtomicLightState {
    on: AtomicBool,
    level: AtomicU8,
    r: AtomicU8,
    g: AtomicU8,
    b: AtomicU8,
    mireds: AtomicU16,
    color_mode: AtomicU8,
    capabilities: u16,
    temperature_range: TemperatureRange,
}

impl AtomicLightState {
    pub const fn from_state(
        state: &LightCommandState,
        capabilities: u16,
        temperature_range: TemperatureRange,
    ) -> Self {
        Self {
            on: AtomicBool::new(state.on),
            level: AtomicU8::new(state.level),
            r: AtomicU8::new(state.color.0),
            g: AtomicU8::new(state.color.1),
            b: AtomicU8::new(state.color.2),
            mireds: AtomicU16::new(state.mireds),
            color_mode: AtomicU8::new(state.color_mode.as_u8()),
            capabilities,
            temperature_range,
        }
    }

    /// Color control capability bits
    pub fn capabilities(&self) -> u16 {
        self.capabilities
    }

    /// Supported temperature range as `(min, max)` mireds
    pub fn mireds_range(&self) -> (u16, u16) {
        self.temperature_range.mireds()
    }
}

impl LightEndpoint for AtomicLightState {
    fn light_state(&self) -> LightCommandState {
        let r = self.r.load(Ordering::Relaxed);
        let g = self.g.load(Ordering::Relaxed);
        let b = self.b.load(Ordering::Relaxed);

        let color_mode = ColorMode::from_u8(self.color_mode.load(Ordering::Relaxed))
            .unwrap_or_default();

        LightCommandState {
            on: self.on.load(Ordering::Relaxed),
            color: (r, g, b),
            level: self.level.load(Ordering::Relaxed),
            mireds: self.mireds.load(Ordering::Relaxed),
            color_mode,
        }
    }

    fn temperature_range(&self) -> TemperatureRange {
        self.temperature_range
    }

    fn set_light_on(&self, on: bool) {
        self.on.store(on, Ordering::Relaxed);
    }

    fn record_rgb(&self, on: bool, red: u8, green: u8, blue: u8, level: u8) {
        self.r.store(red, Ordering::Relaxed);
        self.g.store(green, Ordering::Relaxed);
        self.b.store(blue, Ordering::Relaxed);
        self.level.store(level, Ordering::Relaxed);
        self.color_mode.store(ColorMode::Rgb.as_u8(), Ordering::Relaxed);
        self.on.store(on, Ordering::Relaxed);
    }

    fn record_temperature(&self, on: bool, level: u8, mireds: u16) {
        self.level.store(level, Ordering::Relaxed);
        self.mireds.store(mireds, Ordering::Relaxed);
        self.color_mode.store(ColorMode::Temperature.as_u8(), Ordering::Relaxed);
        self.on.store(on, Ordering::Relaxed);
    }
}

/// Atomic fire switch attributes
#[derive(Debug)]
pub struct AtomicFireState {
    on: AtomicBool,
    description: &'static str,
}

impl AtomicFireState {
    pub const fn new(description: &'static str) -> Self {
        Self {
            on: AtomicBool::new(false),
            description,
        }
    }

    /// Binary output description shown by the coordinator
    pub fn description(&self) -> &'static str {
        self.description
    }
}

impl FireEndpoint for AtomicFireState {
    fn fire_state(&self) -> FireCommandState {
        FireCommandState {
            on: self.on.load(Ordering::Relaxed),
        }
    }

    fn set_fire_on(&self, on: bool) {
        self.on.store(on, Ordering::Relaxed);
    }
}
