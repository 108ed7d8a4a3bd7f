//! Test device: the arbitration core wired to recording drivers.

#![allow(dead_code)]

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_time::{Duration, Instant};
use halvoe_light_arbiter::{
    AtomicFireState, AtomicLightState, EndpointController, EndpointReport, FireUsecases,
    LightCommandState, LightUsecases, Mode, ModeAuthority, PacingLoop, SharedIndicator,
    SharedStrip,
    domain::{
        entity::capabilities,
        ports::{ReportError, ReportSink},
    },
};
use halvoe_light_composer::{
    FireConfig, FireEffect, IndicatorDriver, LedDriver, OutputProcessor, Rgb, StripRenderer,
    TemperatureRange,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;

pub const LEDS: usize = 8;
pub const SHOW_INTERVAL: Duration = Duration::from_millis(66);

#[derive(Default)]
pub struct RecordingDriver {
    pub frames: Vec<[Rgb; LEDS]>,
}

impl LedDriver<LEDS> for RecordingDriver {
    fn write(&mut self, colors: &[Rgb; LEDS]) {
        self.frames.push(*colors);
    }
}

#[derive(Default)]
pub struct RecordingIndicator {
    pub colors: Vec<Rgb>,
}

impl IndicatorDriver for RecordingIndicator {
    fn write(&mut self, color: Rgb) {
        self.colors.push(color);
    }
}

#[derive(Default)]
pub struct RecordingReports {
    pub reports: RefCell<Vec<EndpointReport>>,
    pub busy: bool,
}

impl ReportSink for RecordingReports {
    fn report(&self, report: EndpointReport) -> Result<(), ReportError> {
        if self.busy {
            return Err(ReportError::Busy);
        }
        self.reports.borrow_mut().push(report);
        Ok(())
    }
}

pub type Strip = SharedStrip<NoopRawMutex, RecordingDriver, SmallRng, LEDS>;
pub type Indicator = SharedIndicator<NoopRawMutex, RecordingIndicator>;
pub type Light<'a> = LightUsecases<'a, AtomicLightState, Strip, Indicator, RecordingReports>;
pub type Fire<'a> = FireUsecases<'a, AtomicFireState, Strip, RecordingReports>;

pub struct Device {
    pub mode: ModeAuthority,
    pub light_state: AtomicLightState,
    pub fire_state: AtomicFireState,
    pub strip: Strip,
    pub indicator: Indicator,
    pub reports: RecordingReports,
}

impl Device {
    /// Device with an always sparking fire, so fire frames are never blank
    pub fn new() -> Self {
        Self::with_sparking(255)
    }

    pub fn with_sparking(sparking: u8) -> Self {
        Self::build(sparking, TemperatureRange::default())
    }

    pub fn with_temperature_range(range: TemperatureRange) -> Self {
        Self::build(255, range)
    }

    fn build(sparking: u8, temperature_range: TemperatureRange) -> Self {
        let renderer = StripRenderer::new(
            RecordingDriver::default(),
            FireEffect::new(FireConfig::new(75, sparking), SmallRng::seed_from_u64(5)),
            OutputProcessor::default(),
            SHOW_INTERVAL,
        );
        Self {
            mode: ModeAuthority::new(Mode::Light),
            light_state: AtomicLightState::from_state(
                &LightCommandState::new(),
                capabilities::XY | capabilities::COLOR_TEMP,
                temperature_range,
            ),
            fire_state: AtomicFireState::new("Feuer"),
            strip: SharedStrip::new(renderer),
            indicator: SharedIndicator::new(RecordingIndicator::default()),
            reports: RecordingReports::default(),
        }
    }

    pub fn light(&self) -> Light<'_> {
        LightUsecases::new(
            &self.mode,
            &self.light_state,
            &self.strip,
            &self.indicator,
            &self.reports,
        )
    }

    pub fn fire(&self) -> Fire<'_> {
        FireUsecases::new(&self.mode, &self.fire_state, &self.strip, &self.reports)
    }

    /// Commanded colors, before output processing
    pub fn pixels(&self) -> [Rgb; LEDS] {
        self.strip.with(|renderer| *renderer.pixels())
    }

    /// Frames written to the strip driver
    pub fn frames(&self) -> Vec<[Rgb; LEDS]> {
        self.strip.with(|renderer| renderer.driver().frames.clone())
    }

    pub fn indicator_color(&self) -> Option<Rgb> {
        self.indicator.with(|driver| driver.colors.last().copied())
    }

    pub fn reports(&self) -> Vec<EndpointReport> {
        self.reports.reports.borrow().clone()
    }
}

pub fn controller<'a>(
    device: &'a Device,
    light: &'a Light<'a>,
    fire: &'a Fire<'a>,
) -> EndpointController<'a, Light<'a>, Fire<'a>, AtomicLightState, AtomicFireState> {
    EndpointController::new(light, fire, &device.light_state, &device.fire_state)
}

pub fn pacing<'a>(
    device: &'a Device,
    light: &'a Light<'a>,
    fire: &'a Fire<'a>,
) -> PacingLoop<'a, Strip, Light<'a>, Fire<'a>> {
    PacingLoop::new(&device.mode, &device.strip, light, fire)
}

pub fn at(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

pub fn solid(r: u8, g: u8, b: u8) -> [Rgb; LEDS] {
    [Rgb::new(r, g, b); LEDS]
}
