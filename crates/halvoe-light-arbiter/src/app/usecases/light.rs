use core::sync::atomic::{AtomicBool, Ordering};

use halvoe_light_composer::{
    Rgb,
    color::{BLACK, WHITE, scale_rgb},
};

use crate::{
    domain::{
        dto::EndpointReport,
        entity::Mode,
        ports::{IndicatorPort, LightEndpoint, LightUsecasesPort, Reconcile, ReportSink, StripPort},
    },
    services::{ModeAuthority, report_or_warn},
};

/// Light control adapter
///
/// Turns light endpoint commands into mode transitions and solid strip
/// colors, and keeps the endpoint's on/off attribute in line with the mode.
pub struct LightUsecases<'a, E, S, I, P> {
    mode: &'a ModeAuthority,
    endpoint: &'a E,
    strip: &'a S,
    indicator: &'a I,
    reports: &'a P,
    /// Next identify step shows white
    identify_white: AtomicBool,
}

impl<'a, E, S, I, P> LightUsecases<'a, E, S, I, P>
where
    E: LightEndpoint,
    S: StripPort,
    I: IndicatorPort,
    P: ReportSink,
{
    pub fn new(
        mode: &'a ModeAuthority,
        endpoint: &'a E,
        strip: &'a S,
        indicator: &'a I,
        reports: &'a P,
    ) -> Self {
        Self {
            mode,
            endpoint,
            strip,
            indicator,
            reports,
            identify_white: AtomicBool::new(true),
        }
    }

    fn show(&self, color: Rgb) {
        self.indicator.show(color);
        self.strip.set_solid(color);
    }

    fn turn_on(&self, color: Rgb) {
        self.mode.set(Mode::Light);
        log::debug!("light: showing {:?}", color);
        self.show(color);
    }

    /// The indicator belongs to the light alone, the strip only while the
    /// light owns it
    fn turn_off(&self) {
        self.indicator.show(BLACK);
        if self.mode.get() == Mode::Light {
            self.strip.set_solid(BLACK);
        }
        log::debug!("light: off");
    }
}

impl<E, S, I, P> LightUsecasesPort for LightUsecases<'_, E, S, I, P>
where
    E: LightEndpoint,
    S: StripPort,
    I: IndicatorPort,
    P: ReportSink,
{
    fn on_rgb_command(&self, on: bool, red: u8, green: u8, blue: u8, level: u8) {
        if !on {
            self.turn_off();
            return;
        }
        self.turn_on(scale_rgb(Rgb::new(red, green, blue), level));
    }

    fn on_temperature_command(&self, on: bool, level: u8, mireds: u16) {
        if !on {
            self.turn_off();
            return;
        }
        match self.endpoint.temperature_range().color(mireds, level) {
            Some(color) => self.turn_on(color),
            None => {
                log::warn!("light: ignoring temperature of 0 mireds");
                self.turn_off();
            }
        }
    }

    fn on_identify(&self, time: u16) {
        if time == 0 {
            self.identify_white.store(true, Ordering::Relaxed);
            let color = self
                .endpoint
                .light_state()
                .displayed_color(&self.endpoint.temperature_range())
                .unwrap_or(BLACK);
            log::debug!("light: identify done");
            self.show(color);
            return;
        }

        let white = self.identify_white.fetch_xor(true, Ordering::Relaxed);
        self.show(if white { WHITE } else { BLACK });
    }
}

impl<E, S, I, P> Reconcile for LightUsecases<'_, E, S, I, P>
where
    E: LightEndpoint,
    S: StripPort,
    I: IndicatorPort,
    P: ReportSink,
{
    fn reconcile(&self) {
        if !self.endpoint.light_state().on || self.mode.get() == Mode::Light {
            return;
        }
        log::info!("light: switched off, strip is taken by {:?}", self.mode.get());
        self.endpoint.set_light_on(false);
        report_or_warn(self.reports, EndpointReport::LightOnOff(false));
    }
}
