use halvoe_light_composer::color::BLACK;

use crate::{
    domain::{
        dto::EndpointReport,
        entity::Mode,
        ports::{FireEndpoint, FireUsecasesPort, Reconcile, ReportSink, StripPort},
    },
    services::{ModeAuthority, report_or_warn},
};

/// Fire control adapter
pub struct FireUsecases<'a, E, S, P> {
    mode: &'a ModeAuthority,
    endpoint: &'a E,
    strip: &'a S,
    reports: &'a P,
}

impl<'a, E, S, P> FireUsecases<'a, E, S, P>
where
    E: FireEndpoint,
    S: StripPort,
    P: ReportSink,
{
    pub fn new(mode: &'a ModeAuthority, endpoint: &'a E, strip: &'a S, reports: &'a P) -> Self {
        Self {
            mode,
            endpoint,
            strip,
            reports,
        }
    }
}

impl<E, S, P> FireUsecasesPort for FireUsecases<'_, E, S, P>
where
    E: FireEndpoint,
    S: StripPort,
    P: ReportSink,
{
    fn on_fire_switch(&self, on: bool) {
        if on {
            if self.mode.get() != Mode::Fire {
                self.strip.reset_fire();
            }
            self.mode.set(Mode::Fire);
        } else {
            self.strip.set_solid(BLACK);
            self.mode.set(Mode::Light);
        }
    }

    fn toggle(&self) {
        let on = !self.endpoint.fire_state().on;
        log::info!("fire: toggled locally to {}", on);
        self.endpoint.set_fire_on(on);
        report_or_warn(self.reports, EndpointReport::FireOnOff(on));
        self.on_fire_switch(on);
    }
}

impl<E, S, P> Reconcile for FireUsecases<'_, E, S, P>
where
    E: FireEndpoint,
    S: StripPort,
    P: ReportSink,
{
    fn reconcile(&self) {
        if !self.endpoint.fire_state().on || self.mode.get() == Mode::Fire {
            return;
        }
        log::info!("fire: switched off, strip is taken by {:?}", self.mode.get());
        self.endpoint.set_fire_on(false);
        report_or_warn(self.reports, EndpointReport::FireOnOff(false));
    }
}
