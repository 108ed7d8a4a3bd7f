//! Pacing loop
//!
//! One tick reconciles both endpoints, then draws and flushes the strip from
//! whatever the active mode says. Command callbacks never flush, so the
//! strip refreshes at most once per show interval no matter how fast
//! commands arrive.

use embassy_time::Instant;
use halvoe_light_composer::FrameSource;

use crate::{
    domain::{
        entity::Mode,
        ports::{Reconcile, StripPort},
    },
    services::ModeAuthority,
};

pub struct PacingLoop<'a, S, L, F> {
    mode: &'a ModeAuthority,
    strip: &'a S,
    light: &'a L,
    fire: &'a F,
}

impl<'a, S, L, F> PacingLoop<'a, S, L, F>
where
    S: StripPort,
    L: Reconcile,
    F: Reconcile,
{
    pub fn new(mode: &'a ModeAuthority, strip: &'a S, light: &'a L, fire: &'a F) -> Self {
        Self {
            mode,
            strip,
            light,
            fire,
        }
    }

    /// Run one pacing tick, returns whether a frame reached the strip
    pub fn tick(&self, now: Instant) -> bool {
        self.light.reconcile();
        self.fire.reconcile();

        let source = match self.mode.get() {
            Mode::Light => FrameSource::Solid,
            Mode::Fire => FrameSource::Fire,
        };
        self.strip.present(now, source)
    }
}
