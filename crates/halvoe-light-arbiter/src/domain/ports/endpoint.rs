use halvoe_light_composer::TemperatureRange;

use crate::domain::{
    dto::EndpointReport,
    entity::{FireCommandState, LightCommandState},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportError {
    /// Outbound report queue is full
    Busy,
}

/// Attribute storage of the color dimmable light endpoint
pub trait LightEndpoint {
    /// Snapshot of the endpoint attributes
    fn light_state(&self) -> LightCommandState;

    /// Color temperature range the endpoint advertises
    fn temperature_range(&self) -> TemperatureRange;

    /// Overwrite the reported on/off attribute
    fn set_light_on(&self, on: bool);

    /// Record an RGB command, switches the color mode to RGB
    fn record_rgb(&self, on: bool, red: u8, green: u8, blue: u8, level: u8);

    /// Record a temperature command, switches the color mode to temperature
    fn record_temperature(&self, on: bool, level: u8, mireds: u16);
}

/// Attribute storage of the fire switch endpoint
pub trait FireEndpoint {
    /// Snapshot of the endpoint attributes
    fn fire_state(&self) -> FireCommandState;

    /// Overwrite the binary output attribute
    fn set_fire_on(&self, on: bool);
}

/// Outbound channel for attribute reports
pub trait ReportSink {
    fn report(&self, report: EndpointReport) -> Result<(), ReportError>;
}
