use embassy_sync::channel::Channel;
use halvoe_light_arbiter::{
    AtomicFireState, AtomicLightState, LightCommandState, Mode, ModeAuthority,
};

use crate::{
    config::{ENDPOINTS, TEMPERATURE},
    infrastructure::types::{
        EventChannel, EventReceiver, EventSender, ReportChannel, ReportReceiver,
    },
};

/// Global mode authority, the strip starts in light mode
pub static MODE: ModeAuthority = ModeAuthority::new(Mode::Light);

/// Global lock-free light endpoint attributes
pub static LIGHT_ENDPOINT: AtomicLightState = AtomicLightState::from_state(
    &LightCommandState::new(),
    ENDPOINTS.light_capabilities,
    TEMPERATURE,
);

/// Global lock-free fire switch attributes
pub static FIRE_ENDPOINT: AtomicFireState = AtomicFireState::new(ENDPOINTS.fire_description);

/// Inbound endpoint commands, written by the network stack and the button
pub static EVENTS: EventChannel = Channel::new();

/// Outbound attribute reports
pub static REPORTS: ReportChannel = Channel::new();

/// Sender for the network stack and local controls
pub fn event_sender() -> EventSender {
    EVENTS.sender()
}

/// Receiver for the endpoint task
pub fn event_receiver() -> EventReceiver {
    EVENTS.receiver()
}

/// Receiver for the outbound report drain
pub fn report_receiver() -> ReportReceiver {
    REPORTS.receiver()
}
