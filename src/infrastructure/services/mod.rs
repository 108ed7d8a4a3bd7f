mod endpoints;

pub use endpoints::{
    EVENTS, FIRE_ENDPOINT, LIGHT_ENDPOINT, MODE, REPORTS, event_receiver, event_sender,
    report_receiver,
};
