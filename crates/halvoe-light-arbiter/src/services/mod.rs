mod endpoint_state;
mod mode;
mod report;
mod strip;

pub use endpoint_state::{AtomicFireState, AtomicLightState};
pub use mode::ModeAuthority;
pub(crate) use report::report_or_warn;
pub use strip::{SharedIndicator, SharedStrip};
