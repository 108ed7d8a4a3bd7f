mod endpoint;
mod pacing;

pub use endpoint::{endpoint_task, report_task};
pub use pacing::pacing_task;
