//! Endpoint Tasks
//!
//! The bridge between the network stack and the arbitration core: commands
//! are queued by whoever receives them and dispatched here in order, reports
//! made by the core are drained for the network stack.

use crate::infrastructure::types::{EndpointControllerImpl, EventReceiver, ReportReceiver};

/// Dispatch queued endpoint commands
#[embassy_executor::task]
pub async fn endpoint_task(controller: EndpointControllerImpl, events: EventReceiver) {
    loop {
        let event = events.receive().await;
        controller.handle(event);
    }
}

/// Drain outbound attribute reports
#[embassy_executor::task]
pub async fn report_task(reports: ReportReceiver) {
    loop {
        let report = reports.receive().await;
        log::info!("report: {:?}", report);
    }
}
