use embassy_sync::{blocking_mutex::raw::RawMutex, channel::Channel};

use crate::domain::{
    dto::EndpointReport,
    ports::{ReportError, ReportSink},
};

/// Reports are queued for the network task without waiting
impl<M: RawMutex, const N: usize> ReportSink for Channel<M, EndpointReport, N> {
    fn report(&self, report: EndpointReport) -> Result<(), ReportError> {
        self.try_send(report).map_err(|_| ReportError::Busy)
    }
}

/// Send a report, logging instead of failing when the queue is full
pub(crate) fn report_or_warn<P: ReportSink + ?Sized>(reports: &P, report: EndpointReport) {
    if let Err(e) = reports.report(report) {
        log::warn!("report: dropped {:?}: {:?}", report, e);
    }
}
