//! Pacing Task
//!
//! Drives the pacing loop on a fixed poll period. The strip itself is only
//! written once per show interval, the poll period just bounds the jitter.

use embassy_time::{Instant, Ticker};

use crate::{config::TIMING, infrastructure::types::PacingLoopImpl};

#[embassy_executor::task]
pub async fn pacing_task(pacing: PacingLoopImpl) {
    log::info!(
        "pacing: started, show interval {} ms",
        TIMING.show_interval.as_millis()
    );
    let mut ticker = Ticker::every(TIMING.poll_interval);
    loop {
        pacing.tick(Instant::now());
        ticker.next().await;
    }
}
