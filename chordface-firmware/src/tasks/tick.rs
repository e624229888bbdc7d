//! Minute tick task
//!
//! Advances the wall clock once per minute. The face only changes at
//! five-minute bucket boundaries, so redraws are requested only then.
//! A host time sync re-anchors both the clock and the minute ticker.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Ticker};

use crate::channels::{REDRAW, TIME_SET};
use crate::clock;

#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_secs(60));

    loop {
        match select(ticker.next(), TIME_SET.wait()).await {
            Either::First(()) => {
                clock::advance();
                let sample = clock::now();
                if sample.is_bucket_boundary() {
                    debug!("Bucket boundary at {}:{}", sample.hour, sample.minute);
                    REDRAW.signal(());
                }
            }
            Either::Second(sync) => {
                info!("Time set to {}:{}", sync.hour, sync.minute);
                clock::set(sync);
                // Minute boundaries now count from the sync
                ticker.reset();
                REDRAW.signal(());
            }
        }
    }
}
