//! Wall-clock state
//!
//! The watch keeps time as a minute-of-day counter advanced by the tick
//! task and re-anchored by host time synchronization. The counter is
//! atomic because the tick task writes it while the render task samples
//! it.

use portable_atomic::{AtomicU16, Ordering};

use chordface_core::clock::TimeSample;
use chordface_protocol::TimeSync;

const MINUTES_PER_DAY: u16 = 24 * 60;

static MINUTE_OF_DAY: AtomicU16 = AtomicU16::new(0);

/// Set the wall clock from a host synchronization message.
pub fn set(sync: TimeSync) {
    let minute = u16::from(sync.hour) * 60 + u16::from(sync.minute);
    MINUTE_OF_DAY.store(minute, Ordering::Relaxed);
}

/// Advance the clock by one minute, wrapping at midnight.
///
/// Only the tick task calls this; load and store need not be one
/// atomic step.
pub fn advance() {
    let next = (MINUTE_OF_DAY.load(Ordering::Relaxed) + 1) % MINUTES_PER_DAY;
    MINUTE_OF_DAY.store(next, Ordering::Relaxed);
}

/// Sample the current wall-clock time.
pub fn now() -> TimeSample {
    let minute = MINUTE_OF_DAY.load(Ordering::Relaxed);
    TimeSample::new((minute / 60) as u8, (minute % 60) as u8)
}
