//! Time-of-day to hour-angle and minute-bucket mapping
//!
//! The watchface shows the hour as an angle and the minute as one of
//! twelve five-minute buckets. Swap mode exchanges the two raw sampled
//! values *before* either derivation runs; the two formulas are not
//! symmetric, so the exchange order is load-bearing and must not be
//! folded into a unit conversion.

use crate::trig::{Angle, TURN};

/// Wall-clock time sampled once per redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeSample {
    /// Hour of day, 0..=23
    pub hour: u8,
    /// Minute of hour, 0..=59
    pub minute: u8,
}

impl TimeSample {
    /// Create a sample from hour and minute of day.
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// True on five-minute bucket boundaries.
    ///
    /// Ticks arrive every minute but the rendered face only changes when
    /// the bucket does, so redraws are requested only when this holds.
    pub fn is_bucket_boundary(&self) -> bool {
        (u16::from(self.hour) * 60 + u16::from(self.minute)) % 5 == 0
    }
}

/// Derived hand geometry for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HandPosition {
    /// Hour hand angle in turn units
    pub hour_angle: Angle,
    /// Minute bucket, 0..=11
    pub bucket: u8,
}

impl HandPosition {
    /// Map a time sample to hand geometry.
    ///
    /// With `swap_hour_min` set, the raw fields are exchanged first
    /// (`hour = minute / 5`, `minute = hour * 5`) and the unchanged base
    /// formulas applied afterwards.
    pub fn from_time(sample: TimeSample, swap_hour_min: bool) -> Self {
        let (hour, minute) = if swap_hour_min {
            (sample.minute / 5, sample.hour * 5)
        } else {
            (sample.hour, sample.minute)
        };

        Self {
            hour_angle: TURN * i32::from(hour % 12) / 12,
            bucket: (minute / 5) % 12,
        }
    }
}
