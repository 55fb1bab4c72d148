//! # Temporal Types: Clock Capability and Time of Day
//!
//! Records without explicit dates are stamped with the moment the build ran.
//! That moment is read through the [`Clock`] trait rather than directly from
//! the system, so a build can be replayed byte-for-byte with a
//! [`FixedClock`].
//!
//! [`TimeOfDay`] is the validated `time` field of a record: always rendered
//! as zero-padded 24-hour `HH:MM:SS`, never carrying sub-second precision.

use std::fmt;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TemporalError;

/// Source of the "current" local date and time.
pub trait Clock {
    /// The current local date and time, truncated to whole seconds.
    fn now(&self) -> NaiveDateTime;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Wall-clock time in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        truncate_to_seconds(Local::now().naive_local())
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(truncate_to_seconds(at))
    }

    /// Build from calendar components. Returns `None` for impossible dates or times.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Option<Self> {
        let at = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)?;
        Some(Self(at))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// A 24-hour time of day with seconds precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Parse a strict `HH:MM:SS` string.
    ///
    /// Each component must be exactly two ASCII digits. Hours run 00–23,
    /// minutes and seconds 00–59; leap seconds are rejected.
    pub fn parse(s: &str) -> Result<Self, TemporalError> {
        let bytes = s.as_bytes();
        let well_shaped = bytes.len() == 8
            && bytes[2] == b':'
            && bytes[5] == b':'
            && [0, 1, 3, 4, 6, 7].iter().all(|&i| bytes[i].is_ascii_digit());
        if !well_shaped {
            return Err(TemporalError::Malformed(s.to_string()));
        }

        let component = |i: usize| u32::from(bytes[i] - b'0') * 10 + u32::from(bytes[i + 1] - b'0');
        NaiveTime::from_hms_opt(component(0), component(3), component(6))
            .map(Self)
            .ok_or_else(|| TemporalError::OutOfRange(s.to_string()))
    }

    /// Take the time of day from a `NaiveTime`, discarding sub-seconds.
    pub fn from_naive(time: NaiveTime) -> Self {
        Self(time.with_nanosecond(0).unwrap_or(time))
    }

    pub fn as_naive_time(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M:%S"))
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Truncate a `NaiveDateTime` to seconds precision (discard nanoseconds).
fn truncate_to_seconds(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_nanosecond(0).unwrap_or(dt)
}
