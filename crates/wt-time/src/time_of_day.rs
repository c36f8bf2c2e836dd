//! `TimeOfDay` — wall-clock time within a single day.

use wt_core::errors::{Error, Result};
use wt_core::Hour;

pub(crate) const NANOS_PER_SECOND: u64 = 1_000_000_000;
pub(crate) const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
pub(crate) const NANOS_PER_DAY: u64 = 24 * 60 * NANOS_PER_MINUTE;

/// A time of day with nanosecond precision, `00:00:00` to `23:59:59.999999999`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay {
    nanos: u64,
}

impl TimeOfDay {
    /// Midnight.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { nanos: 0 };

    /// Create a time from hour, minute, and second.
    pub fn from_hms(hour: Hour, minute: u8, second: u8) -> Result<Self> {
        Self::from_hms_nano(hour, minute, second, 0)
    }

    /// Create a time from hour, minute, second, and nanosecond.
    pub fn from_hms_nano(hour: Hour, minute: u8, second: u8, nano: u32) -> Result<Self> {
        if hour > 23 || minute > 59 || second > 59 || u64::from(nano) >= NANOS_PER_SECOND {
            return Err(Error::InvalidArgument(format!(
                "invalid time of day {hour:02}:{minute:02}:{second:02}.{nano:09}"
            )));
        }
        let secs = u64::from(hour) * 3600 + u64::from(minute) * 60 + u64::from(second);
        Ok(TimeOfDay {
            nanos: secs * NANOS_PER_SECOND + u64::from(nano),
        })
    }

    /// The full hour `hour:00:00`.
    pub fn from_hour(hour: Hour) -> Result<Self> {
        Self::from_hms(hour, 0, 0)
    }

    /// The full hour `hour:00:00` for an hour already known to be below 24.
    pub(crate) const fn from_hour_unchecked(hour: Hour) -> Self {
        debug_assert!(hour < 24);
        TimeOfDay {
            nanos: hour as u64 * 60 * NANOS_PER_MINUTE,
        }
    }

    /// Nanoseconds elapsed since midnight.
    pub fn nanos_of_day(&self) -> u64 {
        self.nanos
    }

    /// Hour component (0–23).
    pub fn hour(&self) -> Hour {
        (self.nanos / (60 * NANOS_PER_MINUTE)) as Hour
    }

    /// Minute component (0–59).
    pub fn minute(&self) -> u8 {
        (self.nanos / NANOS_PER_MINUTE % 60) as u8
    }

    /// Second component (0–59).
    pub fn second(&self) -> u8 {
        (self.nanos / NANOS_PER_SECOND % 60) as u8
    }

    /// Sub-second component in nanoseconds.
    pub fn nanosecond(&self) -> u32 {
        (self.nanos % NANOS_PER_SECOND) as u32
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())?;
        match self.nanosecond() {
            0 => Ok(()),
            n => write!(f, ".{n:09}"),
        }
    }
}

impl std::fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TimeOfDay({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components() {
        let t = TimeOfDay::from_hms_nano(17, 30, 5, 250).unwrap();
        assert_eq!((t.hour(), t.minute(), t.second(), t.nanosecond()), (17, 30, 5, 250));
        assert_eq!(t.to_string(), "17:30:05.000000250");
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(TimeOfDay::from_hms(24, 0, 0).is_err());
        assert!(TimeOfDay::from_hms(9, 60, 0).is_err());
        assert!(TimeOfDay::from_hms_nano(9, 0, 0, 1_000_000_000).is_err());
    }

    #[test]
    fn ordering_follows_clock() {
        let nine = TimeOfDay::from_hour(9).unwrap();
        let eighteen = TimeOfDay::from_hour(18).unwrap();
        assert!(TimeOfDay::MIDNIGHT < nine && nine < eighteen);
        assert_eq!(eighteen.to_string(), "18:00:00");
    }
}
