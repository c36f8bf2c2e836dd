//! `DateTime` — a local date-time — and `TimeRange`, the start/end pair every
//! working-time calculation consumes.

use crate::date::Date;
use crate::time_of_day::{TimeOfDay, NANOS_PER_DAY, NANOS_PER_MINUTE};
use wt_core::errors::{Error, Result};
use wt_core::{Hour, Minutes, Year};

/// A date and wall-clock time with no time zone attached.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    date: Date,
    time: TimeOfDay,
}

impl DateTime {
    /// Combine a date and a time of day.
    pub fn new(date: Date, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    /// Build from calendar and clock components.
    pub fn from_ymd_hms(
        year: Year,
        month: u8,
        day: u8,
        hour: Hour,
        minute: u8,
        second: u8,
    ) -> Result<Self> {
        Ok(Self::new(
            Date::from_ymd(year, month, day)?,
            TimeOfDay::from_hms(hour, minute, second)?,
        ))
    }

    /// The date part.
    pub fn date(&self) -> Date {
        self.date
    }

    /// The time-of-day part.
    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    /// The year of the date part.
    pub fn year(&self) -> Year {
        self.date.year()
    }

    /// Same date, different time of day.
    pub fn with_time(self, time: TimeOfDay) -> Self {
        Self { time, ..self }
    }

    /// Whole minutes elapsed from `self` to `later`, truncated toward zero.
    ///
    /// Negative when `later` precedes `self`.
    pub fn minutes_until(self, later: DateTime) -> Minutes {
        let days = i128::from(later.date - self.date);
        let nanos = days * i128::from(NANOS_PER_DAY) + i128::from(later.time.nanos_of_day())
            - i128::from(self.time.nanos_of_day());
        (nanos / i128::from(NANOS_PER_MINUTE)) as Minutes
    }
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.date.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}T{}", self.time)
    }
}

impl std::fmt::Debug for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DateTime({self})")
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDateTime> for DateTime {
    type Error = Error;

    fn try_from(dt: chrono::NaiveDateTime) -> Result<Self> {
        use chrono::Timelike;
        let date = Date::try_from(dt.date())?;
        // chrono folds leap seconds into the nanosecond field.
        let nano = dt.nanosecond().min(999_999_999);
        let time = TimeOfDay::from_hms_nano(
            dt.hour() as Hour,
            dt.minute() as u8,
            dt.second() as u8,
            nano,
        )?;
        Ok(Self::new(date, time))
    }
}

/// An ordered (start, end) instant pair.
///
/// The pair is not required to be increasing: an end before the start is a
/// legitimate input that calculations report as an inverted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    /// Start instant.
    pub start: DateTime,
    /// End instant.
    pub end: DateTime,
}

impl TimeRange {
    /// Pair two instants.
    pub fn new(start: DateTime, end: DateTime) -> Self {
        Self { start, end }
    }

    /// Pair two optional instants, failing with [`Error::MissingInput`] when
    /// either is absent.
    pub fn from_options(start: Option<DateTime>, end: Option<DateTime>) -> Result<Self> {
        let start = start.ok_or(Error::MissingInput("start"))?;
        let end = end.ok_or(Error::MissingInput("end"))?;
        Ok(Self::new(start, end))
    }

    /// `true` when the end lies strictly before the start.
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }
}
