//! Construction-time configuration of a [`WorkCalendar`](crate::WorkCalendar).

use crate::time_of_day::TimeOfDay;
use crate::weekday::Weekday;
use wt_core::errors::Result;
use wt_core::{ensure, Hour};

/// Daily work window, working week, and holiday options.
///
/// With the `serde` feature the struct can be read from any serde format;
/// absent fields take their [`Default`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorkCalendarConfig {
    /// Hour the working day starts (inclusive).
    pub work_start_hour: Hour,
    /// Hour the working day ends.
    pub work_end_hour: Hour,
    /// First weekday that is not worked; every weekday before it is.
    pub first_non_working_weekday: Weekday,
    /// Whether Easter Monday is a holiday.
    pub include_easter_monday: bool,
}

impl Default for WorkCalendarConfig {
    /// 09:00–18:00, Monday to Friday, Easter Monday observed.
    fn default() -> Self {
        Self {
            work_start_hour: 9,
            work_end_hour: 18,
            first_non_working_weekday: Weekday::Saturday,
            include_easter_monday: true,
        }
    }
}

impl WorkCalendarConfig {
    /// Set the daily work window.
    pub fn with_work_hours(mut self, start: Hour, end: Hour) -> Self {
        self.work_start_hour = start;
        self.work_end_hour = end;
        self
    }

    /// Set the first non-working weekday (e.g. `Sunday` to work Saturdays).
    pub fn with_first_non_working_weekday(mut self, weekday: Weekday) -> Self {
        self.first_non_working_weekday = weekday;
        self
    }

    /// Observe or skip Easter Monday.
    pub fn with_easter_monday(mut self, include: bool) -> Self {
        self.include_easter_monday = include;
        self
    }

    /// Check that the work window is a non-empty span within one day.
    pub fn validate(&self) -> Result<()> {
        let (start, end) = (self.work_start_hour, self.work_end_hour);
        ensure!(end <= 23, "work end hour {end} must be at most 23");
        ensure!(
            start < end,
            "work start hour {start} must precede work end hour {end}"
        );
        Ok(())
    }

    /// Length of a full working day in minutes.
    pub fn minutes_per_day(&self) -> i64 {
        60 * (i64::from(self.work_end_hour) - i64::from(self.work_start_hour))
    }

    pub(crate) fn work_window(&self) -> Result<(TimeOfDay, TimeOfDay)> {
        self.validate()?;
        Ok((
            TimeOfDay::from_hour_unchecked(self.work_start_hour),
            TimeOfDay::from_hour_unchecked(self.work_end_hour),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wt_core::Error;

    #[test]
    fn default_is_nine_to_six_weekdays() {
        let c = WorkCalendarConfig::default();
        assert_eq!((c.work_start_hour, c.work_end_hour), (9, 18));
        assert_eq!(c.first_non_working_weekday, Weekday::Saturday);
        assert!(c.include_easter_monday);
        assert_eq!(c.minutes_per_day(), 540);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn setters_chain() {
        let c = WorkCalendarConfig::default()
            .with_work_hours(8, 17)
            .with_first_non_working_weekday(Weekday::Sunday)
            .with_easter_monday(false);
        assert_eq!((c.work_start_hour, c.work_end_hour), (8, 17));
        assert_eq!(c.first_non_working_weekday, Weekday::Sunday);
        assert!(!c.include_easter_monday);
    }

    #[test]
    fn rejects_empty_or_inverted_window() {
        let inverted = WorkCalendarConfig::default().with_work_hours(18, 9);
        assert!(matches!(inverted.validate(), Err(Error::Precondition(_))));
        let empty = WorkCalendarConfig::default().with_work_hours(9, 9);
        assert!(empty.validate().is_err());
        let overflow = WorkCalendarConfig::default().with_work_hours(9, 24);
        assert!(overflow.validate().is_err());
    }
}
