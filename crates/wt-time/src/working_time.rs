//! Working-time calculator.
//!
//! A [`WorkCalendar`] turns a pair of instants into the number of minutes
//! worked between them: only the configured daily window counts, only on
//! working weekdays, and never on a national holiday.
//!
//! # Example
//! ```
//! use wt_time::{DateTime, TimeRange, WorkCalendar, WorkingTime};
//!
//! let cal = WorkCalendar::default();
//! // Friday 17:00 to Monday 10:00: one hour on each side of the weekend.
//! let start = DateTime::from_ymd_hms(2024, 3, 1, 17, 0, 0).unwrap();
//! let end = DateTime::from_ymd_hms(2024, 3, 4, 10, 0, 0).unwrap();
//! assert_eq!(cal.working_time(TimeRange::new(start, end)), WorkingTime::Elapsed(120));
//! ```

use std::ops::RangeInclusive;
use std::sync::{PoisonError, RwLock};

use crate::calendar::Calendar;
use crate::calendars::italy::Italy;
use crate::config::WorkCalendarConfig;
use crate::date::Date;
use crate::datetime::{DateTime, TimeRange};
use crate::holiday_cache::HolidayCache;
use crate::time_of_day::TimeOfDay;
use wt_core::errors::Result;
use wt_core::{Minutes, Real, Year};

/// Outcome of a working-time calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkingTime {
    /// Whole working minutes between the two instants.
    Elapsed(Minutes),
    /// The end instant precedes the start instant.
    InvertedRange,
}

impl WorkingTime {
    /// Sentinel returned in place of an inverted range by the integer API.
    pub const INVERTED_SENTINEL: Minutes = -1;

    /// Working minutes, or `None` for an inverted range.
    pub fn minutes(&self) -> Option<Minutes> {
        match *self {
            WorkingTime::Elapsed(m) => Some(m),
            WorkingTime::InvertedRange => None,
        }
    }

    /// Working hours, or `None` for an inverted range.
    pub fn hours(&self) -> Option<Real> {
        self.minutes().map(|m| m as Real / 60.0)
    }

    /// Working days of `minutes_per_day` minutes, or `None` for an inverted
    /// range.
    pub fn days(&self, minutes_per_day: Minutes) -> Option<Real> {
        self.minutes().map(|m| m as Real / minutes_per_day as Real)
    }

    /// Minutes, with an inverted range collapsed to
    /// [`INVERTED_SENTINEL`](Self::INVERTED_SENTINEL).
    pub fn sentinel_minutes(&self) -> Minutes {
        self.minutes().unwrap_or(Self::INVERTED_SENTINEL)
    }
}

/// Business-time calculator over the Italian national calendar.
///
/// Configuration is fixed at construction.  The holiday cache grows on demand
/// as calculations touch new years and is guarded by a lock, so one
/// calendar can serve many threads.
#[derive(Debug)]
pub struct WorkCalendar {
    config: WorkCalendarConfig,
    work_start: TimeOfDay,
    work_end: TimeOfDay,
    holidays: RwLock<HolidayCache>,
}

impl Default for WorkCalendar {
    fn default() -> Self {
        let config = WorkCalendarConfig::default();
        Self::from_parts(
            config,
            TimeOfDay::from_hour_unchecked(config.work_start_hour),
            TimeOfDay::from_hour_unchecked(config.work_end_hour),
        )
    }
}

impl WorkCalendar {
    /// Build a calendar from a validated configuration.
    pub fn new(config: WorkCalendarConfig) -> Result<Self> {
        let (work_start, work_end) = config.work_window()?;
        Ok(Self::from_parts(config, work_start, work_end))
    }

    fn from_parts(config: WorkCalendarConfig, work_start: TimeOfDay, work_end: TimeOfDay) -> Self {
        let calendar = Italy::new(config.include_easter_monday);
        Self {
            config,
            work_start,
            work_end,
            holidays: RwLock::new(HolidayCache::new(calendar)),
        }
    }

    /// The configuration this calendar was built with.
    pub fn config(&self) -> &WorkCalendarConfig {
        &self.config
    }

    // ── Holiday cache ────────────────────────────────────────────────────────

    /// Make sure the holidays of every year in `[start_year, end_year]` are
    /// cached, growing the covered range to include it.  A no-op when the
    /// range is already covered.
    pub fn ensure_holidays_loaded(&self, start_year: Year, end_year: Year) {
        let covered = self
            .holidays
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .covers(start_year, end_year);
        if covered {
            return;
        }
        // Another thread may have extended the cache since the read.
        self.holidays
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(start_year, end_year);
    }

    /// Inclusive range of years whose holidays are cached.
    pub fn cached_years(&self) -> Option<RangeInclusive<Year>> {
        self.holidays
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .covered_years()
    }

    /// Number of cached holiday dates.
    pub fn holiday_count(&self) -> usize {
        self.holidays
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .holiday_count()
    }

    /// Snapshot of the cached holidays in calendar order.
    pub fn cached_holidays(&self) -> Vec<Date> {
        self.holidays
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .collect()
    }

    // ── Calculations ─────────────────────────────────────────────────────────

    /// Working minutes in `range`, or [`WorkingTime::InvertedRange`] when the
    /// end precedes the start.
    pub fn working_time(&self, range: TimeRange) -> WorkingTime {
        if range.is_inverted() {
            tracing::debug!(start = %range.start, end = %range.end, "inverted time range");
            return WorkingTime::InvertedRange;
        }
        let mut cursor = self.clamp(range.start);
        let end = self.clamp(range.end);
        self.ensure_holidays_loaded(cursor.year(), end.year());

        let holidays = self.holidays.read().unwrap_or_else(PoisonError::into_inner);
        let is_worked = |date: Date| {
            date.weekday().is_before(self.config.first_non_working_weekday)
                && !holidays.contains(date)
        };

        let mut total: Minutes = 0;
        while cursor < end {
            if cursor.date() == end.date() {
                if is_worked(cursor.date()) {
                    total += cursor.minutes_until(end);
                }
                break;
            }
            if is_worked(cursor.date()) {
                total += cursor.minutes_until(cursor.with_time(self.work_end));
            }
            // cursor.date() < end.date(), so the next day is in range
            cursor = DateTime::new(cursor.date() + 1, self.work_start);
        }
        WorkingTime::Elapsed(total)
    }

    /// Working minutes between `start` and `end`.
    ///
    /// Returns `-1` when `end` precedes `start`.
    ///
    /// # Errors
    /// [`Error::MissingInput`](wt_core::Error::MissingInput) if either instant
    /// is `None`.
    pub fn working_minutes(
        &self,
        start: Option<DateTime>,
        end: Option<DateTime>,
    ) -> Result<Minutes> {
        let range = TimeRange::from_options(start, end)?;
        Ok(self.working_time(range).sentinel_minutes())
    }

    /// Working minutes divided by 60.  An inverted range yields `-1 / 60`.
    pub fn working_hours(&self, start: Option<DateTime>, end: Option<DateTime>) -> Result<Real> {
        Ok(self.working_minutes(start, end)? as Real / 60.0)
    }

    /// Working minutes divided by the length of one full working day.
    /// An inverted range yields `-1` over that length.
    pub fn working_days(&self, start: Option<DateTime>, end: Option<DateTime>) -> Result<Real> {
        let minutes = self.working_minutes(start, end)?;
        Ok(minutes as Real / self.config.minutes_per_day() as Real)
    }

    /// Snap an instant into the daily work window of its own date.
    fn clamp(&self, t: DateTime) -> DateTime {
        if t.time() < self.work_start {
            t.with_time(self.work_start)
        } else if t.time() > self.work_end {
            t.with_time(self.work_end)
        } else {
            t
        }
    }
}

impl Calendar for WorkCalendar {
    fn name(&self) -> &str {
        "Italy (working time)"
    }

    fn is_holiday(&self, date: Date) -> bool {
        let year = date.year();
        self.ensure_holidays_loaded(year, year);
        self.holidays
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(date)
    }

    fn is_weekend(&self, date: Date) -> bool {
        !date
            .weekday()
            .is_before(self.config.first_non_working_weekday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;
    use wt_core::Error;

    fn dt(y: Year, m: u8, d: u8, h: u8, mi: u8) -> DateTime {
        DateTime::from_ymd_hms(y, m, d, h, mi, 0).unwrap()
    }

    fn minutes(cal: &WorkCalendar, start: DateTime, end: DateTime) -> Minutes {
        cal.working_minutes(Some(start), Some(end)).unwrap()
    }

    #[test]
    fn same_day_inside_window() {
        let cal = WorkCalendar::default();
        assert_eq!(minutes(&cal, dt(2024, 3, 4, 9, 0), dt(2024, 3, 4, 17, 30)), 510);
    }

    #[test]
    fn identical_instants_are_zero() {
        let cal = WorkCalendar::default();
        let t = dt(2024, 3, 5, 11, 15);
        assert_eq!(minutes(&cal, t, t), 0);
    }

    #[test]
    fn inverted_range_is_sentinel() {
        let cal = WorkCalendar::default();
        let (a, b) = (dt(2024, 3, 4, 10, 0), dt(2024, 3, 4, 11, 0));
        assert_eq!(minutes(&cal, b, a), -1);
        assert_eq!(cal.working_time(TimeRange::new(b, a)), WorkingTime::InvertedRange);
        assert_eq!(cal.working_hours(Some(b), Some(a)).unwrap(), -1.0 / 60.0);
    }

    #[test]
    fn missing_inputs_are_errors() {
        let cal = WorkCalendar::default();
        let t = dt(2024, 3, 4, 10, 0);
        assert_eq!(cal.working_minutes(None, Some(t)), Err(Error::MissingInput("start")));
        assert_eq!(cal.working_minutes(Some(t), None), Err(Error::MissingInput("end")));
        assert_eq!(cal.working_hours(None, Some(t)), Err(Error::MissingInput("start")));
        assert_eq!(cal.working_hours(Some(t), None), Err(Error::MissingInput("end")));
        assert!(cal.working_days(None, None).is_err());
    }

    #[test]
    fn weekend_is_skipped() {
        let cal = WorkCalendar::default();
        assert_eq!(minutes(&cal, dt(2024, 3, 1, 17, 0), dt(2024, 3, 4, 10, 0)), 120);
    }

    #[test]
    fn clamps_outside_window() {
        let cal = WorkCalendar::default();
        // 07:00–20:00 on a Monday counts the full 9 hours
        assert_eq!(minutes(&cal, dt(2024, 3, 4, 7, 0), dt(2024, 3, 4, 20, 0)), 540);
        // Both ends after hours
        assert_eq!(minutes(&cal, dt(2024, 3, 4, 19, 0), dt(2024, 3, 4, 21, 0)), 0);
        // Both ends before hours
        assert_eq!(minutes(&cal, dt(2024, 3, 4, 6, 0), dt(2024, 3, 4, 8, 0)), 0);
        // Evening to next morning
        assert_eq!(minutes(&cal, dt(2024, 3, 4, 19, 0), dt(2024, 3, 5, 8, 0)), 0);
    }

    #[test]
    fn holiday_contributes_nothing() {
        let cal = WorkCalendar::default();
        // Tue 2024-12-24 17:00 → Fri 2024-12-27 10:00:
        // 60 on the 24th, Christmas and St. Stephen's skipped, 60 on the 27th.
        assert_eq!(minutes(&cal, dt(2024, 12, 24, 17, 0), dt(2024, 12, 27, 10, 0)), 120);
        // Entirely inside Christmas Day
        assert_eq!(minutes(&cal, dt(2024, 12, 25, 9, 0), dt(2024, 12, 25, 18, 0)), 0);
    }

    #[test]
    fn easter_monday_is_configurable() {
        // Easter Monday 2024 is April 1
        let (start, end) = (dt(2024, 4, 1, 9, 0), dt(2024, 4, 1, 18, 0));
        assert_eq!(minutes(&WorkCalendar::default(), start, end), 0);
        let cal = WorkCalendar::new(WorkCalendarConfig::default().with_easter_monday(false)).unwrap();
        assert_eq!(minutes(&cal, start, end), 540);
    }

    #[test]
    fn saturday_can_be_a_working_day() {
        let config = WorkCalendarConfig::default().with_first_non_working_weekday(Weekday::Sunday);
        let cal = WorkCalendar::new(config).unwrap();
        // Sat 2024-03-02 full day
        assert_eq!(minutes(&cal, dt(2024, 3, 2, 9, 0), dt(2024, 3, 2, 18, 0)), 540);
        assert!(!cal.is_weekend(Date::from_ymd(2024, 3, 2).unwrap()));
        assert!(cal.is_weekend(Date::from_ymd(2024, 3, 3).unwrap()));
    }

    #[test]
    fn days_use_configured_window() {
        let cal = WorkCalendar::new(WorkCalendarConfig::default().with_work_hours(8, 16)).unwrap();
        let days = cal
            .working_days(Some(dt(2024, 3, 4, 8, 0)), Some(dt(2024, 3, 5, 12, 0)))
            .unwrap();
        assert_eq!(days, 1.5);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = WorkCalendarConfig::default().with_work_hours(18, 9);
        assert!(WorkCalendar::new(config).is_err());
    }

    #[test]
    fn calculation_loads_year_span() {
        let cal = WorkCalendar::default();
        assert_eq!(cal.cached_years(), None);
        minutes(&cal, dt(2023, 12, 29, 9, 0), dt(2025, 1, 2, 9, 0));
        assert_eq!(cal.cached_years(), Some(2023..=2025));
        assert_eq!(cal.holiday_count(), 36);
    }

    #[test]
    fn calendar_trait_queries() {
        let cal = WorkCalendar::default();
        let christmas = Date::from_ymd(2024, 12, 25).unwrap();
        assert!(cal.is_holiday(christmas));
        assert!(!cal.is_business_day(christmas));
        assert_eq!(cal.cached_years(), Some(2024..=2024));
        // 2024-03-02 is a Saturday
        assert!(cal.is_weekend(Date::from_ymd(2024, 3, 2).unwrap()));
    }

    #[test]
    fn working_time_accessors() {
        let w = WorkingTime::Elapsed(270);
        assert_eq!(w.hours(), Some(4.5));
        assert_eq!(w.days(540), Some(0.5));
        assert_eq!(w.sentinel_minutes(), 270);
        assert_eq!(WorkingTime::InvertedRange.minutes(), None);
        assert_eq!(WorkingTime::InvertedRange.sentinel_minutes(), -1);
    }
}
