//! # wt-time
//!
//! Dates, the Italian holiday calendar, and the working-time calculator.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait.
pub mod calendar;

/// Concrete national calendars.
pub mod calendars;

/// `WorkCalendarConfig` — work window and week settings.
pub mod config;

/// `Date` type.
pub mod date;

/// `DateTime` and `TimeRange`.
pub mod datetime;

/// Easter Sunday computus.
pub mod easter;

/// Per-year holiday cache.
pub mod holiday_cache;

/// `TimeOfDay` — wall-clock time.
pub mod time_of_day;

/// `Weekday` — day of the week.
pub mod weekday;

/// `WorkCalendar` — the working-time calculator.
pub mod working_time;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::Calendar;
pub use calendars::italy::Italy;
pub use config::WorkCalendarConfig;
pub use date::Date;
pub use datetime::{DateTime, TimeRange};
pub use easter::easter_sunday;
pub use holiday_cache::HolidayCache;
pub use time_of_day::TimeOfDay;
pub use weekday::Weekday;
pub use working_time::{WorkCalendar, WorkingTime};
