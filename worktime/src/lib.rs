//! # worktime
//!
//! Working minutes, hours, and days between two instants, over a fixed
//! Italian holiday calendar with a computed Easter.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `wt-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use worktime::time::{DateTime, WorkCalendar};
//!
//! let cal = WorkCalendar::default();
//! let start = DateTime::from_ymd_hms(2024, 3, 4, 9, 0, 0)?;
//! let end = DateTime::from_ymd_hms(2024, 3, 4, 17, 30, 0)?;
//! assert_eq!(cal.working_minutes(Some(start), Some(end))?, 510);
//! # Ok::<(), worktime::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use wt_core as core;

/// Dates, holiday calendar, and the working-time calculator.
pub use wt_time as time;

/// SQL query string helpers.
pub use wt_query as query;

pub use wt_core::{Error, Result};
pub use wt_time::{
    easter_sunday, Date, DateTime, TimeRange, Weekday, WorkCalendar, WorkCalendarConfig,
    WorkingTime,
};
