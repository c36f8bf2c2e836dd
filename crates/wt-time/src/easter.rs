//! Gregorian Easter computus.

use crate::date::{Date, MAX_YEAR, MIN_YEAR};
use wt_core::errors::{Error, Result};
use wt_core::Year;

/// Date of Easter Sunday in `year`.
///
/// Uses the anonymous Gregorian algorithm (Meeus/Jones/Butcher).
///
/// # Errors
/// Returns [`Error::Date`] if `year` lies outside the supported date range.
///
/// # Example
/// ```
/// use wt_time::{easter_sunday, Date};
/// assert_eq!(easter_sunday(2024).unwrap(), Date::from_ymd(2024, 3, 31).unwrap());
/// ```
pub fn easter_sunday(year: Year) -> Result<Date> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(Error::Date(format!(
            "cannot compute Easter for {year}: outside [{MIN_YEAR}, {MAX_YEAR}]"
        )));
    }
    let (month, day) = easter_month_day(year);
    Ok(Date::from_ymd_unchecked(year, month, day))
}

/// Month and day of Easter Sunday.  All operands stay non-negative, so
/// Rust's truncating `/` and `%` give the textbook results.
pub(crate) fn easter_month_day(year: Year) -> (u8, u8) {
    let y = i32::from(year);
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let g = (8 * b + 13) / 25;
    let h = (19 * a + b - d - g + 15) % 30;
    let j = c / 4;
    let k = c % 4;
    let m = (a + 11 * h) / 319;
    let r = (2 * e + 2 * j - k - h + m + 32) % 7;
    let n = (h - m + r + 90) / 25;
    let p = (h - m + r + n + 19) % 32;
    (n as u8, p as u8)
}
