//! Italy national holiday calendar.

use crate::calendar::Calendar;
use crate::date::Date;
use crate::easter::easter_month_day;
use wt_core::Year;

/// The ten fixed-date national holidays as `(month, day, name)`.
pub const FIXED_HOLIDAYS: [(u8, u8, &str); 10] = [
    (1, 1, "New Year's Day"),
    (1, 6, "Epiphany"),
    (4, 25, "Liberation Day"),
    (5, 1, "Labour Day"),
    (6, 2, "Republic Day"),
    (8, 15, "Assumption of Mary"),
    (11, 1, "All Saints' Day"),
    (12, 8, "Immaculate Conception"),
    (12, 25, "Christmas Day"),
    (12, 26, "St. Stephen's Day"),
];

/// Italian national calendar.
///
/// Weekends and the following holidays are observed:
/// * the ten [`FIXED_HOLIDAYS`]
/// * Easter Sunday
/// * Easter Monday, unless disabled with [`Italy::without_easter_monday`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Italy {
    include_easter_monday: bool,
}

impl Default for Italy {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Italy {
    /// Calendar observing Easter Monday when `include_easter_monday` is set.
    pub fn new(include_easter_monday: bool) -> Self {
        Self {
            include_easter_monday,
        }
    }

    /// Calendar that treats Easter Monday as an ordinary day.
    pub fn without_easter_monday() -> Self {
        Self::new(false)
    }

    /// Every holiday in `year`, in calendar order.
    ///
    /// `year` must lie within the supported date range; callers clamp first.
    pub(crate) fn holidays_in_year(&self, year: Year) -> Vec<Date> {
        let (em, ed) = easter_month_day(year);
        let easter = Date::from_ymd_unchecked(year, em, ed);
        tracing::trace!(year, %easter, "computed Easter Sunday");

        let mut holidays: Vec<Date> = FIXED_HOLIDAYS
            .iter()
            .map(|&(m, d, _)| Date::from_ymd_unchecked(year, m, d))
            .collect();
        holidays.push(easter);
        if self.include_easter_monday {
            // Easter is at latest April 25, so the next day stays in range.
            holidays.push(easter + 1);
        }
        holidays.sort_unstable();
        // Easter can land on Liberation Day (e.g. 2038).
        holidays.dedup();
        holidays
    }
}

impl Calendar for Italy {
    fn name(&self) -> &str {
        "Italy"
    }

    fn is_holiday(&self, date: Date) -> bool {
        let (y, m, d) = date.ymd();
        if FIXED_HOLIDAYS.iter().any(|&(hm, hd, _)| hm == m && hd == d) {
            return true;
        }
        let (em, ed) = easter_month_day(y);
        let easter = Date::from_ymd_unchecked(y, em, ed);
        date == easter || (self.include_easter_monday && date == easter + 1)
    }
}
