//! Per-year memoized holiday set.
//!
//! The cache covers one contiguous, inclusive range of years and only ever
//! grows.  Holidays are stored per year, so extending the range can never
//! insert a year twice.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;

use crate::calendars::italy::Italy;
use crate::date::{Date, MAX_YEAR, MIN_YEAR};
use wt_core::Year;

/// Holidays of a national calendar for a contiguous range of years.
#[derive(Debug, Clone)]
pub struct HolidayCache {
    calendar: Italy,
    years: BTreeMap<Year, BTreeSet<Date>>,
}

impl HolidayCache {
    /// An empty cache drawing its holidays from `calendar`.
    pub fn new(calendar: Italy) -> Self {
        Self {
            calendar,
            years: BTreeMap::new(),
        }
    }

    /// The inclusive year range currently covered, or `None` while empty.
    pub fn covered_years(&self) -> Option<RangeInclusive<Year>> {
        let first = *self.years.keys().next()?;
        let last = *self.years.keys().next_back()?;
        Some(first..=last)
    }

    /// `true` if every year in `[start_year, end_year]` (clamped to the
    /// supported date range) is already loaded.
    pub fn covers(&self, start_year: Year, end_year: Year) -> bool {
        let (lo, hi) = clamp_years(start_year, end_year);
        self.covered_years()
            .is_some_and(|r| *r.start() <= lo && hi <= *r.end())
    }

    /// Grow the covered range to its hull with `[start_year, end_year]`,
    /// loading every year that is not yet present.
    ///
    /// Years outside the supported date range hold no dates and are ignored.
    /// Returns the number of years added.
    pub fn extend(&mut self, start_year: Year, end_year: Year) -> usize {
        let (mut lo, mut hi) = clamp_years(start_year, end_year);
        if let Some(covered) = self.covered_years() {
            lo = lo.min(*covered.start());
            hi = hi.max(*covered.end());
        }
        let mut added = 0;
        for year in lo..=hi {
            if let std::collections::btree_map::Entry::Vacant(slot) = self.years.entry(year) {
                slot.insert(self.calendar.holidays_in_year(year).into_iter().collect());
                added += 1;
            }
        }
        if added > 0 {
            tracing::debug!(added, first = lo, last = hi, "extended holiday cache");
        }
        added
    }

    /// `true` if `date` is a cached holiday.
    pub fn contains(&self, date: Date) -> bool {
        self.years
            .get(&date.year())
            .is_some_and(|holidays| holidays.contains(&date))
    }

    /// The cached holidays of `year`, if loaded.
    pub fn holidays_in(&self, year: Year) -> Option<&BTreeSet<Date>> {
        self.years.get(&year)
    }

    /// Total number of cached holiday dates.
    pub fn holiday_count(&self) -> usize {
        self.years.values().map(BTreeSet::len).sum()
    }

    /// Iterate over every cached holiday in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = Date> + '_ {
        self.years.values().flatten().copied()
    }
}

fn clamp_years(a: Year, b: Year) -> (Year, Year) {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    (lo.clamp(MIN_YEAR, MAX_YEAR), hi.clamp(MIN_YEAR, MAX_YEAR))
}
