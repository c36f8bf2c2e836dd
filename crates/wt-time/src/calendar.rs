//! `Calendar` trait.
//!
//! A calendar knows which dates are weekends and which are named holidays;
//! a business day is a date that is neither.

use crate::date::Date;
use crate::weekday::Weekday;

/// A holiday calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Italy"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a named holiday, whatever its weekday.
    fn is_holiday(&self, date: Date) -> bool;

    /// Return `true` if `date` falls on a non-working day of the week.
    ///
    /// Most calendars consider Saturday and Sunday as weekends.
    fn is_weekend(&self, date: Date) -> bool {
        matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
    }

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Collect the named holidays in the inclusive range `[from, to]`,
    /// weekends excluded.
    fn holiday_list(&self, from: Date, to: Date) -> Vec<Date> {
        let mut holidays = Vec::new();
        let mut d = from;
        while d <= to {
            if self.is_holiday(d) && !self.is_weekend(d) {
                holidays.push(d);
            }
            match d.next_day() {
                Ok(next) => d = next,
                Err(_) => break,
            }
        }
        holidays
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Weekends only, plus a single holiday.
    #[derive(Debug)]
    struct OneHoliday(Date);

    impl Calendar for OneHoliday {
        fn name(&self) -> &str {
            "One holiday"
        }

        fn is_holiday(&self, date: Date) -> bool {
            date == self.0
        }
    }

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn weekend_is_not_business_day() {
        let cal = OneHoliday(date(2023, 9, 8));
        // 2023-09-02 is a Saturday
        assert!(!cal.is_business_day(date(2023, 9, 2)));
        assert!(!cal.is_holiday(date(2023, 9, 2)));
        assert!(cal.is_business_day(date(2023, 9, 4)));
    }

    #[test]
    fn holiday_is_not_business_day() {
        let cal = OneHoliday(date(2023, 9, 8));
        assert!(cal.is_holiday(date(2023, 9, 8)));
        assert!(!cal.is_business_day(date(2023, 9, 8)));
    }

    #[test]
    fn holiday_list_skips_weekend_holidays() {
        // 2023-09-09 is a Saturday
        let cal = OneHoliday(date(2023, 9, 9));
        assert!(cal.holiday_list(date(2023, 9, 1), date(2023, 9, 30)).is_empty());
        let cal = OneHoliday(date(2023, 9, 8));
        assert_eq!(
            cal.holiday_list(date(2023, 9, 1), date(2023, 9, 30)),
            vec![date(2023, 9, 8)]
        );
    }
}
