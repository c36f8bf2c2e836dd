//! End-to-end use through the façade.

use approx::assert_relative_eq;
use worktime::{DateTime, Error, WorkCalendar, WorkCalendarConfig};

#[test]
fn hours_and_days_over_a_holiday_week() {
    let cal = WorkCalendar::new(WorkCalendarConfig::default()).unwrap();
    // Mon 2024-04-22 09:00 → Fri 2024-04-26 13:30; Thursday is Liberation Day.
    let start = DateTime::from_ymd_hms(2024, 4, 22, 9, 0, 0).unwrap();
    let end = DateTime::from_ymd_hms(2024, 4, 26, 13, 30, 0).unwrap();
    let minutes = cal.working_minutes(Some(start), Some(end)).unwrap();
    assert_eq!(minutes, 3 * 540 + 270);
    assert_relative_eq!(cal.working_hours(Some(start), Some(end)).unwrap(), 31.5);
    assert_relative_eq!(cal.working_days(Some(start), Some(end)).unwrap(), 3.5);
}

#[test]
fn query_helpers_are_reachable() {
    let q = "SELECT id AS key FROM ledger";
    assert_eq!(worktime::query::query_fields(q).unwrap(), ["Key"]);
    assert_eq!(worktime::query::table_name(q).unwrap(), "ledger");
    assert!(matches!(
        worktime::query::table_name("SELECT 1"),
        Err(Error::Query(_))
    ));
}
