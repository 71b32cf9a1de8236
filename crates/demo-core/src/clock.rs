//! Reference time used for all calendar arithmetic.
//!
//! Generated rows are stored in UTC, but "today" and "this month" are
//! resolved in the studio's timezone.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use chrono_tz::Tz;

/// A pinned "now" plus the timezone used to resolve calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    now: DateTime<Utc>,
    timezone: Tz,
}

impl Clock {
    pub fn new(now: DateTime<Utc>, timezone: Tz) -> Self {
        Self { now, timezone }
    }

    /// The current instant, resolved in UTC.
    pub fn utc_now() -> Self {
        Self::new(Utc::now(), Tz::UTC)
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Calendar date of `instant` in the clock's timezone.
    pub fn local_date(&self, instant: &DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.timezone).date_naive()
    }

    pub fn today(&self) -> NaiveDate {
        self.local_date(&self.now)
    }

    pub fn days_ago(&self, days: i64) -> DateTime<Utc> {
        self.now - Duration::days(days)
    }

    pub fn days_ahead(&self, days: i64) -> DateTime<Utc> {
        self.now + Duration::days(days)
    }

    /// The local date `months` calendar months before today.
    ///
    /// Days past the end of the target month clamp to its last day
    /// (March 31 minus one month is February 28 or 29).
    pub fn months_ago(&self, months: u32) -> NaiveDate {
        let today = self.today();
        today
            .checked_sub_months(Months::new(months))
            .unwrap_or(today)
    }

    /// True when `instant` falls in the same local calendar month as `month`.
    pub fn same_month(&self, instant: &DateTime<Utc>, month: NaiveDate) -> bool {
        let date = self.local_date(instant);
        date.year() == month.year() && date.month() == month.month()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn clock() -> Clock {
        Clock::new(Utc.with_ymd_and_hms(2026, 3, 31, 23, 30, 0).unwrap(), Tz::UTC)
    }

    #[test]
    fn test_months_ago_clamps_to_month_end() {
        let clock = clock();
        assert_eq!(
            clock.months_ago(1),
            NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()
        );
        assert_eq!(
            clock.months_ago(3),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
        );
        assert_eq!(clock.months_ago(0), clock.today());
    }

    #[test]
    fn test_local_date_uses_timezone() {
        let utc = clock();
        let tokyo = Clock::new(utc.now(), chrono_tz::Asia::Tokyo);

        assert_eq!(utc.today(), NaiveDate::from_ymd_opt(2026, 3, 31).unwrap());
        assert_eq!(tokyo.today(), NaiveDate::from_ymd_opt(2026, 4, 1).unwrap());
    }

    #[test]
    fn test_day_offsets() {
        let clock = clock();
        assert_eq!(clock.days_ago(1), clock.now() - Duration::days(1));
        assert_eq!(clock.days_ahead(30) - clock.days_ago(90), Duration::days(120));
    }

    #[test]
    fn test_same_month() {
        let clock = clock();
        let feb = clock.months_ago(1);
        let instant = Utc.with_ymd_and_hms(2026, 2, 3, 8, 0, 0).unwrap();
        assert!(clock.same_month(&instant, feb));
        assert!(!clock.same_month(&clock.now(), feb));
    }
}
