//! Trading calendar — the set of valid session dates.
//!
//! Exchange calendars are an external concern. [`TradingCalendar::weekdays`]
//! is the built-in stand-in (Monday through Friday, no holiday table);
//! callers with a real holiday feed build the calendar from an explicit
//! date set instead.

use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default)]
pub struct TradingCalendar {
    sessions: BTreeSet<NaiveDate>,
}

impl TradingCalendar {
    /// Build from an explicit set of session dates.
    pub fn from_dates<I: IntoIterator<Item = NaiveDate>>(dates: I) -> Self {
        Self {
            sessions: dates.into_iter().collect(),
        }
    }

    /// Every Monday–Friday in the inclusive range.
    pub fn weekdays(start: NaiveDate, end: NaiveDate) -> Self {
        let mut sessions = BTreeSet::new();
        let mut day = start;
        while day <= end {
            if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
                sessions.insert(day);
            }
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        Self { sessions }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.sessions.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Session dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.sessions.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekdays_skip_weekends() {
        // 2024-01-01 is a Monday; the first seven days hold one weekend.
        let cal = TradingCalendar::weekdays(date(2024, 1, 1), date(2024, 1, 7));
        assert_eq!(cal.len(), 5);
        assert!(cal.contains(date(2024, 1, 5)));
        assert!(!cal.contains(date(2024, 1, 6)));
        assert!(!cal.contains(date(2024, 1, 7)));
    }

    #[test]
    fn inclusive_bounds() {
        let cal = TradingCalendar::weekdays(date(2024, 1, 2), date(2024, 1, 2));
        assert_eq!(cal.len(), 1);
        assert!(cal.contains(date(2024, 1, 2)));
    }

    #[test]
    fn explicit_date_set() {
        let cal = TradingCalendar::from_dates([date(2024, 1, 2), date(2024, 1, 3)]);
        assert!(cal.contains(date(2024, 1, 2)));
        assert!(!cal.contains(date(2024, 1, 4)));
    }

    #[test]
    fn inverted_range_is_empty() {
        let cal = TradingCalendar::weekdays(date(2024, 1, 7), date(2024, 1, 1));
        assert!(cal.is_empty());
    }
}
