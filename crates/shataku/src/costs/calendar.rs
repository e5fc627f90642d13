use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Billing month a move-in falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthContext {
    pub year: i32,
    pub month: u32,
}

impl MonthContext {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn days(self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// Calendar day count (28-31) of `month` in `year`, proleptic Gregorian.
///
/// `month` must be in `1..=12`; callers derive it from a valid date.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
