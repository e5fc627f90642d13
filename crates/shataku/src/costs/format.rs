//! Display helpers for cost previews.

use super::money::Yen;
use chrono::{Datelike, NaiveDate};

/// `¥`-prefixed, comma-grouped amount, e.g. `¥1,234,567` or `-¥500`.
pub fn format_yen(amount: Yen) -> String {
    let digits = amount.amount().unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if amount.is_negative() {
        format!("-¥{grouped}")
    } else {
        format!("¥{grouped}")
    }
}

/// Japanese long-form date, e.g. `2024年3月16日`.
pub fn format_long_date(date: NaiveDate) -> String {
    format!("{}年{}月{}日", date.year(), date.month(), date.day())
}
