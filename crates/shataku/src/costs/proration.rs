use super::calendar::MonthContext;
use super::domain::ProrationResult;
use super::money::Yen;
use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::trace;

/// Prorates `monthly_rent` (日割り) over the days occupied in the move-in month.
///
/// A move-in on the 1st with no move-out, or with a move-out whose
/// day-of-month is the last day of the move-in month, bills the month in full
/// without going through the daily rate. Every other case bills
/// `round(monthly_rent / days_in_month * days_occupied)`, even when
/// `days_occupied` happens to cover the whole month, so the two paths may
/// differ by one yen.
pub fn calculate_prorated_rent(
    monthly_rent: Yen,
    move_in: NaiveDate,
    move_out: Option<NaiveDate>,
) -> ProrationResult {
    let month = MonthContext::of(move_in);
    let total_days = month.days();
    let day = move_in.day();
    let daily_rate = monthly_rent.to_decimal() / Decimal::from(total_days);

    let ends_with_month = move_out.map_or(true, |out| out.day() == total_days);
    if day == 1 && ends_with_month {
        trace!(%move_in, total_days, "full month billed");
        return ProrationResult {
            full_month_rent: monthly_rent,
            prorated_rent: monthly_rent,
            days_occupied: total_days,
            total_days_in_month: total_days,
            is_full_month: true,
            daily_rate: display_rate(daily_rate),
        };
    }

    let days_occupied = match move_out {
        // A move-out dated before the move-in still bills the move-in day.
        Some(out) if month.contains(out) => out.day().saturating_sub(day) + 1,
        _ => total_days - day + 1,
    };
    let prorated_rent = Yen::round_from(daily_rate * Decimal::from(days_occupied));
    trace!(%move_in, days_occupied, total_days, %prorated_rent, "partial month prorated");

    ProrationResult {
        full_month_rent: monthly_rent,
        prorated_rent,
        days_occupied,
        total_days_in_month: total_days,
        is_full_month: false,
        daily_rate: display_rate(daily_rate),
    }
}

fn display_rate(rate: Decimal) -> f64 {
    rate.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}
