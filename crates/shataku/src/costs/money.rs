use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Whole-yen amount. Yen has no subunit in housing billing, so every stored
/// figure is an integer; fractional intermediates are carried as [`Decimal`]
/// until they are rounded back through [`Yen::round_from`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Yen(i64);

impl Yen {
    pub const ZERO: Yen = Yen(0);
    /// Largest amount accepted for a single charge at the boundary.
    pub const MAX_CHARGE: Yen = Yen(1_000_000_000_000);

    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    pub const fn amount(self) -> i64 {
        self.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn to_decimal(self) -> Decimal {
        Decimal::from(self.0)
    }

    /// Rounds to whole yen, halves away from zero (2.5 -> 3, -2.5 -> -3).
    /// Values outside the `i64` range saturate.
    pub fn round_from(value: Decimal) -> Self {
        let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        match rounded.to_i64() {
            Some(amount) => Self(amount),
            None if rounded.is_sign_negative() => Self(i64::MIN),
            None => Self(i64::MAX),
        }
    }
}

impl From<i64> for Yen {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Add for Yen {
    type Output = Yen;

    fn add(self, rhs: Yen) -> Yen {
        Yen(self.0.saturating_add(rhs.0))
    }
}

impl Mul<i64> for Yen {
    type Output = Yen;

    fn mul(self, rhs: i64) -> Yen {
        Yen(self.0.saturating_mul(rhs))
    }
}

impl Sum for Yen {
    fn sum<I: Iterator<Item = Yen>>(iter: I) -> Yen {
        iter.fold(Yen::ZERO, Add::add)
    }
}

impl fmt::Display for Yen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::format::format_yen(*self))
    }
}
