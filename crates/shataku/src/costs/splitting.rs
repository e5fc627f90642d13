use super::domain::PricingPolicy;
use super::money::Yen;
use rust_decimal::Decimal;

/// Per-occupant share of a whole-apartment charge.
///
/// Under [`PricingPolicy::Shared`] the amount is divided by `occupants` and
/// rounded to whole yen, halves away from zero; with no occupants there is nothing to divide by and the
/// amount is returned as-is. Each charge is split on its own, so the shares
/// of several fields are not reconciled against each other.
pub fn calculate_shared_rent(total: Yen, occupants: u32, policy: PricingPolicy) -> Yen {
    match policy {
        PricingPolicy::Fixed => total,
        PricingPolicy::Shared if occupants == 0 => total,
        PricingPolicy::Shared => Yen::round_from(total.to_decimal() / Decimal::from(occupants)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_divides_among_occupants() {
        assert_eq!(
            calculate_shared_rent(Yen::new(60_000), 3, PricingPolicy::Shared),
            Yen::new(20_000)
        );
        assert_eq!(
            calculate_shared_rent(Yen::new(60_000), 4, PricingPolicy::Shared),
            Yen::new(15_000)
        );
    }

    #[test]
    fn shared_rounds_each_share_half_up() {
        assert_eq!(
            calculate_shared_rent(Yen::new(10_000), 3, PricingPolicy::Shared),
            Yen::new(3_333)
        );
        assert_eq!(
            calculate_shared_rent(Yen::new(5), 2, PricingPolicy::Shared),
            Yen::new(3)
        );
    }

    #[test]
    fn shared_without_occupants_keeps_total() {
        assert_eq!(
            calculate_shared_rent(Yen::new(60_000), 0, PricingPolicy::Shared),
            Yen::new(60_000)
        );
    }

    #[test]
    fn fixed_ignores_occupant_count() {
        for occupants in [0, 1, 3, 12] {
            assert_eq!(
                calculate_shared_rent(Yen::new(60_000), occupants, PricingPolicy::Fixed),
                Yen::new(60_000)
            );
        }
    }
}
