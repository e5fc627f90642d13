use chrono::NaiveDate;
use rust_decimal::Decimal;
use shataku::costs::{
    calculate_assignment_costs, calculate_prorated_rent, calculate_shared_rent,
    calculate_total_monthly_cost, days_in_month, ApartmentFinancials, MonthlyCostInputs,
    PricingPolicy, Yen,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn dormitory(pricing_type: PricingPolicy, current_occupants: u32) -> ApartmentFinancials {
    ApartmentFinancials {
        monthly_rent: Yen::new(60_000),
        deposit: Yen::new(45_000),
        key_money: Yen::new(20_000),
        management_fee: Yen::new(5_000),
        pricing_type,
        current_occupants,
        utilities_included: true,
        parking_included: false,
        parking_fee: Yen::new(4_000),
    }
}

#[test]
fn full_month_move_in_bills_listed_rent() {
    let result = calculate_prorated_rent(Yen::new(90_000), date(2024, 3, 1), None);

    assert_eq!(result.prorated_rent, Yen::new(90_000));
    assert!(result.is_full_month);
    assert_eq!(result.days_occupied, 31);
}

#[test]
fn mid_month_move_in_is_prorated_by_day() {
    let result = calculate_prorated_rent(Yen::new(90_000), date(2024, 3, 16), None);

    assert_eq!(result.days_occupied, 16);
    assert!((result.daily_rate - 2903.23).abs() < 0.005);
    assert_eq!(result.prorated_rent, Yen::new(46_452));
    assert!(!result.is_full_month);
}

#[test]
fn every_first_of_month_is_billed_exactly() {
    for rent in [0, 1, 33_333, 58_001, 123_457] {
        for month in 1..=12 {
            let result = calculate_prorated_rent(Yen::new(rent), date(2023, month, 1), None);
            assert!(result.is_full_month);
            assert_eq!(result.prorated_rent, Yen::new(rent));
            assert_eq!(result.days_occupied, days_in_month(2023, month));
        }
    }
}

#[test]
fn partial_months_follow_the_daily_formula() {
    let rent = Yen::new(71_000);
    for month in [2, 4, 7] {
        let total = days_in_month(2024, month);
        for day in 2..=total {
            let result = calculate_prorated_rent(rent, date(2024, month, day), None);
            let expected_days = total - day + 1;
            assert_eq!(result.days_occupied, expected_days);
            let expected = Yen::round_from(
                Decimal::from(71_000) / Decimal::from(total) * Decimal::from(expected_days),
            );
            assert_eq!(result.prorated_rent, expected);
        }
    }
}

#[test]
fn month_end_move_out_keeps_the_fast_path() {
    let result = calculate_prorated_rent(
        Yen::new(80_000),
        date(2024, 2, 1),
        Some(date(2024, 2, 29)),
    );
    assert!(result.is_full_month);
    assert_eq!(result.prorated_rent, Yen::new(80_000));
    assert_eq!(result.days_occupied, 29);
}

#[test]
fn shared_rent_examples() {
    assert_eq!(
        calculate_shared_rent(Yen::new(60_000), 3, PricingPolicy::Shared),
        Yen::new(20_000)
    );
    assert_eq!(
        calculate_shared_rent(Yen::new(60_000), 3, PricingPolicy::Fixed),
        Yen::new(60_000)
    );
}

#[test]
fn monthly_total_adds_estimated_utilities() {
    let inputs = MonthlyCostInputs::new(Yen::new(45_000))
        .management_fee(Yen::new(5_000))
        .utilities_included(false)
        .parking(true, Yen::new(3_000));
    let breakdown = calculate_total_monthly_cost(&inputs);

    assert_eq!(breakdown.total_monthly, Yen::new(58_000));
    assert_eq!(
        breakdown.total_monthly,
        breakdown.base_rent + breakdown.management_fee + breakdown.utilities + breakdown.parking
    );
}

#[test]
fn shared_assignment_scenario() {
    let result =
        calculate_assignment_costs(&dormitory(PricingPolicy::Shared, 3), date(2024, 3, 1), None);

    assert_eq!(result.base_rent_per_person, Yen::new(20_000));
    assert_eq!(result.monthly_costs.management_fee, Yen::new(1_667));
    assert_eq!(result.monthly_costs.parking, Yen::new(1_333));
    assert_eq!(result.monthly_costs.utilities, Yen::ZERO);
    assert_eq!(result.monthly_costs.total_monthly, Yen::new(23_000));
    assert_eq!(result.initial_costs.deposit, Yen::new(15_000));
    assert_eq!(result.initial_costs.key_money, Yen::new(6_667));
    assert_eq!(result.initial_costs.total_initial, Yen::new(44_667));
    assert_eq!(result.annual_cost_first_year, Yen::new(44_667 + 23_000 * 11));
}

#[test]
fn fixed_assignment_scenario() {
    let result =
        calculate_assignment_costs(&dormitory(PricingPolicy::Fixed, 3), date(2024, 3, 1), None);

    assert_eq!(result.base_rent_per_person, Yen::new(60_000));
    assert_eq!(result.pricing_type, PricingPolicy::Fixed);
    assert_eq!(result.monthly_costs.total_monthly, Yen::new(69_000));
}

#[test]
fn custom_rate_wins_regardless_of_policy() {
    for policy in [PricingPolicy::Shared, PricingPolicy::Fixed] {
        let apartment = dormitory(policy, 3);
        let baseline = calculate_assignment_costs(&apartment, date(2024, 3, 10), None);
        let custom =
            calculate_assignment_costs(&apartment, date(2024, 3, 10), Some(Yen::new(18_000)));

        assert!(custom.is_custom_rate);
        assert_eq!(custom.base_rent_per_person, Yen::new(18_000));
        assert_eq!(
            custom.monthly_costs.management_fee,
            baseline.monthly_costs.management_fee
        );
        assert_eq!(custom.monthly_costs.parking, baseline.monthly_costs.parking);
        assert_eq!(custom.initial_costs.deposit, baseline.initial_costs.deposit);
    }
}

#[test]
fn per_field_rounding_is_not_reconciled() {
    let apartment = dormitory(PricingPolicy::Shared, 3);
    let result = calculate_assignment_costs(&apartment, date(2024, 3, 1), None);

    let collected_key_money = result.initial_costs.key_money * 3;
    assert_eq!(collected_key_money, Yen::new(20_001));
    assert_ne!(collected_key_money, apartment.key_money);
}

#[test]
fn annual_cost_covers_first_month_plus_eleven() {
    let result =
        calculate_assignment_costs(&dormitory(PricingPolicy::Shared, 2), date(2024, 9, 20), None);

    assert_eq!(
        result.annual_cost_first_year,
        result.initial_costs.total_initial + result.monthly_costs.total_monthly * 11
    );
    assert_eq!(
        result.initial_costs.first_month_rent,
        result.prorated_first_month.prorated_rent
    );
    assert_eq!(result.prorated_first_month.days_occupied, 11);
}
