use super::aggregate::{
    calculate_initial_costs, calculate_total_monthly_cost, MonthlyCostInputs,
    DEFAULT_ESTIMATED_UTILITIES,
};
use super::domain::{ApartmentFinancials, AssignmentCostResult};
use super::money::Yen;
use super::proration::calculate_prorated_rent;
use super::splitting::calculate_shared_rent;
use crate::config::CostPolicyConfig;
use chrono::NaiveDate;
use tracing::debug;

/// Months billed at the full monthly total after the (possibly prorated) first month.
const MONTHS_AFTER_MOVE_IN: i64 = 11;

/// Computes the full cost breakdown for assigning one employee to an apartment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentCostCalculator {
    estimated_utilities: Yen,
}

impl Default for AssignmentCostCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_ESTIMATED_UTILITIES)
    }
}

impl From<&CostPolicyConfig> for AssignmentCostCalculator {
    fn from(config: &CostPolicyConfig) -> Self {
        Self::new(config.estimated_utilities)
    }
}

impl AssignmentCostCalculator {
    pub fn new(estimated_utilities: Yen) -> Self {
        Self {
            estimated_utilities,
        }
    }

    pub fn estimated_utilities(&self) -> Yen {
        self.estimated_utilities
    }

    /// `custom_monthly_rate` replaces the per-person base rent as given; it is
    /// never divided among occupants. Fees, deposit and key money are still
    /// split by the apartment's pricing policy.
    pub fn calculate(
        &self,
        apartment: &ApartmentFinancials,
        move_in: NaiveDate,
        custom_monthly_rate: Option<Yen>,
    ) -> AssignmentCostResult {
        let policy = apartment.pricing_type;
        let occupants = apartment.current_occupants;
        let split = |amount: Yen| calculate_shared_rent(amount, occupants, policy);

        let base_rent_per_person =
            custom_monthly_rate.unwrap_or_else(|| split(apartment.monthly_rent));

        let monthly_inputs = MonthlyCostInputs::new(base_rent_per_person)
            .management_fee(split(apartment.management_fee))
            .utilities_included(apartment.utilities_included)
            .parking(apartment.parking_included, split(apartment.parking_fee))
            .estimated_utilities(self.estimated_utilities);
        let monthly_costs = calculate_total_monthly_cost(&monthly_inputs);

        let prorated_first_month =
            calculate_prorated_rent(monthly_costs.total_monthly, move_in, None);

        let initial_costs = calculate_initial_costs(
            split(apartment.deposit),
            split(apartment.key_money),
            prorated_first_month.prorated_rent,
        );

        let annual_cost_first_year =
            initial_costs.total_initial + monthly_costs.total_monthly * MONTHS_AFTER_MOVE_IN;

        debug!(
            pricing = policy.label(),
            occupants,
            custom_rate = custom_monthly_rate.is_some(),
            %move_in,
            total_monthly = monthly_costs.total_monthly.amount(),
            total_initial = initial_costs.total_initial.amount(),
            annual = annual_cost_first_year.amount(),
            "assignment costs calculated"
        );

        AssignmentCostResult {
            pricing_type: policy,
            is_custom_rate: custom_monthly_rate.is_some(),
            base_rent_per_person,
            monthly_costs,
            prorated_first_month,
            initial_costs,
            annual_cost_first_year,
            occupants,
        }
    }
}

/// [`AssignmentCostCalculator::calculate`] with the standard utilities estimate.
pub fn calculate_assignment_costs(
    apartment: &ApartmentFinancials,
    move_in: NaiveDate,
    custom_monthly_rate: Option<Yen>,
) -> AssignmentCostResult {
    AssignmentCostCalculator::default().calculate(apartment, move_in, custom_monthly_rate)
}
