use super::money::Yen;
use serde::{Deserialize, Serialize};

/// How whole-apartment charges translate to a per-occupant amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingPolicy {
    /// Charges are divided equally among current occupants.
    #[default]
    Shared,
    /// The stated figure is already the per-person charge.
    Fixed,
}

impl PricingPolicy {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Shared => "Shared",
            Self::Fixed => "Fixed",
        }
    }
}

/// Financial fields of the apartment an employee is being assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApartmentFinancials {
    pub monthly_rent: Yen,
    pub deposit: Yen,
    pub key_money: Yen,
    pub management_fee: Yen,
    pub pricing_type: PricingPolicy,
    /// Occupant count the shared charges are divided by.
    pub current_occupants: u32,
    pub utilities_included: bool,
    pub parking_included: bool,
    pub parking_fee: Yen,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProrationResult {
    pub full_month_rent: Yen,
    pub prorated_rent: Yen,
    pub days_occupied: u32,
    pub total_days_in_month: u32,
    pub is_full_month: bool,
    /// Display value rounded to two decimals; never fed back into a calculation.
    pub daily_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCostBreakdown {
    pub base_rent: Yen,
    pub management_fee: Yen,
    pub utilities: Yen,
    pub parking: Yen,
    pub total_monthly: Yen,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialCostBreakdown {
    pub deposit: Yen,
    pub key_money: Yen,
    pub first_month_rent: Yen,
    pub total_initial: Yen,
}

/// Full cost picture for a single employee's assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentCostResult {
    pub pricing_type: PricingPolicy,
    pub is_custom_rate: bool,
    pub base_rent_per_person: Yen,
    pub monthly_costs: MonthlyCostBreakdown,
    pub prorated_first_month: ProrationResult,
    pub initial_costs: InitialCostBreakdown,
    pub annual_cost_first_year: Yen,
    pub occupants: u32,
}
