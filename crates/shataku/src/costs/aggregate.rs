use super::domain::{InitialCostBreakdown, MonthlyCostBreakdown};
use super::money::Yen;

/// Average monthly utilities (光熱費) charged when the lease does not include them.
pub const DEFAULT_ESTIMATED_UTILITIES: Yen = Yen::new(8_000);

/// Inputs to [`calculate_total_monthly_cost`].
///
/// `new` fills in the usual defaults: no management fee, utilities and parking
/// included, no parking fee, and the standard utilities estimate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyCostInputs {
    pub base_rent: Yen,
    pub management_fee: Yen,
    pub utilities_included: bool,
    pub parking_included: bool,
    pub parking_fee: Yen,
    pub estimated_utilities: Yen,
}

impl MonthlyCostInputs {
    pub fn new(base_rent: Yen) -> Self {
        Self {
            base_rent,
            management_fee: Yen::ZERO,
            utilities_included: true,
            parking_included: true,
            parking_fee: Yen::ZERO,
            estimated_utilities: DEFAULT_ESTIMATED_UTILITIES,
        }
    }

    pub fn management_fee(mut self, fee: Yen) -> Self {
        self.management_fee = fee;
        self
    }

    pub fn utilities_included(mut self, included: bool) -> Self {
        self.utilities_included = included;
        self
    }

    pub fn parking(mut self, included: bool, fee: Yen) -> Self {
        self.parking_included = included;
        self.parking_fee = fee;
        self
    }

    pub fn estimated_utilities(mut self, estimate: Yen) -> Self {
        self.estimated_utilities = estimate;
        self
    }
}

pub fn calculate_total_monthly_cost(inputs: &MonthlyCostInputs) -> MonthlyCostBreakdown {
    let utilities = if inputs.utilities_included {
        Yen::ZERO
    } else {
        inputs.estimated_utilities
    };
    let parking = if inputs.parking_included {
        Yen::ZERO
    } else {
        inputs.parking_fee
    };

    MonthlyCostBreakdown {
        base_rent: inputs.base_rent,
        management_fee: inputs.management_fee,
        utilities,
        parking,
        total_monthly: inputs.base_rent + inputs.management_fee + utilities + parking,
    }
}

/// Move-in costs: deposit (敷金), key money (礼金) and the first month's rent.
///
/// Inputs are trusted; they come from apartment records validated upstream.
pub fn calculate_initial_costs(
    deposit: Yen,
    key_money: Yen,
    first_month_rent: Yen,
) -> InitialCostBreakdown {
    InitialCostBreakdown {
        deposit,
        key_money,
        first_month_rent,
        total_initial: [deposit, key_money, first_month_rent].into_iter().sum(),
    }
}
