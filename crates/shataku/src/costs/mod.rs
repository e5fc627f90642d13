//! Rent proration and per-occupant cost allocation for apartment assignments.
//!
//! Every calculation is a pure function of its inputs; nothing here holds state
//! between calls.

mod aggregate;
mod assignment;
pub mod calendar;
pub mod domain;
pub mod format;
mod money;
mod proration;
pub mod record;
pub mod router;
mod splitting;

pub use aggregate::{
    calculate_initial_costs, calculate_total_monthly_cost, MonthlyCostInputs,
    DEFAULT_ESTIMATED_UTILITIES,
};
pub use assignment::{calculate_assignment_costs, AssignmentCostCalculator};
pub use calendar::{days_in_month, MonthContext};
pub use domain::{
    ApartmentFinancials, AssignmentCostResult, InitialCostBreakdown, MonthlyCostBreakdown,
    PricingPolicy, ProrationResult,
};
pub use money::Yen;
pub use proration::calculate_prorated_rent;
pub use record::{validate_charge, ApartmentRecord, ApartmentRecordError, OccupantCount};
pub use router::{cost_preview_router, preview_costs, CostPreviewRequest, CostPreviewResponse};
pub use splitting::calculate_shared_rent;
