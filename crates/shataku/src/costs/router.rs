use super::assignment::AssignmentCostCalculator;
use super::domain::{AssignmentCostResult, PricingPolicy, ProrationResult};
use super::format::{format_long_date, format_yen};
use super::money::Yen;
use super::proration::calculate_prorated_rent;
use super::record::{validate_charge, ApartmentRecord, OccupantCount};
use crate::error::AppError;
use axum::{extract::State, routing::post, Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Preview of what an assignment would cost before it is committed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostPreviewRequest {
    pub apartment: ApartmentRecord,
    pub move_in_date: NaiveDate,
    #[serde(default)]
    pub custom_monthly_rate: Option<Yen>,
    /// Count the employee being assigned as an extra occupant.
    #[serde(default = "include_incoming_default")]
    pub include_incoming_occupant: bool,
}

fn include_incoming_default() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApartmentSummary {
    pub apartment_code: Option<String>,
    pub name: Option<String>,
    pub pricing_type: PricingPolicy,
    pub current_occupants: u32,
    pub future_occupants: u32,
    pub capacity: Option<u32>,
}

/// Pre-formatted strings for display widgets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostDisplay {
    pub move_in: String,
    pub base_rent_per_person: String,
    pub monthly_total: String,
    pub first_month: String,
    pub initial_total: String,
    pub annual_total: String,
}

impl CostDisplay {
    fn new(costs: &AssignmentCostResult, move_in: NaiveDate) -> Self {
        Self {
            move_in: format_long_date(move_in),
            base_rent_per_person: format_yen(costs.base_rent_per_person),
            monthly_total: format_yen(costs.monthly_costs.total_monthly),
            first_month: format_yen(costs.prorated_first_month.prorated_rent),
            initial_total: format_yen(costs.initial_costs.total_initial),
            annual_total: format_yen(costs.annual_cost_first_year),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostPreviewResponse {
    pub apartment: ApartmentSummary,
    pub move_in_date: NaiveDate,
    pub costs: AssignmentCostResult,
    pub display: CostDisplay,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProrationRequest {
    pub monthly_rent: Yen,
    pub move_in_date: NaiveDate,
    #[serde(default)]
    pub move_out_date: Option<NaiveDate>,
}

/// Validates the request and runs the calculator over it.
pub fn preview_costs(
    calculator: &AssignmentCostCalculator,
    request: &CostPreviewRequest,
) -> Result<CostPreviewResponse, AppError> {
    let count = if request.include_incoming_occupant {
        OccupantCount::IncludingIncoming
    } else {
        OccupantCount::AsRecorded
    };

    if let Some(rate) = request.custom_monthly_rate {
        validate_charge("custom_monthly_rate", rate.amount())?;
    }

    let record = &request.apartment;
    let financials = record.financials(count)?;
    let costs = calculator.calculate(
        &financials,
        request.move_in_date,
        request.custom_monthly_rate,
    );
    let display = CostDisplay::new(&costs, request.move_in_date);

    Ok(CostPreviewResponse {
        apartment: ApartmentSummary {
            apartment_code: record.apartment_code.clone(),
            name: record.name.clone(),
            pricing_type: financials.pricing_type,
            current_occupants: record.current_occupants,
            future_occupants: financials.current_occupants,
            capacity: record.capacity,
        },
        move_in_date: request.move_in_date,
        costs,
        display,
    })
}

/// Router exposing cost preview and proration endpoints.
pub fn cost_preview_router(calculator: AssignmentCostCalculator) -> Router {
    Router::new()
        .route("/api/v1/assignments/cost-preview", post(cost_preview_handler))
        .route("/api/v1/assignments/proration", post(proration_handler))
        .with_state(calculator)
}

pub(crate) async fn cost_preview_handler(
    State(calculator): State<AssignmentCostCalculator>,
    Json(request): Json<CostPreviewRequest>,
) -> Result<Json<CostPreviewResponse>, AppError> {
    match preview_costs(&calculator, &request) {
        Ok(preview) => {
            info!(
                apartment = preview.apartment.apartment_code.as_deref().unwrap_or("-"),
                move_in = %preview.move_in_date,
                occupants = preview.apartment.future_occupants,
                total_monthly = preview.costs.monthly_costs.total_monthly.amount(),
                "cost preview served"
            );
            Ok(Json(preview))
        }
        Err(err) => {
            warn!(error = %err, "cost preview rejected");
            Err(err)
        }
    }
}

pub(crate) async fn proration_handler(
    Json(request): Json<ProrationRequest>,
) -> Result<Json<ProrationResult>, AppError> {
    let monthly_rent = validate_charge("monthly_rent", request.monthly_rent.amount())?;

    Ok(Json(calculate_prorated_rent(
        monthly_rent,
        request.move_in_date,
        request.move_out_date,
    )))
}
