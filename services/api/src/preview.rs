use chrono::NaiveDate;
use clap::Args;
use shataku::config::AppConfig;
use shataku::costs::format::format_long_date;
use shataku::costs::{
    calculate_prorated_rent, preview_costs, validate_charge, ApartmentRecord,
    AssignmentCostCalculator, CostPreviewRequest, CostPreviewResponse, ProrationResult, Yen,
};
use shataku::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct PreviewArgs {
    /// Whole-apartment monthly rent in yen
    #[arg(long)]
    pub(crate) monthly_rent: i64,
    /// Security deposit (敷金) in yen
    #[arg(long)]
    pub(crate) deposit: Option<i64>,
    /// Key money (礼金) in yen
    #[arg(long)]
    pub(crate) key_money: Option<i64>,
    /// Monthly management fee (管理費) in yen
    #[arg(long)]
    pub(crate) management_fee: Option<i64>,
    /// Monthly parking fee in yen, charged when parking is not included
    #[arg(long)]
    pub(crate) parking_fee: Option<i64>,
    /// Pricing type: shared or fixed
    #[arg(long, default_value = "shared")]
    pub(crate) pricing: String,
    /// Occupants already living in the apartment
    #[arg(long, default_value_t = 0)]
    pub(crate) occupants: u32,
    /// Maximum occupants the apartment allows
    #[arg(long)]
    pub(crate) capacity: Option<u32>,
    /// Utilities are bundled into the rent
    #[arg(long)]
    pub(crate) utilities_included: bool,
    /// Parking is bundled into the rent
    #[arg(long)]
    pub(crate) parking_included: bool,
    /// Move-in date (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) move_in: NaiveDate,
    /// Per-person monthly rate overriding the calculated rent
    #[arg(long)]
    pub(crate) custom_rate: Option<i64>,
    /// Divide shared charges by the recorded occupants only
    #[arg(long)]
    pub(crate) exclude_incoming: bool,
    /// Print the response as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ProrateArgs {
    /// Monthly rent in yen
    #[arg(long)]
    pub(crate) monthly_rent: i64,
    /// Move-in date (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) move_in: NaiveDate,
    /// Optional move-out date (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) move_out: Option<NaiveDate>,
}

pub(crate) fn run_preview(args: PreviewArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let calculator = AssignmentCostCalculator::from(&config.costs);
    let json = args.json;
    let request = preview_request(args);

    let preview = preview_costs(&calculator, &request)?;
    if json {
        println!("{}", preview_json(&preview)?);
    } else {
        render_preview(&preview);
    }

    Ok(())
}

fn preview_json(preview: &CostPreviewResponse) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(preview)?)
}

pub(crate) fn run_prorate(args: ProrateArgs) -> Result<(), AppError> {
    let monthly_rent = validate_charge("monthly_rent", args.monthly_rent)?;
    let result = calculate_prorated_rent(monthly_rent, args.move_in, args.move_out);
    render_proration(&result, args.move_in);
    Ok(())
}

fn preview_request(args: PreviewArgs) -> CostPreviewRequest {
    CostPreviewRequest {
        apartment: ApartmentRecord {
            apartment_code: None,
            name: None,
            monthly_rent: Some(args.monthly_rent),
            deposit: args.deposit,
            key_money: args.key_money,
            management_fee: args.management_fee,
            parking_fee: args.parking_fee,
            pricing_type: Some(args.pricing),
            current_occupants: args.occupants,
            capacity: args.capacity,
            utilities_included: args.utilities_included,
            parking_included: args.parking_included,
        },
        move_in_date: args.move_in,
        custom_monthly_rate: args.custom_rate.map(Yen::new),
        include_incoming_occupant: !args.exclude_incoming,
    }
}

fn render_preview(preview: &CostPreviewResponse) {
    let costs = &preview.costs;
    let apartment = &preview.apartment;

    println!("Assignment cost preview");
    println!(
        "Move-in {} | {} pricing | {} -> {} occupants{}",
        preview.display.move_in,
        apartment.pricing_type.label(),
        apartment.current_occupants,
        apartment.future_occupants,
        match apartment.capacity {
            Some(capacity) => format!(" (capacity {capacity})"),
            None => String::new(),
        }
    );

    let rent_note = if costs.is_custom_rate {
        " (custom rate)"
    } else {
        ""
    };
    println!("\nMonthly costs per person");
    println!("- Rent: {}{}", costs.base_rent_per_person, rent_note);
    println!("- Management fee: {}", costs.monthly_costs.management_fee);
    println!("- Utilities: {}", costs.monthly_costs.utilities);
    println!("- Parking: {}", costs.monthly_costs.parking);
    println!("- Total: {}", costs.monthly_costs.total_monthly);

    println!("\nFirst month");
    render_proration(&costs.prorated_first_month, preview.move_in_date);

    println!("\nInitial costs");
    println!("- Deposit: {}", costs.initial_costs.deposit);
    println!("- Key money: {}", costs.initial_costs.key_money);
    println!("- First month rent: {}", costs.initial_costs.first_month_rent);
    println!("- Total due at move-in: {}", costs.initial_costs.total_initial);

    println!("\nFirst-year cost: {}", costs.annual_cost_first_year);
}

fn render_proration(result: &ProrationResult, move_in: NaiveDate) {
    if result.is_full_month {
        println!(
            "- Full month from {}: {}",
            format_long_date(move_in),
            result.prorated_rent
        );
    } else {
        println!(
            "- {} of {} days from {}: {} (daily rate ¥{:.2}, full month {})",
            result.days_occupied,
            result.total_days_in_month,
            format_long_date(move_in),
            result.prorated_rent,
            result.daily_rate,
            result.full_month_rent
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shataku::costs::{ApartmentRecordError, PricingPolicy};

    fn args() -> PreviewArgs {
        PreviewArgs {
            monthly_rent: 60_000,
            deposit: Some(60_000),
            key_money: None,
            management_fee: Some(6_000),
            parking_fee: None,
            pricing: "shared".to_string(),
            occupants: 2,
            capacity: Some(4),
            utilities_included: false,
            parking_included: true,
            move_in: NaiveDate::from_ymd_opt(2024, 3, 16).expect("valid date"),
            custom_rate: None,
            exclude_incoming: false,
            json: false,
        }
    }

    #[test]
    fn preview_request_counts_incoming_by_default() {
        let request = preview_request(args());
        assert!(request.include_incoming_occupant);
        assert_eq!(request.apartment.monthly_rent, Some(60_000));

        let preview = preview_costs(&AssignmentCostCalculator::default(), &request)
            .expect("valid preview");
        assert_eq!(preview.apartment.future_occupants, 3);
        assert_eq!(preview.costs.pricing_type, PricingPolicy::Shared);
        assert_eq!(preview.costs.monthly_costs.total_monthly, Yen::new(30_000));
    }

    #[test]
    fn custom_rate_flag_maps_to_yen() {
        let mut custom = args();
        custom.custom_rate = Some(22_000);
        custom.exclude_incoming = true;
        let request = preview_request(custom);
        assert_eq!(request.custom_monthly_rate, Some(Yen::new(22_000)));
        assert!(!request.include_incoming_occupant);
    }

    #[test]
    fn prorate_rejects_negative_rent() {
        let err = run_prorate(ProrateArgs {
            monthly_rent: -5,
            move_in: NaiveDate::from_ymd_opt(2024, 3, 16).expect("valid date"),
            move_out: None,
        })
        .expect_err("negative rent rejected");
        assert!(matches!(err, AppError::Apartment(_)));
    }

    #[test]
    fn prorate_rejects_rent_beyond_the_charge_limit() {
        let err = run_prorate(ProrateArgs {
            monthly_rent: i64::MAX,
            move_in: NaiveDate::from_ymd_opt(2024, 3, 16).expect("valid date"),
            move_out: None,
        })
        .expect_err("oversized rent rejected");
        assert!(matches!(
            err,
            AppError::Apartment(ApartmentRecordError::AmountTooLarge { .. })
        ));
    }

    #[test]
    fn preview_json_renders_the_full_response() {
        let preview = preview_costs(&AssignmentCostCalculator::default(), &preview_request(args()))
            .expect("valid preview");
        let body = preview_json(&preview).expect("json body");
        let payload: serde_json::Value = serde_json::from_str(&body).expect("parses back");
        assert_eq!(payload["costs"]["monthly_costs"]["total_monthly"], 30_000);
        assert_eq!(payload["display"]["move_in"], "2024年3月16日");
    }
}
