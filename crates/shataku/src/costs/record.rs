use super::domain::{ApartmentFinancials, PricingPolicy};
use super::money::Yen;
use serde::{Deserialize, Serialize};

/// Apartment row as supplied by the housing management API. Money columns
/// are nullable there; a missing figure means nothing is charged for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApartmentRecord {
    #[serde(default)]
    pub apartment_code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub monthly_rent: Option<i64>,
    #[serde(default)]
    pub deposit: Option<i64>,
    #[serde(default)]
    pub key_money: Option<i64>,
    #[serde(default)]
    pub management_fee: Option<i64>,
    #[serde(default)]
    pub parking_fee: Option<i64>,
    #[serde(default)]
    pub pricing_type: Option<String>,
    #[serde(default)]
    pub current_occupants: u32,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub utilities_included: bool,
    #[serde(default)]
    pub parking_included: bool,
}

/// Which head count shared charges are divided by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccupantCount {
    /// The occupants already living in the apartment.
    AsRecorded,
    /// The recorded occupants plus the employee being assigned.
    IncludingIncoming,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApartmentRecordError {
    #[error("{field} must not be negative (got {amount})")]
    NegativeAmount { field: &'static str, amount: i64 },
    #[error("{field} of {amount} exceeds the limit of {limit}")]
    AmountTooLarge {
        field: &'static str,
        amount: i64,
        limit: i64,
    },
    #[error("unknown pricing type '{0}', expected 'shared' or 'fixed'")]
    UnknownPricingType(String),
    #[error("{occupants} occupants exceed the apartment capacity of {capacity}")]
    OverCapacity { occupants: u32, capacity: u32 },
    #[error("shared pricing needs at least one occupant to divide charges by")]
    NoOccupants,
}

impl ApartmentRecord {
    pub fn pricing_policy(&self) -> Result<PricingPolicy, ApartmentRecordError> {
        match self.pricing_type.as_deref().map(str::trim) {
            None | Some("") => Ok(PricingPolicy::default()),
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "shared" => Ok(PricingPolicy::Shared),
                "fixed" => Ok(PricingPolicy::Fixed),
                _ => Err(ApartmentRecordError::UnknownPricingType(raw.to_string())),
            },
        }
    }

    pub fn occupants(&self, count: OccupantCount) -> u32 {
        match count {
            OccupantCount::AsRecorded => self.current_occupants,
            OccupantCount::IncludingIncoming => self.current_occupants.saturating_add(1),
        }
    }

    /// Validates the record and converts it into engine inputs.
    pub fn financials(
        &self,
        count: OccupantCount,
    ) -> Result<ApartmentFinancials, ApartmentRecordError> {
        let pricing_type = self.pricing_policy()?;
        let occupants = self.occupants(count);

        if let Some(capacity) = self.capacity {
            if occupants > capacity {
                return Err(ApartmentRecordError::OverCapacity {
                    occupants,
                    capacity,
                });
            }
        }
        if pricing_type == PricingPolicy::Shared && occupants == 0 {
            return Err(ApartmentRecordError::NoOccupants);
        }

        Ok(ApartmentFinancials {
            monthly_rent: amount("monthly_rent", self.monthly_rent)?,
            deposit: amount("deposit", self.deposit)?,
            key_money: amount("key_money", self.key_money)?,
            management_fee: amount("management_fee", self.management_fee)?,
            pricing_type,
            current_occupants: occupants,
            utilities_included: self.utilities_included,
            parking_included: self.parking_included,
            parking_fee: amount("parking_fee", self.parking_fee)?,
        })
    }
}

/// Checks a single charge lies between zero and [`Yen::MAX_CHARGE`].
pub fn validate_charge(field: &'static str, amount: i64) -> Result<Yen, ApartmentRecordError> {
    if amount < 0 {
        return Err(ApartmentRecordError::NegativeAmount { field, amount });
    }
    if amount > Yen::MAX_CHARGE.amount() {
        return Err(ApartmentRecordError::AmountTooLarge {
            field,
            amount,
            limit: Yen::MAX_CHARGE.amount(),
        });
    }
    Ok(Yen::new(amount))
}

fn amount(field: &'static str, value: Option<i64>) -> Result<Yen, ApartmentRecordError> {
    value.map_or(Ok(Yen::ZERO), |amount| validate_charge(field, amount))
}
