//! Record filtering and transformation for bulk import
//!
//! Decides which raw dataset rows enter the registry and shapes accepted rows
//! into validated farm candidates. Two distinct exclusion classes exist and
//! must not be conflated:
//!
//! - **Filtered**: the row fails the fixed inclusion policy (country
//!   allow-list, operating status, capacity threshold). This is deliberate
//!   selection, counted but never reported as an error.
//! - **Rejected**: the row is eligible but carries a malformed or out-of-range
//!   value. These are data-integrity failures, itemized in the import report.
//!   A rejected row never produces a NaN-bearing record.

use crate::app::models::{NewFarm, RawRow};
use crate::constants::{
    columns, BALKAN_COUNTRIES, DEFAULT_FARM_NAME, MIN_CAPACITY_MW, STATUS_OPERATING,
};
use tracing::debug;

/// Outcome of transforming one raw source row
#[derive(Debug, Clone, PartialEq)]
pub enum TransformOutcome {
    /// Row passed policy and validation; candidate is ready for insertion
    Accepted(NewFarm),
    /// Row excluded by the fixed inclusion policy
    Filtered(FilterReason),
    /// Row eligible but malformed; never persisted
    Rejected(RowRejection),
}

/// Why a row was excluded by the inclusion policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterReason {
    /// Country is not in the Balkan allow-list
    CountryNotAllowed,
    /// Status is not the "operating" marker
    NotOperating,
    /// Parsed capacity is below the minimum threshold
    BelowCapacityThreshold,
}

/// Why an eligible row was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum RowRejection {
    /// A numeric source field could not be parsed to a finite number
    MalformedNumber {
        field: &'static str,
        value: String,
    },
    /// Parsed values failed record validation (e.g., coordinate out of range)
    InvalidRecord { message: String },
}

impl std::fmt::Display for RowRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedNumber { field, value } => {
                write!(f, "field '{}' is not a finite number: '{}'", field, value)
            }
            Self::InvalidRecord { message } => write!(f, "{}", message),
        }
    }
}

/// Transform one raw row into a farm candidate
///
/// Applies the inclusion policy in order (country allow-list, operating
/// status, capacity threshold), then parses and validates the numeric fields.
/// Pure function of the row plus the fixed policy constants.
pub fn transform(row: &RawRow) -> TransformOutcome {
    // Policy check 1: Balkan allow-list, exact match on the source spelling
    if !BALKAN_COUNTRIES.contains(&row.country.as_str()) {
        return TransformOutcome::Filtered(FilterReason::CountryNotAllowed);
    }

    // Policy check 2: only farms currently operating
    if row.status != STATUS_OPERATING {
        return TransformOutcome::Filtered(FilterReason::NotOperating);
    }

    // Policy check 3: capacity threshold. A malformed capacity on an
    // otherwise-eligible row is a rejection, not a policy filter.
    let capacity = match parse_numeric(columns::CAPACITY, &row.capacity) {
        Ok(value) => value,
        Err(rejection) => return TransformOutcome::Rejected(rejection),
    };
    if capacity < MIN_CAPACITY_MW {
        return TransformOutcome::Filtered(FilterReason::BelowCapacityThreshold);
    }

    let latitude = match parse_numeric(columns::LATITUDE, &row.latitude) {
        Ok(value) => value,
        Err(rejection) => return TransformOutcome::Rejected(rejection),
    };

    let longitude = match parse_numeric(columns::LONGITUDE, &row.longitude) {
        Ok(value) => value,
        Err(rejection) => return TransformOutcome::Rejected(rejection),
    };

    let name = if row.project_name.trim().is_empty() {
        DEFAULT_FARM_NAME.to_string()
    } else {
        row.project_name.clone()
    };

    match NewFarm::new(
        name,
        row.country.clone(),
        latitude,
        longitude,
        capacity,
        NewFarm::estimated_production(capacity),
        row.operator.clone(),
    ) {
        Ok(farm) => TransformOutcome::Accepted(farm),
        Err(error) => {
            debug!("Row for '{}' failed validation: {}", row.country, error);
            TransformOutcome::Rejected(RowRejection::InvalidRecord {
                message: error.to_string(),
            })
        }
    }
}

/// Parse a source field to a finite floating point number
///
/// Strings like "NaN" and "inf" parse successfully in Rust but violate the
/// record invariants, so finiteness is checked here as well.
fn parse_numeric(
    field: &'static str,
    raw: &str,
) -> std::result::Result<f64, RowRejection> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RowRejection::MalformedNumber {
            field,
            value: raw.to_string(),
        }),
    }
}
