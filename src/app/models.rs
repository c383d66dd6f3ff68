//! Data models for the wind farm registry
//!
//! This module contains the core data structures: the persisted farm record,
//! the pre-insert candidate produced by the transformer, the raw source row
//! consumed during ingestion, and the synthetic production curve point.

use crate::constants::PRODUCTION_FACTOR;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Persisted Farm Record
// =============================================================================

/// A wind farm record as persisted in the farm store
///
/// JSON field names are camelCase to match the registry's public REST API.
/// `id`, `created_at`, and `updated_at` are assigned by the store on creation
/// and are immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmRecord {
    /// Store-assigned unique identifier (UUID v4)
    pub id: String,

    /// Free-text farm label
    pub name: String,

    /// Country name as supplied at write time; canonical or localized.
    /// Normalization happens only at query/display time.
    pub country: String,

    /// WGS84 latitude in decimal degrees, within [-90, 90]
    pub latitude: f64,

    /// WGS84 longitude in decimal degrees, within [-180, 180]
    pub longitude: f64,

    /// Installed capacity in megawatts, positive and finite
    pub capacity: f64,

    /// Annual energy output in gigawatt-hours
    pub production: f64,

    /// Operating company, empty string when unknown
    pub operator: String,

    /// Store-assigned creation timestamp
    pub created_at: DateTime<Utc>,

    /// Store-assigned last-modification timestamp
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Pre-Insert Candidate
// =============================================================================

/// A validated farm candidate awaiting insertion
///
/// Produced by the record transformer during bulk import or built from an
/// interactive creation request. Carries everything a [`FarmRecord`] does
/// except the store-assigned id and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFarm {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub capacity: f64,
    pub production: f64,
    pub operator: String,
}

impl NewFarm {
    /// Create a new farm candidate with validation
    pub fn new(
        name: String,
        country: String,
        latitude: f64,
        longitude: f64,
        capacity: f64,
        production: f64,
        operator: String,
    ) -> Result<Self> {
        let farm = Self {
            name,
            country,
            latitude,
            longitude,
            capacity,
            production,
            operator,
        };

        farm.validate()?;
        Ok(farm)
    }

    /// Validate candidate data for consistency and valid ranges
    pub fn validate(&self) -> Result<()> {
        // Validate latitude range
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(Error::data_validation(format!(
                "Invalid latitude {}: must be between -90 and 90 degrees",
                self.latitude
            )));
        }

        // Validate longitude range
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(Error::data_validation(format!(
                "Invalid longitude {}: must be between -180 and 180 degrees",
                self.longitude
            )));
        }

        // Validate capacity is a positive finite number
        if !self.capacity.is_finite() || self.capacity <= 0.0 {
            return Err(Error::data_validation(format!(
                "Invalid capacity {}: must be a positive number of megawatts",
                self.capacity
            )));
        }

        // Validate production is a finite non-negative number
        if !self.production.is_finite() || self.production < 0.0 {
            return Err(Error::data_validation(format!(
                "Invalid production {}: must be a non-negative number of gigawatt-hours",
                self.production
            )));
        }

        // Validate required fields are not empty
        if self.name.trim().is_empty() {
            return Err(Error::data_validation(
                "Farm name cannot be empty".to_string(),
            ));
        }

        if self.country.trim().is_empty() {
            return Err(Error::data_validation(
                "Country cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Derived annual production heuristic for a given capacity
    pub fn estimated_production(capacity_mw: f64) -> f64 {
        capacity_mw * PRODUCTION_FACTOR
    }

    /// Farm location as a (latitude, longitude) tuple
    pub fn location(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

// =============================================================================
// Raw Source Row
// =============================================================================

/// An untyped row from the ingestion dataset
///
/// Field names map directly onto the source CSV headers. All values are kept
/// as strings; numeric parsing is the transformer's job so that malformed
/// values can be rejected explicitly instead of propagating as NaN.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Country/Area", default)]
    pub country: String,

    #[serde(rename = "Status", default)]
    pub status: String,

    #[serde(rename = "Capacity (MW)", default)]
    pub capacity: String,

    #[serde(rename = "Latitude", default)]
    pub latitude: String,

    #[serde(rename = "Longitude", default)]
    pub longitude: String,

    #[serde(rename = "Project Name", default)]
    pub project_name: String,

    #[serde(rename = "Operator", default)]
    pub operator: String,
}

// =============================================================================
// Synthetic Production Curve
// =============================================================================

/// One point of the synthetic 24-hour production curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPoint {
    /// Hour label, "1" through "24"
    pub hour: String,

    /// Approximated power output in megawatts
    pub power: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_farm() -> NewFarm {
        NewFarm {
            name: "Vlora Wind".to_string(),
            country: "Albania".to_string(),
            latitude: 41.3,
            longitude: 19.8,
            capacity: 50.0,
            production: 125.0,
            operator: String::new(),
        }
    }

    #[test]
    fn test_valid_farm_passes_validation() {
        assert!(valid_farm().validate().is_ok());
    }

    #[test]
    fn test_latitude_out_of_range_rejected() {
        let mut farm = valid_farm();
        farm.latitude = 91.0;
        assert!(farm.validate().is_err());

        farm.latitude = f64::NAN;
        assert!(farm.validate().is_err());
    }

    #[test]
    fn test_longitude_out_of_range_rejected() {
        let mut farm = valid_farm();
        farm.longitude = -180.5;
        assert!(farm.validate().is_err());
    }

    #[test]
    fn test_capacity_must_be_positive_finite() {
        let mut farm = valid_farm();
        farm.capacity = 0.0;
        assert!(farm.validate().is_err());

        farm.capacity = f64::NAN;
        assert!(farm.validate().is_err());

        farm.capacity = f64::INFINITY;
        assert!(farm.validate().is_err());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut farm = valid_farm();
        farm.name = "   ".to_string();
        assert!(farm.validate().is_err());
    }

    #[test]
    fn test_estimated_production_heuristic() {
        assert_eq!(NewFarm::estimated_production(50.0), 125.0);
        assert_eq!(NewFarm::estimated_production(10.0), 25.0);
    }

    #[test]
    fn test_farm_record_json_uses_camel_case() {
        let record = FarmRecord {
            id: "abc".to_string(),
            name: "Test".to_string(),
            country: "Albania".to_string(),
            latitude: 41.0,
            longitude: 20.0,
            capacity: 25.0,
            production: 62.5,
            operator: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"updatedAt\""));
        assert!(!json.contains("\"created_at\""));
    }
}
