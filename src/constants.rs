//! Application constants for the wind farm registry
//!
//! This module contains the fixed import policy, country mapping tables,
//! and default values used throughout the registry.

// =============================================================================
// Import Inclusion Policy
// =============================================================================

/// Countries eligible for import, exactly as spelled in the source dataset
pub const BALKAN_COUNTRIES: &[&str] = &[
    "Albania",
    "Bosnia and Herzegovina",
    "Bulgaria",
    "Croatia",
    "Greece",
    "Kosovo",
    "Montenegro",
    "North Macedonia",
    "Romania",
    "Serbia",
    "Slovenia",
];

/// Status marker a row must carry to be imported
pub const STATUS_OPERATING: &str = "operating";

/// Minimum installed capacity for inclusion, in megawatts
pub const MIN_CAPACITY_MW: f64 = 10.0;

/// Heuristic annual-output multiplier: production (GWh) = capacity (MW) * this
pub const PRODUCTION_FACTOR: f64 = 2.5;

/// Placeholder name for rows with a blank project name
pub const DEFAULT_FARM_NAME: &str = "Wind Farm";

// =============================================================================
// Country Name Normalization
// =============================================================================

/// Albanian country spellings and their canonical English equivalents
///
/// The registry stores country names verbatim; this table is consulted only at
/// query/display time so a search in either language matches the same records.
pub const COUNTRY_SYNONYMS: &[(&str, &str)] = &[
    ("Kosova", "Kosovo"),
    ("Shqipëria", "Albania"),
    ("Maqedonia e Veriut", "North Macedonia"),
    ("Mali i Zi", "Montenegro"),
    ("Serbia", "Serbia"),
    ("Bosnja dhe Hercegovina", "Bosnia and Herzegovina"),
    ("Kroacia", "Croatia"),
    ("Sllovenia", "Slovenia"),
    ("Bullgaria", "Bulgaria"),
    ("Rumania", "Romania"),
    ("Greqia", "Greece"),
];

// =============================================================================
// Source Dataset Columns
// =============================================================================

/// CSV column headers consumed by the importer
pub mod columns {
    pub const COUNTRY: &str = "Country/Area";
    pub const STATUS: &str = "Status";
    pub const CAPACITY: &str = "Capacity (MW)";
    pub const LATITUDE: &str = "Latitude";
    pub const LONGITUDE: &str = "Longitude";
    pub const PROJECT_NAME: &str = "Project Name";
    pub const OPERATOR: &str = "Operator";
}

// =============================================================================
// Estimator Defaults
// =============================================================================

/// Hours in the synthetic production curve
pub const CURVE_POINTS: usize = 24;

/// Fallback production (GWh) when a record carries no usable value
pub const FALLBACK_PRODUCTION_GWH: f64 = 0.0;

/// Fallback capacity (MW) when a record carries no usable value
pub const FALLBACK_CAPACITY_MW: f64 = 10.0;

// =============================================================================
// Server Defaults
// =============================================================================

/// Default bind host for the REST backend
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port for the REST backend
pub const DEFAULT_PORT: u16 = 5000;

/// Default database file name under the platform data directory
pub const DEFAULT_DB_FILE: &str = "farms.db";
