//! Balkan Wind Farm Registry
//!
//! A Rust service for maintaining a geographic inventory of wind farms in the
//! Balkans, built around a CSV ingestion pipeline and a small REST backend.
//!
//! This library provides tools for:
//! - Filtering and transforming raw tabular farm data into validated records
//! - Best-effort bulk import with per-row failure reporting
//! - Bilingual (Albanian/English) country-name normalization and matching
//! - A SQLite-backed farm store with an explicit open-before-serve lifecycle
//! - Synthetic 24-hour production curves for farms without recorded history

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod country;
        pub mod estimator;
        pub mod importer;
        pub mod query;
        pub mod store;
        pub mod transformer;
    }
    pub mod http {
        pub mod handlers;
        pub mod server;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{FarmRecord, NewFarm, RawRow};
pub use config::Config;

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for registry operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Database operation failed
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: Option<rusqlite::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Farm not found
    #[error("Farm not found: id = {id}")]
    FarmNotFound { id: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a database error with context
    pub fn database(message: impl Into<String>, source: Option<rusqlite::Error>) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a farm not found error
    pub fn farm_not_found(id: impl Into<String>) -> Self {
        Self::FarmNotFound { id: id.into() }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(error: rusqlite::Error) -> Self {
        Self::Database {
            message: "database operation failed".to_string(),
            source: Some(error),
        }
    }
}
