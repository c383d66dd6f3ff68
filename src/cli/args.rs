//! Command-line argument definitions for the wind farm registry
//!
//! This module defines the complete CLI interface using the clap derive API.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the wind farm registry
///
/// A REST backend and CSV ingestion pipeline for a geographic inventory of
/// wind farms in the Balkans.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "windfarm-registry",
    version,
    about = "Geographic inventory of Balkan wind farms: REST backend and CSV import pipeline",
    long_about = "Maintains a SQLite inventory of operating wind farms across eleven Balkan \
                  countries. The import pipeline filters a raw global dataset down to eligible \
                  farms, the REST backend serves them with bilingual (Albanian/English) country \
                  search, and farms without recorded history get a synthetic production curve \
                  for display."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the registry
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the REST backend
    Serve(ServeArgs),
    /// Import a CSV dataset into the farm store
    Import(ImportArgs),
    /// Report the store's current contents
    Check(CheckArgs),
}

/// Arguments for the serve command
#[derive(Debug, Clone, Parser)]
pub struct ServeArgs {
    /// Host address to bind
    #[arg(long = "host", value_name = "HOST", help = "Host address to bind")]
    pub host: Option<String>,

    /// Port to bind
    #[arg(short = 'p', long = "port", value_name = "PORT", help = "Port to bind")]
    pub port: Option<u16>,

    /// Path to the SQLite database file
    ///
    /// Defaults to farms.db under the platform data directory. Created on
    /// first use if it does not exist.
    #[arg(
        long = "database",
        value_name = "PATH",
        help = "Path to the SQLite database file"
    )]
    pub database: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short = 'v', long = "verbose", help = "Enable verbose logging")]
    pub verbose: bool,
}

/// Arguments for the import command
#[derive(Debug, Clone, Parser)]
pub struct ImportArgs {
    /// Input CSV dataset
    ///
    /// Must carry a header row with at least: "Country/Area", "Status",
    /// "Capacity (MW)", "Latitude", "Longitude", "Project Name", "Operator".
    #[arg(value_name = "CSV_FILE", help = "Input CSV dataset to import")]
    pub input: PathBuf,

    /// Path to the SQLite database file
    #[arg(
        long = "database",
        value_name = "PATH",
        help = "Path to the SQLite database file"
    )]
    pub database: Option<PathBuf>,

    /// Transform and report without writing to the store
    #[arg(long = "dry-run", help = "Transform and report without writing to the store")]
    pub dry_run: bool,

    /// Suppress the progress spinner and reduce logging
    #[arg(short = 'q', long = "quiet", help = "Suppress progress output")]
    pub quiet: bool,

    /// Enable verbose (debug) logging
    #[arg(short = 'v', long = "verbose", help = "Enable verbose logging")]
    pub verbose: bool,
}

/// Arguments for the check command
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// Path to the SQLite database file
    #[arg(
        long = "database",
        value_name = "PATH",
        help = "Path to the SQLite database file"
    )]
    pub database: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short = 'v', long = "verbose", help = "Enable verbose logging")]
    pub verbose: bool,
}
