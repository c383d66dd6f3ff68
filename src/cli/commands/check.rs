//! Check command: report the store's current contents
//!
//! A maintenance view: total record count plus one line per farm with its id
//! and name, useful for spot-checking ids a client reports as missing.

use crate::app::services::store::FarmStore;
use crate::cli::args::CheckArgs;
use crate::cli::commands::shared::setup_logging;
use crate::{config, Result};
use colored::Colorize;

/// Print the inventory report
pub fn run_check(args: CheckArgs) -> Result<()> {
    setup_logging(args.verbose, false)?;

    let path = args
        .database
        .unwrap_or_else(config::default_database_path);
    let store = FarmStore::open(&path)?;

    let farms = store.list_all()?;
    println!("{} {}", "Total farms:".bold(), farms.len());

    for (index, farm) in farms.iter().enumerate() {
        println!(
            "{:>4}. {} - {} ({}, {:.0} MW)",
            index + 1,
            farm.id,
            farm.name,
            farm.country,
            farm.capacity
        );
    }

    Ok(())
}
