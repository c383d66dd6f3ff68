//! Import command: bulk-load a CSV dataset into the farm store

use crate::app::services::importer::{BulkImporter, ImportOptions, ImportReport};
use crate::app::services::store::FarmStore;
use crate::cli::args::ImportArgs;
use crate::cli::commands::shared::setup_logging;
use crate::{config, Error, Result};
use colored::Colorize;

/// Run a bulk import and print the itemized summary
pub fn run_import(args: ImportArgs) -> Result<()> {
    setup_logging(args.verbose, args.quiet)?;

    if !args.input.exists() {
        return Err(Error::configuration(format!(
            "input file not found: {}",
            args.input.display()
        )));
    }

    // A dry run transforms against a throwaway store so the real database is
    // never opened, let alone written.
    let store = if args.dry_run {
        FarmStore::open_in_memory()?
    } else {
        let path = args
            .database
            .unwrap_or_else(config::default_database_path);
        FarmStore::open(&path)?
    };

    let importer = BulkImporter::new(&store);
    let report = importer.import_csv(
        &args.input,
        ImportOptions {
            dry_run: args.dry_run,
            show_progress: !args.quiet,
        },
    )?;

    print_summary(&report, args.dry_run);
    Ok(())
}

fn print_summary(report: &ImportReport, dry_run: bool) {
    let title = if dry_run {
        "Import summary (dry run)"
    } else {
        "Import summary"
    };
    println!("\n{}", title.bold());
    println!("  rows read:  {}", report.rows_read);
    println!(
        "  accepted:   {} ({:.1}%)",
        report.accepted.to_string().green(),
        report.acceptance_rate()
    );
    println!(
        "  filtered:   {} (country {}, status {}, capacity {})",
        report.filtered, report.filtered_country, report.filtered_status, report.filtered_capacity
    );

    if report.rejected > 0 {
        println!("  rejected:   {}", report.rejected.to_string().yellow());
        for (row, rejection) in &report.rejections {
            println!("    row {}: {}", row, rejection);
        }
    } else {
        println!("  rejected:   0");
    }

    if !dry_run {
        println!("  inserted:   {}", report.inserted.to_string().green());
        if report.failed > 0 {
            println!("  store failed: {}", report.failed.to_string().red());
            for failure in &report.failures {
                println!("    #{} '{}': {}", failure.index, failure.name, failure.message);
            }
        } else {
            println!("  store failed: 0");
        }
    }
}
