//! Best-effort bulk import of raw dataset rows
//!
//! Drives the record transformer over a full CSV dataset, submits the
//! accepted candidates to the farm store as one unordered bulk insert, and
//! reports the itemized outcome. Row-level and record-level failures are
//! recovered locally and aggregated; only I/O and store connectivity failures
//! propagate to the caller.
//!
//! A crash mid-import leaves whatever subset the store already committed as
//! the durable result; no transaction wraps the batch and nothing is rolled
//! back on row-level failure.

use crate::app::models::RawRow;
use crate::app::services::store::{FarmStore, InsertFailure};
use crate::app::services::transformer::{self, FilterReason, RowRejection, TransformOutcome};
use crate::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tracing::{info, warn};

/// Options controlling an import run
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOptions {
    /// Transform and report only; never touch the store
    pub dry_run: bool,
    /// Show a progress spinner while reading rows
    pub show_progress: bool,
}

/// Itemized outcome of one import run
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    /// Total rows read from the source
    pub rows_read: usize,
    /// Rows accepted by the transformer
    pub accepted: usize,
    /// Rows excluded by the inclusion policy (deliberate, not errors)
    pub filtered: usize,
    /// ... of which: country not in the allow-list
    pub filtered_country: usize,
    /// ... of which: status not "operating"
    pub filtered_status: usize,
    /// ... of which: capacity below the threshold
    pub filtered_capacity: usize,
    /// Rows rejected for malformed or out-of-range values
    pub rejected: usize,
    /// Itemized rejections, with source row numbers (1-based, excluding header)
    pub rejections: Vec<(usize, RowRejection)>,
    /// Records actually persisted by the store
    pub inserted: usize,
    /// Records the store rejected during the bulk insert
    pub failed: usize,
    /// Itemized store-level failures
    pub failures: Vec<InsertFailure>,
}

impl ImportReport {
    /// Acceptance rate over all rows read, as a percentage
    pub fn acceptance_rate(&self) -> f64 {
        if self.rows_read == 0 {
            0.0
        } else {
            (self.accepted as f64 / self.rows_read as f64) * 100.0
        }
    }

    /// Whether every accepted record was persisted
    pub fn is_clean(&self) -> bool {
        self.rejected == 0 && self.failed == 0
    }
}

/// Bulk importer over an explicitly injected farm store
#[derive(Debug)]
pub struct BulkImporter<'a> {
    store: &'a FarmStore,
}

impl<'a> BulkImporter<'a> {
    /// Create an importer backed by the given store
    pub fn new(store: &'a FarmStore) -> Self {
        Self { store }
    }

    /// Import a CSV dataset file
    ///
    /// The file must carry a header row naming at least the source columns
    /// consumed by [`RawRow`]. Unknown columns are ignored.
    pub fn import_csv(&self, path: &Path, options: ImportOptions) -> Result<ImportReport> {
        info!("Reading dataset from {}", path.display());

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_path(path)
            .map_err(|e| {
                crate::Error::csv_parsing(path.display().to_string(), "failed to open dataset", Some(e))
            })?;

        let progress = if options.show_progress {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            Some(pb)
        } else {
            None
        };

        let mut rows = Vec::new();
        let mut report = ImportReport::default();

        for (line, result) in reader.deserialize::<RawRow>().enumerate() {
            let row_number = line + 1;
            match result {
                Ok(row) => rows.push((row_number, row)),
                Err(error) => {
                    // A structurally broken row is a rejection, not a fatal
                    // parse failure: the rest of the dataset still imports.
                    warn!("Row {} unreadable: {}", row_number, error);
                    report.rejected += 1;
                    report.rejections.push((
                        row_number,
                        RowRejection::InvalidRecord {
                            message: format!("unreadable row: {}", error),
                        },
                    ));
                }
            }
            report.rows_read += 1;

            if let Some(pb) = &progress {
                pb.set_message(format!("read {} rows", report.rows_read));
                pb.tick();
            }
        }

        if let Some(pb) = &progress {
            pb.finish_with_message(format!("read {} rows", report.rows_read));
        }

        self.run(rows, report, options)
    }

    /// Import already-materialized rows (the batch entry point used by tests)
    pub fn import_rows(
        &self,
        rows: impl IntoIterator<Item = RawRow>,
        options: ImportOptions,
    ) -> Result<ImportReport> {
        let mut report = ImportReport::default();
        let numbered: Vec<(usize, RawRow)> = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| (i + 1, row))
            .collect();
        report.rows_read = numbered.len();
        self.run(numbered, report, options)
    }

    fn run(
        &self,
        rows: Vec<(usize, RawRow)>,
        mut report: ImportReport,
        options: ImportOptions,
    ) -> Result<ImportReport> {
        let mut batch = Vec::new();

        for (row_number, row) in &rows {
            match transformer::transform(row) {
                TransformOutcome::Accepted(farm) => {
                    report.accepted += 1;
                    batch.push(farm);
                }
                TransformOutcome::Filtered(reason) => {
                    report.filtered += 1;
                    match reason {
                        FilterReason::CountryNotAllowed => report.filtered_country += 1,
                        FilterReason::NotOperating => report.filtered_status += 1,
                        FilterReason::BelowCapacityThreshold => report.filtered_capacity += 1,
                    }
                }
                TransformOutcome::Rejected(rejection) => {
                    report.rejected += 1;
                    report.rejections.push((*row_number, rejection));
                }
            }
        }

        info!(
            "Transform complete: {} rows -> {} accepted, {} filtered, {} rejected",
            report.rows_read, report.accepted, report.filtered, report.rejected
        );

        if options.dry_run {
            info!("Dry run: skipping store insertion");
            return Ok(report);
        }

        let outcome = self.store.insert_many(&batch)?;
        report.inserted = outcome.inserted;
        report.failed = outcome.failures.len();
        report.failures = outcome.failures;

        info!(
            "Bulk insert complete: {} persisted, {} rejected by the store",
            report.inserted, report.failed
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::store::FarmStore;

    fn row(country: &str, status: &str, capacity: &str) -> RawRow {
        RawRow {
            country: country.to_string(),
            status: status.to_string(),
            capacity: capacity.to_string(),
            latitude: "41.3".to_string(),
            longitude: "19.8".to_string(),
            project_name: "Vlora Wind".to_string(),
            operator: String::new(),
        }
    }

    #[test]
    fn test_policy_example_imports_exactly_one_record() {
        let store = FarmStore::open_in_memory().unwrap();
        let importer = BulkImporter::new(&store);

        let rows = vec![
            row("Albania", "operating", "50"),
            row("Germany", "operating", "50"),
            row("Albania", "planned", "50"),
        ];

        let report = importer
            .import_rows(rows, ImportOptions::default())
            .unwrap();

        assert_eq!(report.rows_read, 3);
        assert_eq!(report.accepted, 1);
        assert_eq!(report.filtered, 2);
        assert_eq!(report.filtered_country, 1);
        assert_eq!(report.filtered_status, 1);
        assert_eq!(report.inserted, 1);
        assert_eq!(store.count().unwrap(), 1);

        let farms = store.list_all().unwrap();
        assert_eq!(farms[0].name, "Vlora Wind");
        assert_eq!(farms[0].country, "Albania");
        assert_eq!(farms[0].capacity, 50.0);
        assert_eq!(farms[0].production, 125.0);
    }

    #[test]
    fn test_malformed_rows_are_itemized_not_fatal() {
        let store = FarmStore::open_in_memory().unwrap();
        let importer = BulkImporter::new(&store);

        let mut bad = row("Albania", "operating", "50");
        bad.latitude = "n/a".to_string();

        let rows = vec![row("Albania", "operating", "50"), bad];
        let report = importer
            .import_rows(rows, ImportOptions::default())
            .unwrap();

        assert_eq!(report.accepted, 1);
        assert_eq!(report.rejected, 1);
        assert_eq!(report.rejections.len(), 1);
        assert_eq!(report.rejections[0].0, 2);
        assert_eq!(report.inserted, 1);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_dry_run_never_touches_the_store() {
        let store = FarmStore::open_in_memory().unwrap();
        let importer = BulkImporter::new(&store);

        let report = importer
            .import_rows(
                vec![row("Albania", "operating", "50")],
                ImportOptions {
                    dry_run: true,
                    show_progress: false,
                },
            )
            .unwrap();

        assert_eq!(report.accepted, 1);
        assert_eq!(report.inserted, 0);
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_acceptance_rate() {
        let mut report = ImportReport::default();
        assert_eq!(report.acceptance_rate(), 0.0);

        report.rows_read = 4;
        report.accepted = 1;
        assert_eq!(report.acceptance_rate(), 25.0);
    }
}
