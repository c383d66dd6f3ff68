//! Free-text farm listing and filtering
//!
//! Operates over an in-memory snapshot of the store's current contents, taken
//! per call; no locking and no read-your-writes guarantee. Two sequential
//! calls may observe different contents under concurrent writers, which is
//! acceptable for this service.

use crate::app::models::FarmRecord;
use crate::app::services::country::CountryNormalizer;
use crate::app::services::store::FarmStore;
use crate::Result;

/// Read-only query service over the farm store
#[derive(Debug)]
pub struct QueryService {
    normalizer: CountryNormalizer,
}

impl Default for QueryService {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryService {
    pub fn new() -> Self {
        Self {
            normalizer: CountryNormalizer::new(),
        }
    }

    /// List farms, optionally narrowed by a free-text country filter
    ///
    /// An absent, empty, or whitespace-only filter returns every record in
    /// the store's natural return order. Otherwise a record is kept when the
    /// filter is a substring (case-insensitive, trimmed) of its raw country
    /// name or of the canonical form, so either spelling finds it.
    pub fn list(&self, store: &FarmStore, filter: Option<&str>) -> Result<Vec<FarmRecord>> {
        let snapshot = store.list_all()?;
        Ok(self.apply_filter(snapshot, filter))
    }

    /// Filter an already-fetched snapshot
    pub fn apply_filter(
        &self,
        farms: Vec<FarmRecord>,
        filter: Option<&str>,
    ) -> Vec<FarmRecord> {
        let needle = match filter {
            Some(text) if !text.trim().is_empty() => text,
            _ => return farms,
        };

        farms
            .into_iter()
            .filter(|farm| self.normalizer.matches_filter(&farm.country, needle))
            .collect()
    }
}
