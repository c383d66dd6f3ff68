//! Bilingual country name normalization
//!
//! The source dataset and interactive users mix Albanian and English country
//! spellings. This module maps the closed set of Albanian spellings to their
//! canonical English equivalents so that filtering and display agree on one
//! join key. Unknown names pass through unchanged: this is best-effort
//! normalization, not validation.

use crate::constants::COUNTRY_SYNONYMS;
use std::collections::HashMap;

/// Fixed mapping between localized and canonical country names
///
/// Built once from the synonym table in [`crate::constants`] and indexed for
/// O(1) lookups. Stateless and cheap to clone.
#[derive(Debug, Clone)]
pub struct CountryNormalizer {
    canonical: HashMap<&'static str, &'static str>,
}

impl Default for CountryNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryNormalizer {
    /// Build the normalizer from the fixed synonym table
    pub fn new() -> Self {
        Self {
            canonical: COUNTRY_SYNONYMS.iter().copied().collect(),
        }
    }

    /// Canonical English spelling for a country name
    ///
    /// Returns the mapped English name for a known localized spelling, or the
    /// input unchanged when it is not in the table (already canonical, or
    /// unrecognized). Never errors.
    pub fn to_canonical<'a>(&self, name: &'a str) -> &'a str {
        self.canonical.get(name).copied().unwrap_or(name)
    }

    /// Whether a record's country matches a free-text filter
    ///
    /// The filter matches when it is a case-insensitive, whitespace-trimmed
    /// substring of either the raw country name or its canonical form, so a
    /// search in either language finds the same records. An empty country
    /// never matches a non-empty filter.
    pub fn matches_filter(&self, country: &str, filter: &str) -> bool {
        if country.is_empty() {
            return false;
        }

        let needle = filter.to_lowercase().trim().to_string();
        let raw = country.to_lowercase().trim().to_string();
        let canonical = self.to_canonical(country).to_lowercase().trim().to_string();

        raw.contains(&needle) || canonical.contains(&needle)
    }
}
