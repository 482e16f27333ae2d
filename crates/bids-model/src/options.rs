//! Configuration options for specification generation.

use serde::{Deserialize, Serialize};

/// What to do with series the validity filter rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SeriesFilter {
    /// Generate a specification for every series.
    #[default]
    Keep,
    /// Drop invalid series (presentation states, exam cards) before the rules run.
    DropInvalid,
}

/// Options controlling how a batch is turned into specifications.
///
/// The heuristics themselves (site fingerprints, search terms, exclusion
/// set) are compiled in and are not configured here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessingOptions {
    /// Whether the validity filter runs before specification generation.
    pub series_filter: SeriesFilter,
}

impl ProcessingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series_filter(mut self, filter: SeriesFilter) -> Self {
        self.series_filter = filter;
        self
    }
}
