//! Series validity filter.
//!
//! Some series in a session are not image data (Philips presentation states
//! and exam cards, all numbered 0) and should be left out of conversion.
//! The rule sets do not apply this filter themselves.

use bids_model::{MetadataBatch, MetadataRecord, MetadataValue, fields};

/// Protocol names of non-image series carried under series number 0.
pub const EXCLUDED_PROTOCOLS: &[&str] = &["DEFAULT PRESENTATION STATE", "ExamCard"];

/// Returns `false` for series that should be ignored during conversion.
pub fn is_valid(record: &MetadataRecord) -> bool {
    let administrative = record.integer(fields::SERIES_NUMBER) == Some(0)
        && record
            .get(fields::PROTOCOL_NAME)
            .and_then(MetadataValue::as_text)
            .is_some_and(|protocol| EXCLUDED_PROTOCOLS.contains(&protocol));
    !administrative
}

/// The valid records of `batch`, in their original order.
pub fn filter_valid(batch: &MetadataBatch) -> MetadataBatch {
    let filtered: MetadataBatch = batch
        .iter()
        .filter(|record| is_valid(record))
        .cloned()
        .collect();
    let dropped = batch.len() - filtered.len();
    if dropped > 0 {
        tracing::debug!(dropped, kept = filtered.len(), "Dropped non-image series");
    }
    filtered
}
