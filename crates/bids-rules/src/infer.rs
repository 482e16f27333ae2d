//! Field inference heuristics.
//!
//! Each function derives one BIDS field from a single series record. None
//! of them fail: missing metadata yields `None` or a documented fallback.
//! Results are not sanitized here.

use bids_model::{MetadataRecord, fields};

use crate::sites::{FALLBACK_SUBJECT, match_site};
use crate::tokens::{first_present, record_protocol_tokens};

/// Modality search terms, in priority order.
pub const MODALITY_TERMS: &[&str] = &["t1", "t1w", "t2", "t2w"];

/// Data type search terms, in priority order.
pub const DATA_TYPE_TERMS: &[&str] = &["func", "anat", "fmap", "dwi"];

/// Data type assumed when the protocol name gives no hint.
pub const DEFAULT_DATA_TYPE: &str = "func";

const TASK_MARKER: &str = "task";

/// Subject identifier, extracted according to the acquisition site.
pub fn guess_subject(record: &MetadataRecord) -> Option<String> {
    match match_site(record) {
        Some(site) => site.subject.extract(record),
        None => FALLBACK_SUBJECT.extract(record),
    }
}

/// The token following `task` in the protocol name, or the whole protocol
/// name when there is none.
pub fn guess_task(record: &MetadataRecord) -> Option<String> {
    let protocol = record.text(fields::PROTOCOL_NAME)?;
    let tokens = record_protocol_tokens(record)?;
    let task = tokens
        .iter()
        .position(|token| token == TASK_MARKER)
        .and_then(|idx| tokens.get(idx + 1));
    Some(task.cloned().unwrap_or_else(|| protocol.into_owned()))
}

pub fn guess_modality(record: &MetadataRecord) -> Option<String> {
    let tokens = record_protocol_tokens(record)?;
    first_present(&tokens, MODALITY_TERMS).map(str::to_string)
}

/// BIDS data type (`func`, `anat`, `fmap`, `dwi`); defaults to `func`.
pub fn guess_type(record: &MetadataRecord) -> String {
    record_protocol_tokens(record)
        .and_then(|tokens| first_present(&tokens, DATA_TYPE_TERMS))
        .unwrap_or(DEFAULT_DATA_TYPE)
        .to_string()
}
