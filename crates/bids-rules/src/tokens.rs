//! Protocol name tokenization shared by the field inferrers.

use bids_model::{MetadataRecord, fields};

/// Splits a protocol name into lower-case tokens.
///
/// The name is split once on `-` and once on `_`, and both results are
/// concatenated. A segment containing neither separator therefore shows up
/// twice; callers only test membership, so this has no effect on them.
pub fn protocol_tokens(protocol: &str) -> Vec<String> {
    let lowered = protocol.to_lowercase();
    lowered
        .split('-')
        .chain(lowered.split('_'))
        .map(str::to_string)
        .collect()
}

/// Tokens of the record's `ProtocolName`, or `None` when it is absent.
pub fn record_protocol_tokens(record: &MetadataRecord) -> Option<Vec<String>> {
    record
        .text(fields::PROTOCOL_NAME)
        .map(|protocol| protocol_tokens(&protocol))
}

/// Returns the first of `terms` present in `tokens`, in the order of `terms`.
pub fn first_present<'t>(tokens: &[String], terms: &[&'t str]) -> Option<&'t str> {
    terms
        .iter()
        .copied()
        .find(|term| tokens.iter().any(|token| token == term))
}
