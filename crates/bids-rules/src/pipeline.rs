//! Batch-level entry point.
//!
//! Runs the selected rule sets over a batch and merges their output. This
//! is a convenience for callers that do not need to drive the rule sets
//! themselves.

use bids_model::{
    BidsError, MetadataBatch, ProcessingOptions, Result, SeriesFilter, SpecificationRecord,
};

use crate::selector::{RuleSetConstructor, select_rule_sets};
use crate::validity::filter_valid;

/// Specifies every series of `batch` with the rule sets selected for it.
///
/// With [`SeriesFilter::DropInvalid`] the validity filter runs first and the
/// output covers only the remaining series.
///
/// # Errors
///
/// Returns the first error raised by a rule set.
pub fn specify_batch(
    batch: &MetadataBatch,
    options: &ProcessingOptions,
) -> Result<Vec<SpecificationRecord>> {
    match options.series_filter {
        SeriesFilter::Keep => apply_rule_sets(batch, &select_rule_sets(batch)),
        SeriesFilter::DropInvalid => {
            let valid = filter_valid(batch);
            apply_rule_sets(&valid, &select_rule_sets(&valid))
        }
    }
}

/// Applies `rule_sets` in order, each with fresh state.
///
/// Fields produced by a later rule set replace the same fields from earlier
/// ones; fields it does not produce are kept.
///
/// # Errors
///
/// Fails with [`BidsError::EmptySelection`] when `rule_sets` is empty and
/// with [`BidsError::LengthMismatch`] when a rule set does not return one
/// specification per series.
pub fn apply_rule_sets(
    batch: &MetadataBatch,
    rule_sets: &[RuleSetConstructor],
) -> Result<Vec<SpecificationRecord>> {
    let mut merged: Option<Vec<SpecificationRecord>> = None;

    for constructor in rule_sets {
        let mut rule_set = constructor.build(batch);
        let specs = rule_set.apply()?;
        if specs.len() != batch.len() {
            return Err(BidsError::LengthMismatch {
                rule_set: constructor.name(),
                expected: batch.len(),
                actual: specs.len(),
            });
        }

        merged = Some(match merged {
            None => specs,
            Some(mut current) => {
                for (base, overlay) in current.iter_mut().zip(specs) {
                    base.overlay(overlay);
                }
                current
            }
        });
    }

    merged.ok_or(BidsError::EmptySelection)
}
