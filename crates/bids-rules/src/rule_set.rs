//! Rule sets turning a metadata batch into naming specifications.
//!
//! A rule set is built for exactly one batch and owns the run numbering
//! state for it. It must not be reused for another batch; processing
//! several sessions concurrently means one instance per session.

use bids_model::{
    MetadataBatch, MetadataRecord, Result, SpecKey, SpecValue, SpecificationRecord, fields,
};

use crate::infer::{guess_modality, guess_subject, guess_task, guess_type};
use crate::logging::redact_value;
use crate::runs::RunCounter;
use crate::sanitize::sanitize;

/// Trait for rule sets deriving specifications from a batch.
///
/// Implementors are constructed from the batch they operate on (see
/// [`crate::selector::RuleSetConstructor`]) and produce exactly one
/// specification per series, in batch order.
pub trait RuleSet: Send {
    /// Short identifier used in logs and errors.
    fn name(&self) -> &'static str;

    /// Process the batch.
    ///
    /// # Errors
    ///
    /// Fails as a whole when any series cannot be specified; no partial
    /// result is returned.
    fn apply(&mut self) -> Result<Vec<SpecificationRecord>>;
}

/// The rule set used for every scanner today.
///
/// Repeated calls to [`RuleSet::apply`] keep counting runs where the
/// previous call stopped, so a second pass over the same batch yields
/// higher run numbers.
#[derive(Debug)]
pub struct DefaultRules<'a> {
    batch: &'a MetadataBatch,
    runs: RunCounter,
}

impl<'a> DefaultRules<'a> {
    pub const NAME: &'static str = "default";

    pub fn new(batch: &'a MetadataBatch) -> Self {
        Self {
            batch,
            runs: RunCounter::new(),
        }
    }

    pub fn runs(&self) -> &RunCounter {
        &self.runs
    }

    fn rules(&mut self, index: usize, record: &MetadataRecord) -> Result<SpecificationRecord> {
        let protocol = record.text(fields::PROTOCOL_NAME);
        let run = self.runs.next_run(protocol.as_deref());

        // SeriesDescription is the one field we refuse to guess.
        let description = record.require(fields::SERIES_DESCRIPTION, index)?.clone();
        let subject = sanitize(guess_subject(record));
        let id = record
            .get(fields::SERIES_NUMBER)
            .cloned()
            .map_or(SpecValue::Null, SpecValue::from);

        tracing::trace!(
            index,
            protocol = protocol.as_deref().unwrap_or_default(),
            run,
            subject = redact_value(subject.as_deref().unwrap_or_default()),
            "Series specified"
        );

        // No converter is chosen here.
        Ok(SpecificationRecord::new()
            .with(SpecKey::Description, SpecValue::from(description))
            .with(SpecKey::Comment, "")
            .with(SpecKey::Subject, subject)
            .with(SpecKey::Session, sanitize(protocol.as_deref()))
            .with(SpecKey::Task, sanitize(guess_task(record)))
            .with(SpecKey::Run, run)
            .with(SpecKey::Modality, sanitize(guess_modality(record)))
            .with(SpecKey::DataType, sanitize(Some(guess_type(record))))
            .with(SpecKey::Id, id))
    }
}

impl RuleSet for DefaultRules<'_> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn apply(&mut self) -> Result<Vec<SpecificationRecord>> {
        let span = tracing::debug_span!("rule_set", name = Self::NAME, series = self.batch.len());
        let _guard = span.enter();

        let batch = self.batch;
        let specs = batch
            .iter()
            .enumerate()
            .map(|(index, record)| self.rules(index, record))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            specified = specs.len(),
            protocols = self.runs.len(),
            "Batch specified"
        );
        Ok(specs)
    }
}
