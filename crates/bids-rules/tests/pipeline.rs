use bids_model::{
    BidsError, MetadataBatch, MetadataRecord, ProcessingOptions, Result, SeriesFilter, SpecKey,
    SpecificationRecord, fields,
};
use bids_rules::{DEFAULT_RULES, RuleSet, RuleSetConstructor, apply_rule_sets, specify_batch};

fn philips_session() -> MetadataBatch {
    [
        MetadataRecord::new()
            .with(fields::SERIES_NUMBER, 0)
            .with(fields::PROTOCOL_NAME, "DEFAULT PRESENTATION STATE")
            .with(fields::SERIES_DESCRIPTION, "DEFAULT PRESENTATION STATE"),
        MetadataRecord::new()
            .with(fields::SERIES_NUMBER, 0)
            .with(fields::PROTOCOL_NAME, "ExamCard")
            .with(fields::SERIES_DESCRIPTION, "ExamCard"),
        MetadataRecord::new()
            .with(fields::SERIES_NUMBER, 1401)
            .with(fields::PROTOCOL_NAME, "func_task_objectcategories")
            .with(fields::SERIES_DESCRIPTION, "fMRI objects"),
        MetadataRecord::new()
            .with(fields::SERIES_NUMBER, 1501)
            .with(fields::PROTOCOL_NAME, "func_task_objectcategories")
            .with(fields::SERIES_DESCRIPTION, "fMRI objects"),
    ]
    .into_iter()
    .collect()
}

/// Only decides the task, to exercise overriding.
struct FixedTask<'a> {
    batch: &'a MetadataBatch,
}

impl RuleSet for FixedTask<'_> {
    fn name(&self) -> &'static str {
        "fixed-task"
    }

    fn apply(&mut self) -> Result<Vec<SpecificationRecord>> {
        Ok(self
            .batch
            .iter()
            .map(|_| SpecificationRecord::new().with(SpecKey::Task, "localizer"))
            .collect())
    }
}

fn build_fixed_task(batch: &MetadataBatch) -> Box<dyn RuleSet + '_> {
    Box::new(FixedTask { batch })
}

/// Drops the last series, which the merge must reject.
struct Truncating<'a> {
    batch: &'a MetadataBatch,
}

impl RuleSet for Truncating<'_> {
    fn name(&self) -> &'static str {
        "truncating"
    }

    fn apply(&mut self) -> Result<Vec<SpecificationRecord>> {
        Ok(vec![SpecificationRecord::new(); self.batch.len().saturating_sub(1)])
    }
}

fn build_truncating(batch: &MetadataBatch) -> Box<dyn RuleSet + '_> {
    Box::new(Truncating { batch })
}

#[test]
fn default_options_keep_every_series() {
    let batch = philips_session();
    let specs = specify_batch(&batch, &ProcessingOptions::default()).unwrap();
    assert_eq!(specs.len(), 4);
    assert_eq!(specs[1].text(SpecKey::Session), Some("ExamCard"));
}

#[test]
fn drop_invalid_filters_before_rules() {
    let batch = philips_session();
    let options = ProcessingOptions::new().with_series_filter(SeriesFilter::DropInvalid);
    let specs = specify_batch(&batch, &options).unwrap();

    let ids: Vec<_> = specs.iter().map(|spec| spec.integer(SpecKey::Id)).collect();
    assert_eq!(ids, vec![Some(1401), Some(1501)]);
    let runs: Vec<_> = specs.iter().map(|spec| spec.integer(SpecKey::Run)).collect();
    assert_eq!(runs, vec![Some(1), Some(2)]);
    assert!(specs.iter().all(|spec| spec.text(SpecKey::Task) == Some("objectcategories")));
}

#[test]
fn later_rule_sets_override_earlier_fields() {
    let batch = philips_session();
    let rule_sets = [
        DEFAULT_RULES,
        RuleSetConstructor::new("fixed-task", build_fixed_task),
    ];
    let specs = apply_rule_sets(&batch, &rule_sets).unwrap();

    assert_eq!(specs.len(), batch.len());
    assert!(specs.iter().all(|spec| spec.text(SpecKey::Task) == Some("localizer")));
    assert_eq!(specs[2].text(SpecKey::DataType), Some("func"));
    assert_eq!(specs[3].integer(SpecKey::Run), Some(2));
}

#[test]
fn empty_selection_is_an_error() {
    let err = apply_rule_sets(&philips_session(), &[]).unwrap_err();
    assert_eq!(err, BidsError::EmptySelection);
}

#[test]
fn short_output_is_rejected() {
    let rule_sets = [RuleSetConstructor::new("truncating", build_truncating)];
    let err = apply_rule_sets(&philips_session(), &rule_sets).unwrap_err();
    assert_eq!(
        err,
        BidsError::LengthMismatch {
            rule_set: "truncating",
            expected: 4,
            actual: 3
        }
    );
}

#[test]
fn missing_description_aborts_the_batch() {
    let batch: MetadataBatch = [
        MetadataRecord::new()
            .with(fields::PROTOCOL_NAME, "anat_t1w")
            .with(fields::SERIES_DESCRIPTION, "T1w"),
        MetadataRecord::new().with(fields::PROTOCOL_NAME, "anat_t2w"),
    ]
    .into_iter()
    .collect();
    let err = specify_batch(&batch, &ProcessingOptions::default()).unwrap_err();
    assert!(matches!(err, BidsError::MissingField { index: 1, .. }));
}

#[test]
fn empty_batch_yields_no_specifications() {
    let specs = specify_batch(&MetadataBatch::default(), &ProcessingOptions::default()).unwrap();
    assert!(specs.is_empty());
}
