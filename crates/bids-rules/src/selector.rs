//! Rule set selection.
//!
//! Given a whole batch, decide which rule sets apply. The list is ordered:
//! rule sets later in the list override the fields produced by earlier
//! ones. Selection does not discriminate by scanner yet, so every batch
//! gets the default rules.

use std::fmt;

use bids_model::MetadataBatch;

use crate::rule_set::{DefaultRules, RuleSet};

/// Builds a rule set bound to one batch.
pub type BuildRuleSet = for<'a> fn(&'a MetadataBatch) -> Box<dyn RuleSet + 'a>;

/// A named rule set factory, as returned by [`select_rule_sets`].
#[derive(Clone, Copy)]
pub struct RuleSetConstructor {
    name: &'static str,
    build: BuildRuleSet,
}

impl RuleSetConstructor {
    pub const fn new(name: &'static str, build: BuildRuleSet) -> Self {
        Self { name, build }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Constructs a fresh rule set (with fresh run numbering) for `batch`.
    pub fn build<'a>(&self, batch: &'a MetadataBatch) -> Box<dyn RuleSet + 'a> {
        (self.build)(batch)
    }
}

impl fmt::Debug for RuleSetConstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSetConstructor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

fn build_default(batch: &MetadataBatch) -> Box<dyn RuleSet + '_> {
    Box::new(DefaultRules::new(batch))
}

pub const DEFAULT_RULES: RuleSetConstructor =
    RuleSetConstructor::new(DefaultRules::NAME, build_default);

/// Determines the rule sets to apply to `batch`, in application order.
///
/// Never empty, and never fails, even for an empty batch.
pub fn select_rule_sets(batch: &MetadataBatch) -> Vec<RuleSetConstructor> {
    let selected = vec![DEFAULT_RULES];
    tracing::debug!(
        series = batch.len(),
        rule_sets = ?selected.iter().map(RuleSetConstructor::name).collect::<Vec<_>>(),
        "Rule sets selected"
    );
    selected
}

#[cfg(test)]
mod tests {
    use bids_model::{MetadataRecord, fields};

    use super::*;

    #[test]
    fn empty_batch_gets_default_rules() {
        let selected = select_rule_sets(&MetadataBatch::default());
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name(), "default");
    }

    #[test]
    fn constructor_builds_named_rule_set() {
        let batch: MetadataBatch = [MetadataRecord::new().with(fields::SERIES_DESCRIPTION, "x")]
            .into_iter()
            .collect();
        let mut rules = DEFAULT_RULES.build(&batch);
        assert_eq!(rules.name(), DEFAULT_RULES.name());
        assert_eq!(rules.apply().unwrap().len(), 1);
    }

    #[test]
    fn debug_shows_name() {
        assert!(format!("{DEFAULT_RULES:?}").contains("default"));
    }
}
