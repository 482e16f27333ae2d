use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BidsError {
    /// A field the rules cannot do without is absent from a record.
    #[error("series {index}: required field '{field}' is missing")]
    MissingField { field: &'static str, index: usize },
    #[error("no rule set was selected for the batch")]
    EmptySelection,
    #[error("rule set '{rule_set}' produced {actual} specifications for {expected} series")]
    LengthMismatch {
        rule_set: &'static str,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, BidsError>;
