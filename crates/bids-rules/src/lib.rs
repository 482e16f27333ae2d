//! Rules deriving BIDS naming specifications from DICOM series metadata.
//!
//! # Architecture
//!
//! - [`selector`] picks the rule sets for a batch.
//! - [`rule_set`] applies one rule set to every series of the batch,
//!   numbering runs per protocol.
//! - [`infer`] and [`sites`] hold the field heuristics; [`sanitize`](mod@sanitize) makes
//!   their output safe for BIDS labels.
//! - [`validity`] decides which series are worth converting at all.
//! - [`pipeline`] ties the above together for callers that just want the
//!   specifications.
//!
//! # Usage
//!
//! ```ignore
//! use bids_model::{MetadataBatch, ProcessingOptions};
//! use bids_rules::specify_batch;
//!
//! let batch: MetadataBatch = serde_json::from_str(&extracted)?;
//! let specs = specify_batch(&batch, &ProcessingOptions::default())?;
//! ```

#![deny(unsafe_code)]

pub mod infer;
pub mod logging;
pub mod pipeline;
pub mod rule_set;
pub mod runs;
pub mod sanitize;
pub mod selector;
pub mod sites;
pub mod tokens;
pub mod validity;

pub use infer::{guess_modality, guess_subject, guess_task, guess_type};
pub use pipeline::{apply_rule_sets, specify_batch};
pub use rule_set::{DefaultRules, RuleSet};
pub use runs::RunCounter;
pub use sanitize::{sanitize, sanitize_label};
pub use selector::{DEFAULT_RULES, RuleSetConstructor, select_rule_sets};
pub use sites::{KNOWN_SITES, Site, SiteFingerprint, SubjectSource, match_site};
pub use validity::{filter_valid, is_valid};
