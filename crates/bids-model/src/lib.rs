pub mod error;
pub mod metadata;
pub mod options;
pub mod spec;

pub use error::{BidsError, Result};
pub use metadata::{MetadataBatch, MetadataRecord, MetadataValue, fields};
pub use options::{ProcessingOptions, SeriesFilter};
pub use spec::{SpecKey, SpecValue, SpecificationRecord};
