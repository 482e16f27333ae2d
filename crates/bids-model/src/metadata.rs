//! DICOM series metadata as delivered by the metadata extractor.
//!
//! Records are deliberately schemaless: which keys exist varies by scanner
//! and site, so every lookup is optional. A missing key and an explicit
//! `null` are indistinguishable through [`MetadataRecord::get`].

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BidsError, Result};

/// Well-known DICOM field names consulted by the rules.
pub mod fields {
    pub const SERIES_NUMBER: &str = "SeriesNumber";
    pub const PROTOCOL_NAME: &str = "ProtocolName";
    pub const SERIES_DESCRIPTION: &str = "SeriesDescription";
    pub const PATIENT_ID: &str = "PatientID";
    pub const PATIENT_NAME: &str = "PatientName";
    pub const STATION_NAME: &str = "StationName";
    pub const INSTITUTION_NAME: &str = "InstitutionName";
    pub const MANUFACTURER: &str = "Manufacturer";
    pub const MANUFACTURER_MODEL_NAME: &str = "ManufacturerModelName";
}

/// A scalar metadata value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Integer(i64),
    Text(String),
    Null,
}

impl MetadataValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
            Self::Null => Ok(()),
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for MetadataValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl<T: Into<MetadataValue>> From<Option<T>> for MetadataValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Descriptive metadata of one image series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataRecord {
    fields: BTreeMap<String, MetadataValue>,
}

impl MetadataRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for tests and adapters.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Returns the value for `key`, treating an explicit null like a missing key.
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.fields.get(key).filter(|value| !value.is_null())
    }

    /// Returns the value as text. Integers are rendered in decimal.
    pub fn text(&self, key: &str) -> Option<Cow<'_, str>> {
        match self.get(key)? {
            MetadataValue::Text(value) => Some(Cow::Borrowed(value.as_str())),
            MetadataValue::Integer(value) => Some(Cow::Owned(value.to_string())),
            MetadataValue::Null => None,
        }
    }

    pub fn integer(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(MetadataValue::as_integer)
    }

    /// Raw key presence; a key holding null counts as present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Strict lookup for fields the rules cannot do without.
    ///
    /// Only an absent key is an error. A key explicitly set to null yields
    /// [`MetadataValue::Null`].
    ///
    /// # Errors
    ///
    /// Returns [`BidsError::MissingField`] carrying `index` (the position of
    /// the record in its batch) when `key` is absent.
    pub fn require(&self, key: &'static str, index: usize) -> Result<&MetadataValue> {
        self.fields
            .get(key)
            .ok_or(BidsError::MissingField { field: key, index })
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<MetadataValue>> FromIterator<(K, V)> for MetadataRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// All series of one scanning session, in acquisition order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataBatch {
    records: Vec<MetadataRecord>,
}

impl MetadataBatch {
    pub fn new(records: Vec<MetadataRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[MetadataRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MetadataRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<MetadataRecord> for MetadataBatch {
    fn from_iter<I: IntoIterator<Item = MetadataRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MetadataBatch {
    type Item = &'a MetadataRecord;
    type IntoIter = std::slice::Iter<'a, MetadataRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
