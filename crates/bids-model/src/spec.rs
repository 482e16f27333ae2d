//! The BIDS naming specification produced for each series.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::metadata::MetadataValue;

/// Keys of a specification record. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecKey {
    Description,
    Comment,
    Subject,
    Session,
    Task,
    Run,
    Modality,
    Converter,
    Id,
    /// Internal to the rules; not one of the public keywords.
    DataType,
}

impl SpecKey {
    /// Specification keywords of the `dicomseries` type.
    pub const KEYWORDS: [SpecKey; 9] = [
        SpecKey::Description,
        SpecKey::Comment,
        SpecKey::Subject,
        SpecKey::Session,
        SpecKey::Task,
        SpecKey::Run,
        SpecKey::Modality,
        SpecKey::Converter,
        SpecKey::Id,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::Comment => "comment",
            Self::Subject => "subject",
            Self::Session => "session",
            Self::Task => "task",
            Self::Run => "run",
            Self::Modality => "modality",
            Self::Converter => "converter",
            Self::Id => "id",
            Self::DataType => "data_type",
        }
    }

    pub fn is_keyword(self) -> bool {
        self != Self::DataType
    }
}

impl fmt::Display for SpecKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value in a specification record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    Integer(i64),
    Text(String),
    Null,
}

impl SpecValue {
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

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<Option<String>> for SpecValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Null, Self::Text)
    }
}

impl From<&str> for SpecValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for SpecValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for SpecValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<MetadataValue> for SpecValue {
    fn from(value: MetadataValue) -> Self {
        match value {
            MetadataValue::Integer(value) => Self::Integer(value),
            MetadataValue::Text(value) => Self::Text(value),
            MetadataValue::Null => Self::Null,
        }
    }
}

/// Naming specification for one series.
///
/// A key may be absent, which is not the same as being present with
/// [`SpecValue::Null`]; rule sets only emit the keys they decide on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecificationRecord {
    values: BTreeMap<SpecKey, SpecValue>,
}

impl SpecificationRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: SpecKey) -> Option<&SpecValue> {
        self.values.get(&key)
    }

    pub fn text(&self, key: SpecKey) -> Option<&str> {
        self.get(key).and_then(SpecValue::as_text)
    }

    pub fn integer(&self, key: SpecKey) -> Option<i64> {
        self.get(key).and_then(SpecValue::as_integer)
    }

    pub fn set(&mut self, key: SpecKey, value: impl Into<SpecValue>) {
        self.values.insert(key, value.into());
    }

    #[must_use]
    pub fn with(mut self, key: SpecKey, value: impl Into<SpecValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn contains_key(&self, key: SpecKey) -> bool {
        self.values.contains_key(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SpecKey, &SpecValue)> {
        self.values.iter().map(|(key, value)| (*key, value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Replaces every value for which `other` has a key.
    ///
    /// Keys missing from `other` are left untouched; a null in `other`
    /// overwrites.
    pub fn overlay(&mut self, other: SpecificationRecord) {
        self.values.extend(other.values);
    }
}
