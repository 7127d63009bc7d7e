//! Resource bundles for message key lookup

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Result type alias for bundle lookups
pub type BundleResult<T> = Result<T, BundleError>;

/// Errors raised by resource bundle lookups and loading
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BundleError {
    /// No entry exists for the key
    #[error("can't find resource for key {key}")]
    MissingResource { key: String },

    /// An entry exists but holds a non-string value
    #[error("resource for key {key} is not a string")]
    NotAString { key: String },

    /// Bundle data could not be parsed
    #[error("invalid bundle data: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for BundleError {
    fn from(err: serde_json::Error) -> Self {
        BundleError::Parse(err.to_string())
    }
}

/// Key to localized message lookup table
pub trait ResourceBundle: Send + Sync {
    /// Look up the raw entry for a key
    fn get_object(&self, key: &str) -> BundleResult<&Value>;

    /// Look up a string entry for a key
    fn get_string(&self, key: &str) -> BundleResult<&str> {
        match self.get_object(key)? {
            Value::String(s) => Ok(s.as_str()),
            _ => Err(BundleError::NotAString {
                key: key.to_string(),
            }),
        }
    }

    /// Whether an entry exists for the key
    fn contains_key(&self, key: &str) -> bool {
        self.get_object(key).is_ok()
    }
}

/// In-memory resource bundle backed by a map of JSON values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapBundle {
    entries: HashMap<String, Value>,
}

impl MapBundle {
    /// Create an empty bundle
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bundle from a JSON object of key to value
    ///
    /// Empty input yields an empty bundle.
    pub fn from_json(bytes: &[u8]) -> BundleResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace an entry, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ResourceBundle for MapBundle {
    fn get_object(&self, key: &str) -> BundleResult<&Value> {
        self.entries
            .get(key)
            .ok_or_else(|| BundleError::MissingResource {
                key: key.to_string(),
            })
    }
}

impl From<HashMap<String, Value>> for MapBundle {
    fn from(entries: HashMap<String, Value>) -> Self {
        Self { entries }
    }
}

impl<K, V> FromIterator<(K, V)> for MapBundle
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
