//! Build-step parameter mapping
//!
//! The host hands over a flat `name -> value` mapping for every call. Keys
//! come from a fixed vocabulary (see [`keys`]); anything else is carried
//! along untouched and ignored by resolution and description.

pub mod keys;
mod values;

pub use values::{escape_version, is_flag_set, non_blank};

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Flat string-to-string mapping of build-step parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterMapping {
    values: BTreeMap<String, String>,
}

impl ParameterMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method for a single parameter
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Raw value for `key`, `None` when the parameter is not configured
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Value for `key` if it is present and not blank
    pub fn non_blank(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(non_blank)
    }

    /// Boolean reading of `key`; absent or malformed values are `false`
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(is_flag_set)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlay `other` on top of this mapping; keys in `other` win
    pub fn merge(&mut self, other: &ParameterMapping) {
        for (key, value) in other.iter() {
            self.insert(key, value);
        }
    }

    /// Fill keys absent from this mapping with the values in `defaults`
    pub fn apply_defaults(&mut self, defaults: &ParameterMapping) {
        for (key, value) in defaults.iter() {
            if !self.contains_key(key) {
                debug!("Applying default {}={}", key, value);
                self.insert(key, value);
            }
        }
    }

    /// Parse a flat JSON object of string values
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a flat JSON object of string values from disk
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading parameters from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Parse a single `KEY=VALUE` assignment
    ///
    /// Splits at the first `=`, so values may themselves contain `=`.
    /// The value may be empty; the key may not.
    pub fn parse_assignment(assignment: &str) -> Result<(String, String)> {
        match assignment.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok((key.trim().to_string(), value.to_string()))
            }
            _ => Err(Error::InvalidParameter(assignment.to_string())),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}
