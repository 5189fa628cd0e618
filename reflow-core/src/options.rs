//! Per-document formatting options and the YAML config they are loaded from.
//!
//! # Config layout
//!
//! ```text
//! version: 1
//! defaults:
//!   indent_size: 4
//! overrides:
//!   - extension: rs
//!     options:
//!       indent_size: 2
//! ```
//!
//! Options are opaque to the orchestrator; only the formatting engine reads them.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::solution::Solution;
use crate::types::Document;

// ---------------------------------------------------------------------------
// 1. Option values
// ---------------------------------------------------------------------------

/// A single option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for OptionValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// Immutable option bag. Clones share storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormattingOptions(Arc<BTreeMap<String, OptionValue>>);

impl FormattingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new bag with `key` set to `value`.
    pub fn with(&self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        let mut map = (*self.0).clone();
        map.insert(key.into(), value.into());
        Self(Arc::new(map))
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.0.get(key)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.0.get(key)? {
            OptionValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.0.get(key)? {
            OptionValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn get_text(&self, key: &str) -> Option<&str> {
        match self.0.get(key)? {
            OptionValue::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `self` overlaid with every entry of `other`; `other` wins on conflicts.
    pub fn merged(&self, other: &FormattingOptions) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        let mut map = (*self.0).clone();
        map.extend(other.0.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self(Arc::new(map))
    }
}

// ---------------------------------------------------------------------------
// 2. Config file
// ---------------------------------------------------------------------------

/// Options applied to documents with a matching file extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionOverride {
    /// Extension without the leading dot; matched case-insensitively.
    pub extension: String,
    #[serde(default)]
    pub options: FormattingOptions,
}

impl OptionOverride {
    fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case(self.extension.trim_start_matches('.')))
            .unwrap_or(false)
    }
}

/// Root of the YAML formatting config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    pub version: u32,
    #[serde(default)]
    pub defaults: FormattingOptions,
    #[serde(default)]
    pub overrides: Vec<OptionOverride>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            version: 1,
            defaults: FormattingOptions::default(),
            overrides: Vec::new(),
        }
    }
}

impl FormatConfig {
    /// Load a config file.
    ///
    /// Returns `CoreError::ConfigNotFound` if absent,
    /// `CoreError::Parse` (with path + line context) if malformed YAML.
    pub fn load_at(path: &Path) -> Result<Self, CoreError> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&contents).map_err(|e| CoreError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Parse config text that did not come from a file.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CoreError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Defaults merged with every matching override, later overrides winning.
    pub fn options_for(&self, path: &Path) -> FormattingOptions {
        self.overrides
            .iter()
            .filter(|o| o.matches(path))
            .fold(self.defaults.clone(), |acc, o| acc.merged(&o.options))
    }

    /// Every document of `solution` paired with its options, in id order.
    pub fn formattable(&self, solution: &Solution) -> Vec<(Document, FormattingOptions)> {
        solution
            .documents()
            .map(|doc| (doc.clone(), self.options_for(doc.path())))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
