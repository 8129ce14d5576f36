//! Construction props for the MultiCheck control.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use multicheck_core::logging::targets;

use super::error::{PropsError, Result};
use crate::model::CheckOption;

fn default_columns() -> usize {
    1
}

/// Everything a host supplies when creating a control.
///
/// Missing fields take their defaults: no label, no checked values, one
/// column. `options` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiCheckProps {
    /// Label shown above the checkboxes; empty for none.
    #[serde(default)]
    pub label: String,
    /// The options, in display order.
    pub options: Vec<CheckOption>,
    /// Values checked initially.
    #[serde(default)]
    pub values: Vec<String>,
    /// Requested number of option columns.
    #[serde(default = "default_columns")]
    pub columns: usize,
}

impl Default for MultiCheckProps {
    fn default() -> Self {
        Self {
            label: String::new(),
            options: Vec::new(),
            values: Vec::new(),
            columns: default_columns(),
        }
    }
}

impl MultiCheckProps {
    /// Create props for `options` with every other field defaulted.
    pub fn new(options: impl IntoIterator<Item = CheckOption>) -> Self {
        Self {
            options: options.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Parse props from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Self::parse_json(s, "<string>")
    }

    /// Parse props from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Self::parse_toml(s, "<string>")
    }

    /// Load props from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = read_text(path)?;
        Self::parse_json(&content, &path.display().to_string())
    }

    /// Load props from a TOML file.
    pub fn load_toml(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = read_text(path)?;
        Self::parse_toml(&content, &path.display().to_string())
    }

    fn parse_json(s: &str, origin: &str) -> Result<Self> {
        let props: Self = serde_json::from_str(s).map_err(|e| PropsError::json(origin, e))?;
        props.check(origin);
        Ok(props)
    }

    fn parse_toml(s: &str, origin: &str) -> Result<Self> {
        let props: Self = toml::from_str(s).map_err(|e| PropsError::toml(origin, e))?;
        props.check(origin);
        Ok(props)
    }

    /// Warn about props the control accepts but that are probably mistakes.
    fn check(&self, origin: &str) {
        let mut seen = HashSet::new();
        for option in &self.options {
            if !seen.insert(option.value.as_str()) {
                tracing::warn!(
                    target: targets::PROPS,
                    origin,
                    value = %option.value,
                    "duplicate option value"
                );
            }
        }
        for value in &self.values {
            if !seen.contains(value.as_str()) {
                tracing::warn!(
                    target: targets::PROPS,
                    origin,
                    value = %value,
                    "checked value matches no option"
                );
            }
        }
        if self.columns == 0 {
            tracing::warn!(target: targets::PROPS, origin, "columns is 0, using 1");
        }
        tracing::debug!(
            target: targets::PROPS,
            origin,
            options = self.options.len(),
            values = self.values.len(),
            columns = self.columns,
            "loaded props"
        );
    }
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| PropsError::io(path, e))
}
