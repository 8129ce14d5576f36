//! Check options and the option catalog.
//!
//! A [`CheckOption`] is one label/value pair. A [`Catalog`] is the ordered,
//! read-only list of options supplied by the host for one render pass.
//! Uniqueness of values is assumed but not checked.

use std::ops::{Deref, Range};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::selection::Selection;

/// A selectable option: display text plus the identifier reported to the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckOption {
    /// Display text.
    pub label: String,
    /// Identifier, unique within a catalog.
    pub value: String,
}

impl CheckOption {
    /// Create a new option.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// The ordered options of one control.
///
/// Cloning a catalog is cheap; the options are shared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    options: Arc<[CheckOption]>,
}

impl Catalog {
    /// Create a catalog from options, keeping their order.
    pub fn new(options: impl IntoIterator<Item = CheckOption>) -> Self {
        Self {
            options: options.into_iter().collect(),
        }
    }

    /// The options as a slice.
    pub fn as_slice(&self) -> &[CheckOption] {
        &self.options
    }

    /// Every option value, in catalog order.
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.options.iter().map(|option| option.value.as_str())
    }

    /// Find the first option with the given label.
    pub fn find_by_label(&self, label: &str) -> Option<&CheckOption> {
        self.options.iter().find(|option| option.label == label)
    }

    /// Find the first option with the given value.
    pub fn find_by_value(&self, value: &str) -> Option<&CheckOption> {
        self.options.iter().find(|option| option.value == value)
    }

    /// The options in `range`, clamped to the catalog.
    pub fn slice(&self, range: Range<usize>) -> &[CheckOption] {
        let end = range.end.min(self.options.len());
        let start = range.start.min(end);
        &self.options[start..end]
    }

    /// Resolve a selection into full options.
    ///
    /// The result follows catalog order, not the order values were selected
    /// in. Selected values with no option in this catalog are skipped.
    pub fn materialize(&self, selection: &Selection) -> Vec<CheckOption> {
        self.options
            .iter()
            .filter(|option| selection.contains(&option.value))
            .cloned()
            .collect()
    }
}

impl Deref for Catalog {
    type Target = [CheckOption];

    fn deref(&self) -> &[CheckOption] {
        &self.options
    }
}

impl From<Vec<CheckOption>> for Catalog {
    fn from(options: Vec<CheckOption>) -> Self {
        Self {
            options: options.into(),
        }
    }
}

impl FromIterator<CheckOption> for Catalog {
    fn from_iter<I: IntoIterator<Item = CheckOption>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new([
            CheckOption::new("Option 1", "1"),
            CheckOption::new("Option 2", "2"),
            CheckOption::new("Option 3", "3"),
        ])
    }

    #[test]
    fn test_catalog_order_and_values() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.values().collect::<Vec<_>>(), vec!["1", "2", "3"]);
        assert_eq!(catalog[1].label, "Option 2");
    }

    #[test]
    fn test_materialize_follows_catalog_order() {
        let catalog = catalog();
        let selection = Selection::new(["3", "1"]);

        let options = catalog.materialize(&selection);
        assert_eq!(
            options,
            vec![CheckOption::new("Option 1", "1"), CheckOption::new("Option 3", "3")]
        );
    }

    #[test]
    fn test_materialize_skips_unknown_values() {
        let catalog = catalog();
        let selection = Selection::new(["gone", "2"]);

        assert_eq!(catalog.materialize(&selection), vec![CheckOption::new("Option 2", "2")]);
    }

    #[test]
    fn test_find_and_slice() {
        let catalog = catalog();
        assert_eq!(catalog.find_by_label("Option 3").map(|o| o.value.as_str()), Some("3"));
        assert_eq!(catalog.find_by_value("2").map(|o| o.label.as_str()), Some("Option 2"));
        assert!(catalog.find_by_label("Select All").is_none());

        assert_eq!(catalog.slice(1..10).len(), 2);
        assert!(catalog.slice(5..7).is_empty());
    }
}
