//! The selection engine.
//!
//! [`Selection`] is an immutable value holding the checked option values.
//! Every operation returns a new `Selection`; nothing mutates in place, so a
//! change can be detected by comparing the old and new values.
//!
//! # Example
//!
//! ```
//! use multicheck::model::{Catalog, CheckOption, Selection};
//!
//! let catalog = Catalog::new([
//!     CheckOption::new("Apple", "apple"),
//!     CheckOption::new("Pear", "pear"),
//! ]);
//!
//! let selection = Selection::new(["apple"]);
//! assert!(!selection.is_all_selected(&catalog));
//!
//! // A partial selection always resolves to "everything"
//! let all = selection.toggled_all(&catalog);
//! assert!(all.is_all_selected(&catalog));
//!
//! // ...and a full one to nothing
//! assert!(all.toggled_all(&catalog).is_empty());
//! ```

use multicheck_core::logging::targets;

use super::option::Catalog;

/// The set of checked option values.
///
/// Values keep the order in which they were selected, but equality ignores
/// that order. Values that are not in the current catalog are retained; they
/// simply never materialize into an option.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    values: Vec<String>,
}

impl Selection {
    /// Seed a selection with the host's initial values, taken verbatim.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// The empty selection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The selected values, in selection order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Number of selected values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` if `value` is selected.
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Toggle a single value: remove it if selected, otherwise append it.
    ///
    /// Applying the same toggle twice restores the original selection.
    pub fn toggled(&self, value: &str) -> Selection {
        let values = if self.contains(value) {
            self.values.iter().filter(|v| *v != value).cloned().collect()
        } else {
            let mut values = self.values.clone();
            values.push(value.to_string());
            values
        };
        tracing::debug!(
            target: targets::SELECTION,
            value,
            selected = values.len(),
            "toggled option"
        );
        Selection { values }
    }

    /// Toggle everything against `catalog`.
    ///
    /// When [`is_all_selected`](Self::is_all_selected) holds the result is
    /// empty; otherwise it is every catalog value in catalog order.
    pub fn toggled_all(&self, catalog: &Catalog) -> Selection {
        let all_selected = self.is_all_selected(catalog);
        let result = if all_selected {
            Selection::empty()
        } else {
            Selection::new(catalog.values())
        };
        tracing::debug!(
            target: targets::SELECTION,
            was_all_selected = all_selected,
            selected = result.len(),
            "toggled all options"
        );
        result
    }

    /// Whether the selection counts as "all selected" for `catalog`.
    ///
    /// This compares sizes only. A stale value outside the catalog counts
    /// towards the total, so the select-all box can read as checked while a
    /// catalog option is still unchecked.
    pub fn is_all_selected(&self, catalog: &Catalog) -> bool {
        self.values.len() == catalog.len()
    }
}

impl PartialEq for Selection {
    fn eq(&self, other: &Self) -> bool {
        if self.values.len() != other.values.len() {
            return false;
        }
        let mut ours: Vec<&str> = self.values.iter().map(String::as_str).collect();
        let mut theirs: Vec<&str> = other.values.iter().map(String::as_str).collect();
        ours.sort_unstable();
        theirs.sort_unstable();
        ours == theirs
    }
}

impl Eq for Selection {}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CheckOption;

    fn catalog() -> Catalog {
        (1..=4)
            .map(|i| CheckOption::new(format!("Option {i}"), i.to_string()))
            .collect()
    }

    #[test]
    fn test_new_keeps_values_verbatim() {
        let selection = Selection::new(["2", "missing"]);
        assert_eq!(selection.values(), ["2", "missing"]);
        assert!(selection.contains("missing"));
        assert!(!selection.contains("1"));
    }

    #[test]
    fn test_toggled_adds_then_removes() {
        let selection = Selection::empty().toggled("1");
        assert_eq!(selection.values(), ["1"]);

        let selection = selection.toggled("2");
        assert_eq!(selection.values(), ["1", "2"]);

        let selection = selection.toggled("1");
        assert_eq!(selection.values(), ["2"]);
    }

    #[test]
    fn test_toggled_is_self_inverse() {
        let cases = [
            Selection::empty(),
            Selection::new(["a"]),
            Selection::new(["a", "b", "c"]),
            Selection::new(["stale"]),
        ];

        for selection in cases {
            for value in ["a", "b", "z", "stale"] {
                let once = selection.toggled(value);
                assert_ne!(once, selection);
                assert_eq!(once.toggled(value), selection);
            }
        }
    }

    #[test]
    fn test_equality_ignores_order() {
        assert_eq!(Selection::new(["b", "a"]), Selection::new(["a", "b"]));
        assert_ne!(Selection::new(["a"]), Selection::new(["a", "b"]));
        assert_ne!(Selection::new(["a", "a"]), Selection::new(["a", "b"]));
    }

    #[test]
    fn test_toggled_does_not_touch_original() {
        let original = Selection::new(["1"]);
        let _ = original.toggled("1");
        assert_eq!(original.values(), ["1"]);
    }

    #[test]
    fn test_toggled_all_cycles_empty_full_empty() {
        let catalog = catalog();

        let full = Selection::empty().toggled_all(&catalog);
        assert_eq!(full.values(), ["1", "2", "3", "4"]);
        assert!(full.is_all_selected(&catalog));

        let empty = full.toggled_all(&catalog);
        assert!(empty.is_empty());
        assert_eq!(empty, Selection::empty());
    }

    #[test]
    fn test_toggled_all_from_partial_selects_everything() {
        let catalog = catalog();
        let partial = Selection::new(["3"]);

        let result = partial.toggled_all(&catalog);
        assert_eq!(result.values(), ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_is_all_selected_counts_stale_values() {
        let catalog = catalog();
        let selection = Selection::new(["1", "2", "3", "gone"]);

        // Four values against four options reads as "all selected"
        assert!(selection.is_all_selected(&catalog));
        assert!(!selection.contains("4"));

        // So toggling all clears, dropping the stale value with the rest
        assert!(selection.toggled_all(&catalog).is_empty());
    }

    #[test]
    fn test_empty_catalog_is_all_selected_when_empty() {
        let catalog = Catalog::default();
        assert!(Selection::empty().is_all_selected(&catalog));
        assert!(Selection::empty().toggled_all(&catalog).is_empty());
    }
}
