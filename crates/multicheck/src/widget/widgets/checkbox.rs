//! CheckBox view implementation.
//!
//! This module provides [`CheckBox`], the view of one checkbox of a
//! [`MultiCheck`](super::MultiCheck): its visible text, what clicking it
//! toggles, and whether it is checked. Views are derived from the control's
//! state on demand and never mutated; clicking goes through the control.
//!
//! # Example
//!
//! ```
//! use multicheck::widget::widgets::{CheckState, CheckTarget, MultiCheck};
//! use multicheck::model::CheckOption;
//!
//! let mut control = MultiCheck::new(vec![CheckOption::new("Red", "red")]);
//! control.click_label("Red");
//!
//! let checkbox = control.find_checkbox("Red").unwrap();
//! assert_eq!(checkbox.check_state(), CheckState::Checked);
//! assert_eq!(checkbox.target(), &CheckTarget::Option("red".to_string()));
//! ```

use crate::model::CheckOption;

/// The check state of a checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckState {
    /// The checkbox is not checked.
    #[default]
    Unchecked,
    /// The checkbox is checked.
    Checked,
}

impl CheckState {
    /// Returns `true` if the state is `Checked`.
    pub fn is_checked(&self) -> bool {
        matches!(self, CheckState::Checked)
    }
}

impl From<bool> for CheckState {
    fn from(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }
}

/// What a checkbox toggles when clicked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CheckTarget {
    /// The aggregate "Select All" checkbox.
    SelectAll,
    /// The checkbox of the option with this value.
    Option(String),
}

impl CheckTarget {
    /// The option value, or `None` for the select-all box.
    pub fn value(&self) -> Option<&str> {
        match self {
            CheckTarget::SelectAll => None,
            CheckTarget::Option(value) => Some(value),
        }
    }
}

/// A checkbox as presented to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckBox {
    text: String,
    target: CheckTarget,
    check_state: CheckState,
}

impl CheckBox {
    /// The text of the aggregate checkbox.
    pub const SELECT_ALL_TEXT: &'static str = "Select All";

    /// The aggregate "Select All" checkbox.
    pub fn select_all(checked: bool) -> Self {
        Self {
            text: Self::SELECT_ALL_TEXT.to_string(),
            target: CheckTarget::SelectAll,
            check_state: CheckState::from(checked),
        }
    }

    /// The checkbox of one option.
    pub fn for_option(option: &CheckOption, checked: bool) -> Self {
        Self {
            text: option.label.clone(),
            target: CheckTarget::Option(option.value.clone()),
            check_state: CheckState::from(checked),
        }
    }

    /// The checkbox's label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// What clicking this checkbox toggles.
    pub fn target(&self) -> &CheckTarget {
        &self.target
    }

    /// The current check state.
    pub fn check_state(&self) -> CheckState {
        self.check_state
    }

    /// Returns `true` if the checkbox is checked.
    pub fn is_checked(&self) -> bool {
        self.check_state.is_checked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all_checkbox() {
        let checkbox = CheckBox::select_all(false);
        assert_eq!(checkbox.text(), "Select All");
        assert_eq!(checkbox.target(), &CheckTarget::SelectAll);
        assert!(!checkbox.is_checked());
        assert_eq!(checkbox.target().value(), None);
    }

    #[test]
    fn test_option_checkbox() {
        let option = CheckOption::new("Option 1", "1");
        let checkbox = CheckBox::for_option(&option, true);
        assert_eq!(checkbox.text(), "Option 1");
        assert_eq!(checkbox.target().value(), Some("1"));
        assert_eq!(checkbox.check_state(), CheckState::Checked);
    }

    #[test]
    fn test_check_state_conversions() {
        assert!(CheckState::Checked.is_checked());
        assert!(!CheckState::Unchecked.is_checked());

        assert_eq!(CheckState::from(true), CheckState::Checked);
        assert_eq!(CheckState::from(false), CheckState::Unchecked);
    }
}
