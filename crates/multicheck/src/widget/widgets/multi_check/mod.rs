//! MultiCheck control implementation.
//!
//! This module provides [`MultiCheck`], a multi-selection control presenting
//! an optional label, an aggregate "Select All" checkbox, and one checkbox per
//! option arranged top-to-bottom in a configurable number of columns.
//!
//! # Overview
//!
//! The control owns the current [`Selection`] (the set of checked option
//! values). Every click replaces it with a new selection computed from the
//! old one; afterwards the [`ChangeNotifier`] compares it with the last
//! reported selection and, if they differ, emits the selected options in
//! catalog order on [`changed`](MultiCheck::changed).
//!
//! # Example
//!
//! ```
//! use multicheck::model::CheckOption;
//! use multicheck::widget::widgets::MultiCheck;
//! use std::sync::{Arc, Mutex};
//!
//! let received = Arc::new(Mutex::new(Vec::new()));
//! let received_clone = received.clone();
//!
//! let mut control = MultiCheck::new(vec![
//!     CheckOption::new("Option 1", "1"),
//!     CheckOption::new("Option 2", "2"),
//! ])
//! .with_label("Pick some")
//! .with_columns(2)
//! .with_on_change(move |options| {
//!     received_clone.lock().unwrap().push(options.len());
//! });
//!
//! control.toggle_option("1");
//! control.toggle_all();
//! assert!(control.is_all_selected());
//! assert_eq!(*received.lock().unwrap(), vec![1, 2]);
//! ```

mod notifier;

pub use notifier::ChangeNotifier;

use std::fmt;

use multicheck_core::logging::targets;
use multicheck_core::{DebugTree, Signal};

use super::checkbox::{CheckBox, CheckTarget};
use crate::file::MultiCheckProps;
use crate::model::{Catalog, CheckOption, Selection};
use crate::widget::events::MultiCheckEvent;
use crate::widget::layout::ColumnLayout;
use crate::widget::painting::{self, RenderOptions};

/// The derived presentation of a [`MultiCheck`].
///
/// Built from the control's state by [`MultiCheck::surface`]; a host draws it
/// however it likes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiCheckSurface {
    /// The label, if one is set.
    pub label: Option<String>,
    /// The aggregate checkbox.
    pub select_all: CheckBox,
    /// The option checkboxes, one vector per column.
    pub columns: Vec<Vec<CheckBox>>,
}

/// A multi-selection checkbox control.
///
/// # Signals
///
/// - `changed(Vec<CheckOption>)`: emitted after a click changes the
///   selection, carrying the selected options in catalog order
pub struct MultiCheck {
    /// Label shown above the checkboxes. Empty means no label.
    label: String,

    /// The options, in display order.
    catalog: Catalog,

    /// Requested column count and the cached split of the catalog.
    layout: ColumnLayout,

    /// The checked option values.
    selection: Selection,

    /// Reports selection changes.
    notifier: ChangeNotifier,
}

impl MultiCheck {
    /// Create a control for `options`, with one column and nothing checked.
    pub fn new(options: impl IntoIterator<Item = CheckOption>) -> Self {
        let catalog = Catalog::new(options);
        let mut layout = ColumnLayout::new(1);
        layout.set_item_count(catalog.len());

        Self {
            label: String::new(),
            catalog,
            layout,
            selection: Selection::empty(),
            notifier: ChangeNotifier::new(&Selection::empty()),
        }
    }

    /// Create a control from construction props.
    pub fn from_props(props: MultiCheckProps) -> Self {
        let MultiCheckProps {
            label,
            options,
            values,
            columns,
        } = props;

        Self::new(options)
            .with_label(label)
            .with_columns(columns)
            .with_values(values)
    }

    // =========================================================================
    // Builder Pattern Methods
    // =========================================================================

    /// Set the label using builder pattern.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the requested column count using builder pattern.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.set_columns(columns);
        self
    }

    /// Set the initially checked values using builder pattern.
    ///
    /// The initial selection is never reported as a change.
    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection = Selection::new(values);
        self.notifier.reset(&self.selection);
        self
    }

    /// Connect a change callback using builder pattern.
    pub fn with_on_change<F>(self, callback: F) -> Self
    where
        F: Fn(&Vec<CheckOption>) + Send + Sync + 'static,
    {
        self.notifier.changed().connect(callback);
        self
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// The label, or `None` if it is empty.
    pub fn label(&self) -> Option<&str> {
        (!self.label.is_empty()).then_some(self.label.as_str())
    }

    /// Set the label. An empty label hides it.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// The options, in display order.
    pub fn options(&self) -> &Catalog {
        &self.catalog
    }

    /// Replace the options.
    ///
    /// The selection is kept as is, including values the new options no longer
    /// contain. Changing the options never emits `changed`.
    pub fn set_options(&mut self, options: impl IntoIterator<Item = CheckOption>) {
        self.catalog = Catalog::new(options);
        self.layout.set_item_count(self.catalog.len());
        tracing::debug!(
            target: targets::SELECTION,
            options = self.catalog.len(),
            selected = self.selection.len(),
            "options replaced"
        );
    }

    /// The requested column count.
    pub fn columns(&self) -> usize {
        self.layout.columns()
    }

    /// Set the requested column count. Zero is treated as one.
    ///
    /// Returns `true` if the count changed. Never emits `changed`.
    pub fn set_columns(&mut self, columns: usize) -> bool {
        self.layout.set_columns(columns)
    }

    /// The number of non-empty option columns laid out.
    ///
    /// This can be lower than [`layout::effective_columns`](crate::widget::layout::effective_columns):
    /// 4 options in 3 columns fill 2 rows, so only 2 columns hold options.
    pub fn column_count(&self) -> usize {
        self.layout.column_count()
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// The current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The checked values, in the order they were checked.
    pub fn selected_values(&self) -> &[String] {
        self.selection.values()
    }

    /// The checked options, in catalog order.
    pub fn selected_options(&self) -> Vec<CheckOption> {
        self.catalog.materialize(&self.selection)
    }

    /// Returns `true` if the option with `value` is checked.
    pub fn is_checked(&self, value: &str) -> bool {
        self.selection.contains(value)
    }

    /// Returns `true` if the "Select All" box is checked.
    ///
    /// This compares counts: it holds whenever as many values are selected as
    /// there are options.
    pub fn is_all_selected(&self) -> bool {
        self.selection.is_all_selected(&self.catalog)
    }

    /// Toggle the option with `value`, as if its checkbox was clicked.
    ///
    /// Returns `true` if `changed` was emitted.
    pub fn toggle_option(&mut self, value: &str) -> bool {
        let next = self.selection.toggled(value);
        self.apply(next)
    }

    /// Click the "Select All" box.
    ///
    /// Returns `true` if `changed` was emitted. Change detection compares
    /// selections by value, so on an empty catalog (where the empty selection
    /// already counts as "all selected") the click yields another empty
    /// selection and nothing is emitted.
    pub fn toggle_all(&mut self) -> bool {
        let next = self.selection.toggled_all(&self.catalog);
        self.apply(next)
    }

    /// Click the checkbox whose visible text is `text`.
    ///
    /// Returns `false` if no checkbox has that text. Options are searched
    /// before the "Select All" box.
    pub fn click_label(&mut self, text: &str) -> bool {
        let target = match self.catalog.find_by_label(text) {
            Some(option) => CheckTarget::Option(option.value.clone()),
            None if text == CheckBox::SELECT_ALL_TEXT => CheckTarget::SelectAll,
            None => {
                tracing::trace!(target: targets::SELECTION, text, "no checkbox with this text");
                return false;
            }
        };
        self.activate(&target);
        true
    }

    /// Handle an input event.
    ///
    /// Returns `true` if the event was handled, in which case it is also
    /// accepted.
    pub fn event(&mut self, event: &mut MultiCheckEvent) -> bool {
        let handled = match event {
            MultiCheckEvent::Click(e) => {
                self.activate(&e.target);
                true
            }
            MultiCheckEvent::LabelClick(e) => self.click_label(&e.text),
            MultiCheckEvent::KeyRelease(e) => {
                if e.key.activates() {
                    self.activate(&e.target);
                    true
                } else {
                    false
                }
            }
        };
        if handled {
            event.accept();
        }
        handled
    }

    fn activate(&mut self, target: &CheckTarget) {
        match target {
            CheckTarget::SelectAll => self.toggle_all(),
            CheckTarget::Option(value) => self.toggle_option(value),
        };
    }

    fn apply(&mut self, next: Selection) -> bool {
        self.selection = next;
        self.notifier.notify(&self.selection, &self.catalog)
    }

    // =========================================================================
    // Presentation
    // =========================================================================

    /// The options split into columns, filled top-to-bottom.
    pub fn column_options(&self) -> Vec<&[CheckOption]> {
        self.layout.columns_of(self.catalog.as_slice())
    }

    /// The checkbox whose visible text is `text`.
    pub fn find_checkbox(&self, text: &str) -> Option<CheckBox> {
        if let Some(option) = self.catalog.find_by_label(text) {
            return Some(CheckBox::for_option(option, self.is_checked(&option.value)));
        }
        (text == CheckBox::SELECT_ALL_TEXT).then(|| CheckBox::select_all(self.is_all_selected()))
    }

    /// Build the presentation of the current state.
    pub fn surface(&self) -> MultiCheckSurface {
        let columns = self
            .column_options()
            .into_iter()
            .map(|column| {
                column
                    .iter()
                    .map(|option| CheckBox::for_option(option, self.is_checked(&option.value)))
                    .collect()
            })
            .collect();

        MultiCheckSurface {
            label: self.label().map(str::to_string),
            select_all: CheckBox::select_all(self.is_all_selected()),
            columns,
        }
    }

    /// Render the control as text.
    pub fn render_text(&self, options: &RenderOptions) -> String {
        painting::render_text(&self.surface(), options)
    }

    /// Dump the control state as a tree.
    pub fn debug_tree(&self) -> DebugTree {
        let surface = self.surface();
        let mut root = DebugTree::new("MultiCheck");
        if let Some(label) = &surface.label {
            root = root.with_detail(format!("label: {label:?}"));
        }

        root.push(checkbox_node(&surface.select_all));
        for (index, column) in surface.columns.iter().enumerate() {
            let mut node = DebugTree::new(format!("Column {index}"));
            for checkbox in column {
                node.push(checkbox_node(checkbox));
            }
            root.push(node);
        }
        root
    }

    // =========================================================================
    // Signals
    // =========================================================================

    /// Signal emitted when a click changes the selection.
    pub fn changed(&self) -> &Signal<Vec<CheckOption>> {
        self.notifier.changed()
    }
}

fn checkbox_node(checkbox: &CheckBox) -> DebugTree {
    let state = if checkbox.is_checked() { "checked" } else { "unchecked" };
    let detail = match checkbox.target().value() {
        Some(value) => format!("{value}, {state}"),
        None => state.to_string(),
    };
    DebugTree::new(checkbox.text()).with_detail(detail)
}

impl fmt::Debug for MultiCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiCheck")
            .field("label", &self.label)
            .field("options", &self.catalog.len())
            .field("columns", &self.layout.columns())
            .field("selection", &self.selection)
            .field("connections", &self.changed().connection_count())
            .finish()
    }
}

static_assertions::assert_impl_all!(MultiCheck: Send, Sync);
