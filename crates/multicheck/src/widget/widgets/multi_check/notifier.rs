//! Change notification for the MultiCheck control.

use multicheck_core::logging::targets;
use multicheck_core::Signal;

use crate::model::{Catalog, CheckOption, Selection};

/// Reports selection changes to the host, once per actual change.
///
/// The notifier keeps a snapshot of the last selection it reported (initially
/// the starting selection, so construction never notifies). After each
/// mutation the control calls [`notify`](Self::notify); when the selection
/// differs from the snapshot, the selection is materialized in catalog order
/// and emitted on [`changed`](Self::changed).
#[derive(Default)]
pub struct ChangeNotifier {
    snapshot: Selection,
    changed: Signal<Vec<CheckOption>>,
}

impl ChangeNotifier {
    /// Create a notifier whose snapshot is `initial`.
    pub fn new(initial: &Selection) -> Self {
        Self {
            snapshot: initial.clone(),
            changed: Signal::new(),
        }
    }

    /// The signal carrying the materialized selection.
    pub fn changed(&self) -> &Signal<Vec<CheckOption>> {
        &self.changed
    }

    /// The last reported selection.
    pub fn snapshot(&self) -> &Selection {
        &self.snapshot
    }

    /// Replace the snapshot without notifying.
    pub fn reset(&mut self, selection: &Selection) {
        self.snapshot = selection.clone();
    }

    /// Report `selection` if it differs from the snapshot.
    ///
    /// Returns `true` if the host was notified. With no slot connected the
    /// comparison and materialization are skipped and the snapshot simply
    /// follows the selection.
    pub fn notify(&mut self, selection: &Selection, catalog: &Catalog) -> bool {
        if !self.changed.has_connections() {
            self.snapshot = selection.clone();
            return false;
        }
        if *selection == self.snapshot {
            tracing::trace!(target: targets::NOTIFIER, "selection unchanged, not notifying");
            return false;
        }

        let options = catalog.materialize(selection);
        tracing::debug!(
            target: targets::NOTIFIER,
            selected = options.len(),
            "selection changed"
        );
        self.snapshot = selection.clone();
        self.changed.emit(options);
        true
    }
}
