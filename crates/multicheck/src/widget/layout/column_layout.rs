//! Column layout for arranging checkboxes top-to-bottom.
//!
//! `ColumnLayout` splits an ordered list of items into a fixed number of
//! columns. Columns are filled in sequence: column 0 takes the first
//! `rows_per_column` items, column 1 the next, and so on. This is column-major
//! order, not the row-by-row distribution of a grid, so reading down each
//! column and then across reproduces the original order.
//!
//! # Example
//!
//! ```
//! use multicheck::widget::layout::{partition, ColumnLayout};
//!
//! let items = ["a", "b", "c", "d", "e"];
//!
//! // Two columns: ceil(5 / 2) = 3 rows
//! let columns = partition(&items, 2);
//! assert_eq!(columns, vec![&items[0..3], &items[3..5]]);
//!
//! // More columns than items never produces empty columns
//! let mut layout = ColumnLayout::new(8);
//! layout.set_item_count(items.len());
//! assert_eq!(layout.column_count(), 5);
//! ```

use std::ops::Range;

use multicheck_core::logging::{targets, PerfSpan};

/// The number of columns actually used for `item_count` items.
///
/// Capped at the item count, so there are never more columns than items. A
/// requested count of zero is treated as one column.
pub fn effective_columns(item_count: usize, columns: usize) -> usize {
    columns.max(1).min(item_count)
}

/// Compute the index range of every column.
///
/// The ranges are contiguous, in order, and together cover `0..item_count`
/// exactly. Every column holds `ceil(item_count / effective)` items except the
/// last, which may hold fewer. Trailing columns that would be empty are not
/// produced.
pub fn column_ranges(item_count: usize, columns: usize) -> Vec<Range<usize>> {
    let effective = effective_columns(item_count, columns);
    if effective == 0 {
        return Vec::new();
    }

    let rows_per_column = item_count.div_ceil(effective);
    (0..effective)
        .map(|column| {
            let start = column.saturating_mul(rows_per_column);
            start..start.saturating_add(rows_per_column).min(item_count)
        })
        .filter(|range| !range.is_empty())
        .collect()
}

/// Split `items` into column buckets, filled top-to-bottom.
pub fn partition<T>(items: &[T], columns: usize) -> Vec<&[T]> {
    column_ranges(items.len(), columns)
        .into_iter()
        .map(|range| &items[range])
        .collect()
}

/// A cached column layout.
///
/// The layout remembers the requested column count and the item count it was
/// computed for, and recomputes its ranges only when either changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Requested number of columns.
    columns: usize,
    /// Number of items laid out.
    item_count: usize,
    /// Cached column ranges.
    ranges: Vec<Range<usize>>,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ColumnLayout {
    /// Create a layout for `columns` columns and no items.
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            item_count: 0,
            ranges: Vec::new(),
        }
    }

    /// The requested column count.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The number of items laid out.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// The column count after capping at the item count.
    pub fn effective_columns(&self) -> usize {
        effective_columns(self.item_count, self.columns)
    }

    /// The number of non-empty columns produced.
    pub fn column_count(&self) -> usize {
        self.ranges.len()
    }

    /// The rows in the tallest column.
    pub fn rows_per_column(&self) -> usize {
        self.ranges.first().map_or(0, |range| range.len())
    }

    /// The cached column ranges.
    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    /// Set the requested column count, returning `true` if it changed.
    pub fn set_columns(&mut self, columns: usize) -> bool {
        if self.columns == columns {
            return false;
        }
        self.columns = columns;
        self.recalculate();
        true
    }

    /// Set the item count, returning `true` if it changed.
    pub fn set_item_count(&mut self, item_count: usize) -> bool {
        if self.item_count == item_count {
            return false;
        }
        self.item_count = item_count;
        self.recalculate();
        true
    }

    /// Split `items` according to the cached ranges.
    ///
    /// `items` is expected to have [`item_count`](Self::item_count) entries;
    /// ranges past its end are clamped.
    pub fn columns_of<'a, T>(&self, items: &'a [T]) -> Vec<&'a [T]> {
        self.ranges
            .iter()
            .map(|range| {
                let end = range.end.min(items.len());
                &items[range.start.min(end)..end]
            })
            .collect()
    }

    /// Force the ranges to be recomputed.
    pub fn recalculate(&mut self) {
        let _span = PerfSpan::new("column_layout");
        self.ranges = column_ranges(self.item_count, self.columns);
        tracing::debug!(
            target: targets::LAYOUT,
            columns = self.columns,
            items = self.item_count,
            produced = self.ranges.len(),
            "recalculated column layout"
        );
    }
}
