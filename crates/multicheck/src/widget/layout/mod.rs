//! Layout system for arranging checkboxes.
//!
//! - [`ColumnLayout`]: cached top-to-bottom column layout
//! - [`column_ranges`] / [`partition`]: the pure partitioning functions it
//!   is built on
//!
//! The layout only decides which column each option lands in. It never
//! influences selection.

mod column_layout;

pub use column_layout::{column_ranges, effective_columns, partition, ColumnLayout};
