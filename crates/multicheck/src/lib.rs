//! MultiCheck - a headless multi-selection checkbox control.
//!
//! This is the main crate. It re-exports the signal and logging primitives
//! of `multicheck-core` and adds the selection model, the column layout, the
//! control itself, and props loading.
//!
//! # Example
//!
//! ```
//! use multicheck::prelude::*;
//!
//! let mut control = MultiCheck::new(vec![
//!     CheckOption::new("Option 1", "1"),
//!     CheckOption::new("Option 2", "2"),
//! ])
//! .with_columns(2);
//!
//! control.changed().connect(|options: &Vec<CheckOption>| {
//!     println!("{} selected", options.len());
//! });
//!
//! control.click_label("Select All");
//! assert!(control.is_all_selected());
//! print!("{}", control.render_text(&RenderOptions::default()));
//! ```

pub use multicheck_core::*;

pub mod file;
pub mod model;
pub mod prelude;
pub mod widget;
