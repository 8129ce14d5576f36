//! Controls built on the selection model.
//!
//! - [`MultiCheck`]: the multi-selection checkbox control
//! - [`CheckBox`]: the view of one of its checkboxes

mod checkbox;
mod multi_check;

pub use checkbox::{CheckBox, CheckState, CheckTarget};
pub use multi_check::{ChangeNotifier, MultiCheck, MultiCheckSurface};
