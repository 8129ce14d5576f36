//! Data model for MultiCheck.
//!
//! - [`CheckOption`]: one label/value pair
//! - [`Catalog`]: the ordered options supplied for a render pass
//! - [`Selection`]: the checked values and the toggle operations on them
//!
//! The model has no knowledge of layout or notification; those live in
//! [`crate::widget`].
//!
//! ```text
//! ┌─────────────┐  toggled / toggled_all  ┌─────────────┐
//! │   Catalog   │────────────────────────>│  Selection  │
//! └─────────────┘                         └─────────────┘
//!        │            materialize                │
//!        └──────────> Vec<CheckOption> <─────────┘
//! ```

mod option;
pub mod selection;

pub use option::{Catalog, CheckOption};
pub use selection::Selection;
