//! Loading construction props from files.
//!
//! A control's construction props (label, options, initially checked values,
//! column count) can be kept in a JSON or TOML document and turned into a
//! control with [`MultiCheck::from_props`](crate::widget::widgets::MultiCheck::from_props).
//!
//! ```
//! use multicheck::file::MultiCheckProps;
//!
//! let props = MultiCheckProps::from_toml_str(r#"
//!     label = "Colors"
//!     values = ["red"]
//!
//!     [[options]]
//!     label = "Red"
//!     value = "red"
//! "#).unwrap();
//! assert_eq!(props.columns, 1);
//! assert_eq!(props.options.len(), 1);
//! ```

mod error;
mod props;

pub use error::{PropsError, Result};
pub use props::MultiCheckProps;
