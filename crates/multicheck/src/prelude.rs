//! Prelude module for MultiCheck.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```
//! use multicheck::prelude::*;
//! ```

// ============================================================================
// Signal/Slot System
// ============================================================================

pub use crate::signal::{ConnectionGuard, ConnectionId, Signal};

// ============================================================================
// Selection Model
// ============================================================================

pub use crate::model::{Catalog, CheckOption, Selection};

// ============================================================================
// Control
// ============================================================================

pub use crate::widget::widgets::{CheckBox, CheckState, CheckTarget, MultiCheck, MultiCheckSurface};
pub use crate::widget::{IndicatorStyle, Key, MultiCheckEvent, RenderOptions};

// ============================================================================
// Props
// ============================================================================

pub use crate::file::{MultiCheckProps, PropsError};
