//! Core systems for MultiCheck.
//!
//! This crate provides the foundational components the MultiCheck control is
//! built on:
//!
//! - **Signal/Slot System**: Type-safe notification of host callbacks
//! - **Logging**: Tracing targets and debug tree visualization
//!
//! # Signal/Slot Example
//!
//! ```
//! use multicheck_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use logging::{DebugTree, PerfSpan, TreeFormatOptions, TreeStyle};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
