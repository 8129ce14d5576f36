//! The MultiCheck control and its presentation.
//!
//! This module provides:
//!
//! - [`widgets::MultiCheck`]: the control, owning the selection and reporting
//!   changes through its `changed` signal
//! - [`layout`]: the top-to-bottom column partitioner
//! - [`events`]: input events a host feeds to the control
//! - [`painting`]: plain-text rendering
//!
//! # Overview
//!
//! The control is headless. A host reads [`widgets::MultiCheck::surface`] (or
//! renders it with [`painting::render_text`]) to present it, and translates
//! user input into [`MultiCheckEvent`]s or direct calls such as
//! [`widgets::MultiCheck::click_label`].

pub mod events;
pub mod layout;
pub mod painting;
pub mod widgets;

pub use events::{Key, MultiCheckEvent};
pub use painting::{IndicatorStyle, RenderOptions};
