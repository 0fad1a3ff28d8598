//! # Reusable UI Widgets
//!
//! Common widgets used by the swap screen.

pub mod currency_input;
pub mod icons;
pub mod layouts;
pub mod notifications;
pub mod token_picker;
