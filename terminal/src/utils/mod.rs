//! # Utility Functions
//!
//! Shared utility functions used across the swap terminal.
//!
//! ## Modules
//!
//! - **[`validation`]**: Amount input parsing and validation
//! - **[`runtime`]**: Global Tokio runtime for background tasks
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate display helpers
//! - [`crate::core`]: Core abstractions and error types

pub mod runtime;
pub mod validation;
