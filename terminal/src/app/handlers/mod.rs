//! # Event Handlers
//!
//! User action handlers. They take the shared state and return quickly; any
//! timed follow-up is scheduled by the caller through [`crate::app::tasks`].

pub mod swap;
