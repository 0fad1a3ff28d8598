//! # Async Tasks
//!
//! Background work: the price fetch and the submission timers.

pub mod market;
pub mod swap;
