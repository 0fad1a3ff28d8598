//! # Application Events
//!
//! Results posted by background tasks and timers to the UI thread.

use crate::swap::PriceBook;

/// Amounts captured when the user confirmed the swap.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapTicket {
    pub from: String,
    pub to: String,
    pub from_amount: f64,
    pub to_amount: f64,
}

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Price list fetched and filtered
    PricesLoaded(PriceBook),
    /// Price list could not be fetched
    PricesFailed(String),
    /// Simulated swap finished; apply the ticket to the balances
    SwapSettled(SwapTicket),
    /// Success banner elapsed; clear the form
    SwapReset,
}
