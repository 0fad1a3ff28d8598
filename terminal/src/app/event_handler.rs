//! # Event Handler
//!
//! Handles async event results from background tasks, updating application state accordingly.
//!
//! Each event takes the write lock once and releases it before returning.

use crate::app::events::SwapTicket;
use crate::app::state::NotificationLevel;
use crate::app::{App, AppEvent};
use crate::swap::{PriceBook, SubmitEvent};

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::PricesLoaded(book) => self.handle_prices_loaded(book),
            AppEvent::PricesFailed(message) => self.handle_prices_failed(message),
            AppEvent::SwapSettled(ticket) => self.handle_swap_settled(ticket),
            AppEvent::SwapReset => self.handle_swap_reset(),
        }
    }
}

impl App {
    fn handle_prices_loaded(&mut self, book: PriceBook) {
        let mut state = self.state.write();
        tracing::info!(token_count = book.len(), "Prices available");
        state.prices = book;
        state.prices_loaded = true;
        state.recompute();
    }

    fn handle_prices_failed(&mut self, message: String) {
        let mut state = self.state.write();
        match state.submit_status.transition(SubmitEvent::FetchFailed) {
            Ok(next) => state.submit_status = next,
            Err(e) => tracing::warn!(error = %e, "Ignoring fetch failure"),
        }
        state.notify(
            NotificationLevel::Error,
            format!("Failed to load prices: {}", message),
        );
    }

    fn handle_swap_settled(&mut self, ticket: SwapTicket) {
        let mut state = self.state.write();
        let next = match state.submit_status.transition(SubmitEvent::Settle) {
            Ok(next) => next,
            Err(e) => {
                tracing::warn!(error = %e, "Dropping settlement");
                return;
            }
        };

        state
            .balances
            .apply_swap(&ticket.from, ticket.from_amount, &ticket.to, ticket.to_amount);
        state.submit_status = next;
        state.recompute();

        tracing::info!(
            from = %ticket.from,
            to = %ticket.to,
            from_amount = ticket.from_amount,
            to_amount = ticket.to_amount,
            "Swap settled"
        );
        state.notify(
            NotificationLevel::Success,
            format!(
                "Swapped {} {} for {} {}",
                shared::utils::format_fixed(ticket.from_amount, 6),
                ticket.from,
                shared::utils::format_fixed(ticket.to_amount, 6),
                ticket.to
            ),
        );
    }

    fn handle_swap_reset(&mut self) {
        let mut state = self.state.write();
        match state.submit_status.transition(SubmitEvent::Reset) {
            Ok(next) => state.submit_status = next,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring form reset");
                return;
            }
        }
        state.form.from_amount.clear();
        state.form.to_amount.clear();
        state.recompute();
    }
}
