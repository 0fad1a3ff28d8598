//! # Swap Tasks
//!
//! Timers behind the simulated submission.

use std::time::Duration;

use async_channel::Sender;
use tokio::spawn;
use tokio::time::sleep;

use crate::app::events::{AppEvent, SwapTicket};

/// Settle the swap after `settle_delay`, then reset the form after `reset_delay`.
///
/// Internal task function - both steps are posted as events so the state is
/// only ever mutated on the UI thread.
pub(crate) fn schedule_settlement(
    ticket: SwapTicket,
    settle_delay: Duration,
    reset_delay: Duration,
    event_tx: Sender<AppEvent>,
) {
    spawn(async move {
        sleep(settle_delay).await;
        tracing::debug!(from = %ticket.from, to = %ticket.to, "Simulated swap settled");
        if event_tx.send(AppEvent::SwapSettled(ticket)).await.is_err() {
            // UI is gone
            return;
        }

        // Counted from the send; the UI applies SwapSettled on its next poll,
        // so Success can show for up to one frame poll less than reset_delay
        sleep(reset_delay).await;
        let _ = event_tx.send(AppEvent::SwapReset).await;
    });
}
