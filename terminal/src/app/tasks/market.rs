//! # Market Data Tasks
//!
//! One-shot price list fetch.

use std::sync::Arc;

use async_channel::Sender;
use tokio::spawn;
use tracing::{error, info};

use crate::app::events::AppEvent;
use crate::core::service::PriceFeed;
use crate::swap::PriceBook;

/// Fetch the price list once and post the result.
///
/// Internal task function - spawns async task and sends the outcome via the event channel.
pub(crate) fn fetch_prices(feed: Arc<dyn PriceFeed>, event_tx: Sender<AppEvent>) {
    spawn(async move {
        let start = std::time::Instant::now();

        let event = match feed.fetch_prices().await {
            Ok(records) => {
                let book = PriceBook::from_records(&records);
                info!(
                    record_count = records.len(),
                    token_count = book.len(),
                    duration_ms = start.elapsed().as_millis(),
                    "Price list loaded"
                );
                AppEvent::PricesLoaded(book)
            }
            Err(e) => {
                error!(
                    error = %e,
                    duration_ms = start.elapsed().as_millis(),
                    "Failed to fetch token prices"
                );
                AppEvent::PricesFailed(e.to_string())
            }
        };

        let _ = event_tx.send(event).await;
    });
}
