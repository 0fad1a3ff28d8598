//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI rendering layer, async tasks
//! and application state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - called every frame                    │   │
//! │  │  - handle_event() - processes async results          │   │
//! │  │  - handle_*() - user action handlers                 │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Tasks (Tokio)                            │
//! │  - fetch_prices() - one-shot price list load                │
//! │  - schedule_settlement() - submit timers                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tasks never touch the state. They post an [`AppEvent`] and the main thread
//! applies it in [`App::on_tick`], so every mutation happens on one thread.
//!
//! ```rust,ignore
//! // In the egui update loop:
//! app.on_tick();
//! let snapshot = app.state.read().clone();
//! render(&snapshot);
//! ```

mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;

pub use events::{AppEvent, SwapTicket};
pub use state::*;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;

use crate::core::config::SwapConfig;
use crate::core::service::PriceFeed;
use crate::services::icons::IconResolver;
use crate::swap::{SelectionOutcome, TokenPickerTarget};

use self::event_handler::AppEventHandler;

/// Main application orchestrator.
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// Hold locks for the shortest possible time; the UI renders from a clone.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results, polled in `on_tick()`.
    pub event_rx: Receiver<AppEvent>,

    /// Cloned into every spawned task.
    event_tx: Sender<AppEvent>,

    config: SwapConfig,
    feed: Arc<dyn PriceFeed>,
    icons: IconResolver,
}

impl App {
    /// Create the application with the default form (ETH → USDC) and mock balances.
    ///
    /// Nothing is spawned here; call [`App::load_prices`] once a Tokio runtime
    /// is entered.
    pub fn new(config: SwapConfig, feed: Arc<dyn PriceFeed>) -> Self {
        let state = AppState::new(&config);
        let (event_tx, event_rx) = unbounded();
        let icons = IconResolver::from_config(&config);

        tracing::info!(
            feed_url = %config.price_feed_url,
            conflict_policy = ?config.conflict_policy,
            "App state initialized"
        );

        Self {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
            config,
            feed,
            icons,
        }
    }

    /// Start the one-shot price fetch.
    pub fn load_prices(&self) {
        tasks::market::fetch_prices(self.feed.clone(), self.event_tx.clone());
    }

    /// Called every frame to apply pending async results. Never blocks.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Apply one async result to the state.
    pub fn handle_event(&mut self, event: AppEvent) {
        self.handle_event_impl(event);
    }

    /// Returns `false` when the text was not a valid amount and was discarded.
    pub fn handle_amount_change(&mut self, text: String) -> bool {
        handlers::swap::handle_amount_change(self.state.clone(), text)
    }

    pub fn open_token_picker(&mut self, target: TokenPickerTarget) {
        handlers::swap::open_token_picker(self.state.clone(), target);
    }

    pub fn close_token_picker(&mut self) {
        handlers::swap::close_token_picker(self.state.clone());
    }

    pub fn handle_search_change(&mut self, search: String) {
        handlers::swap::handle_search_change(self.state.clone(), search);
    }

    pub fn handle_token_select(&mut self, token: String) -> SelectionOutcome {
        handlers::swap::handle_token_select(self.state.clone(), &token)
    }

    pub fn handle_flip_click(&mut self) {
        handlers::swap::handle_flip(self.state.clone());
    }

    /// Confirm the swap. Settlement and reset arrive later as events.
    pub fn handle_submit_click(&mut self) {
        match handlers::swap::handle_submit(self.state.clone()) {
            Ok(ticket) => {
                tracing::info!(
                    from = %ticket.from,
                    to = %ticket.to,
                    from_amount = ticket.from_amount,
                    "Swap submitted"
                );
                tasks::swap::schedule_settlement(
                    ticket,
                    self.config.settle_delay,
                    self.config.reset_delay,
                    self.event_tx.clone(),
                );
            }
            Err(e) => tracing::warn!(error = %e, "Swap submit refused"),
        }
    }

    pub fn icons(&self) -> &IconResolver {
        &self.icons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::prices::StaticPriceFeed;
    use crate::swap::{SubmitStatus, ValidationError};
    use shared::dto::market::PriceRecord;
    use std::time::Duration;

    fn feed() -> Arc<dyn PriceFeed> {
        Arc::new(StaticPriceFeed::new(vec![
            PriceRecord::new("ETH", 1600.0),
            PriceRecord::new("USDC", 1.0),
            PriceRecord {
                currency: "LUNA".to_string(),
                date: None,
                price: None,
            },
        ]))
    }

    fn fast_config() -> SwapConfig {
        SwapConfig {
            settle_delay: Duration::from_millis(10),
            reset_delay: Duration::from_millis(10),
            ..SwapConfig::default()
        }
    }

    async fn next_event(app: &mut App) {
        let event = tokio::time::timeout(Duration::from_secs(2), app.event_rx.recv())
            .await
            .expect("event timed out")
            .expect("channel closed");
        app.handle_event(event);
    }

    #[test]
    fn test_new_app_is_idle() {
        let app = App::new(SwapConfig::default(), feed());
        let state = app.state.read();
        assert!(!state.prices_loaded);
        assert_eq!(state.submit_status, SubmitStatus::Idle);
        assert!(state.prices.is_empty());
    }

    #[test]
    fn test_prices_loaded_event_recomputes() {
        let mut app = App::new(SwapConfig::default(), feed());
        app.handle_amount_change("1".to_string());
        assert_eq!(app.state.read().form.to_amount, "");

        let book = crate::swap::PriceBook::from_records(&[
            PriceRecord::new("ETH", 1600.0),
            PriceRecord::new("USDC", 1.0),
        ]);
        app.handle_event(AppEvent::PricesLoaded(book));

        let state = app.state.read();
        assert!(state.prices_loaded);
        assert_eq!(state.form.to_amount, "1600.000000");
    }

    #[test]
    fn test_stale_events_are_ignored() {
        let mut app = App::new(SwapConfig::default(), feed());
        app.handle_event(AppEvent::SwapSettled(SwapTicket {
            from: "ETH".to_string(),
            to: "USDC".to_string(),
            from_amount: 1.0,
            to_amount: 1600.0,
        }));
        app.handle_event(AppEvent::SwapReset);

        let state = app.state.read();
        assert_eq!(state.submit_status, SubmitStatus::Idle);
        assert_eq!(state.balances.of("ETH"), 10.5);
    }

    #[tokio::test]
    async fn test_load_prices_filters_unpriced() {
        let mut app = App::new(SwapConfig::default(), feed());
        app.load_prices();
        next_event(&mut app).await;

        let state = app.state.read();
        assert!(state.prices_loaded);
        assert_eq!(state.prices.tokens(), &["ETH".to_string(), "USDC".to_string()]);
    }

    #[tokio::test]
    async fn test_load_failure_moves_to_error() {
        let failing: Arc<dyn PriceFeed> = Arc::new(StaticPriceFeed::failing("offline"));
        let mut app = App::new(SwapConfig::default(), failing);
        app.load_prices();
        next_event(&mut app).await;

        let mut state = app.state.write();
        assert!(!state.prices_loaded);
        assert_eq!(state.submit_status, SubmitStatus::Error);
        assert_eq!(state.submit_status.label(), "Error fetching prices");
        assert!(!state.can_submit());

        let notifications = std::mem::take(&mut state.pending_notifications);
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].0, NotificationLevel::Error);
    }

    #[tokio::test]
    async fn test_submit_settles_then_resets() {
        let mut app = App::new(fast_config(), feed());
        app.load_prices();
        next_event(&mut app).await;

        assert!(app.handle_amount_change("2".to_string()));
        app.handle_submit_click();
        assert_eq!(app.state.read().submit_status, SubmitStatus::Loading);

        next_event(&mut app).await;
        {
            let state = app.state.read();
            assert_eq!(state.submit_status, SubmitStatus::Success);
            assert_eq!(state.balances.of("ETH"), 8.5);
            assert_eq!(state.balances.of("USDC"), 8200.0);
            assert_eq!(state.pending_notifications.len(), 1);
            assert_eq!(state.pending_notifications[0].0, NotificationLevel::Success);
        }

        next_event(&mut app).await;
        let state = app.state.read();
        assert_eq!(state.submit_status, SubmitStatus::Idle);
        assert!(state.form.from_amount.is_empty());
        assert!(state.form.to_amount.is_empty());
        assert_eq!(state.form.error, None);
    }

    #[tokio::test]
    async fn test_submit_refused_spawns_nothing() {
        let mut app = App::new(fast_config(), feed());
        app.load_prices();
        next_event(&mut app).await;

        app.handle_amount_change("11".to_string());
        assert_eq!(
            app.state.read().form.error,
            Some(ValidationError::InsufficientBalance)
        );
        app.handle_submit_click();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(app.event_rx.try_recv().is_err());
        assert_eq!(app.state.read().submit_status, SubmitStatus::Idle);
    }

    #[test]
    fn test_flip_and_select_through_app() {
        let mut app = App::new(SwapConfig::default(), feed());
        app.open_token_picker(TokenPickerTarget::To);
        assert_eq!(app.handle_token_select("ETH".to_string()), SelectionOutcome::Swapped);
        app.handle_flip_click();

        let state = app.state.read();
        assert_eq!(state.form.pair.from(), "ETH");
        assert_eq!(state.form.pair.to(), "USDC");
        assert!(!state.picker.open);
    }
}
