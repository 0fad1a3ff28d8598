//! # Currency Swap Terminal - Library Root
//!
//! A **native desktop GUI** for swapping between tokens at live prices.
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Features
//!
//! - **Live prices**: the token list and prices are fetched once at startup
//! - **Conversion**: the received amount follows the amount typed and both prices
//! - **Balance check**: amounts above the (mock) balance are flagged and block submit
//! - **Simulated submit**: idle → loading → success, then the form resets
//! - **Token picker**: searchable modal, choosing the opposite token swaps the pair
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              swap-terminal (this crate)                │
//! ├────────────────────────────────────────────────────────┤
//! │  egui/eframe   - Immediate-mode GUI and native window  │
//! │  Tokio         - Async runtime for fetch and timers    │
//! │  Reqwest       - HTTP client for the price feed        │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP                          │ HTTP
//!          ▼                               ▼
//! ┌─────────────────┐          ┌─────────────────────────┐
//! │  Price feed     │          │   Token icon host       │
//! │  (JSON array)   │          │   ({CURRENCY}.svg)      │
//! └─────────────────┘          └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: orchestrator, state, events, handlers and background tasks
//! - **core**: errors, configuration and the [`core::service::PriceFeed`] trait
//! - **swap**: pure form logic (prices, conversion, balances, submit, selection)
//! - **services**: HTTP price client and icon URL resolver
//! - **ui**: screens, widgets and theme
//! - **debug**: file logging
//! - **utils**: amount parsing and the global Tokio runtime
//!
//! ## Core Concepts
//!
//! Application state is wrapped in `Arc<RwLock<AppState>>`. Background tasks
//! never write to it; they post an [`AppEvent`] that the main thread applies
//! on the next frame.
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p swap-terminal
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod services;
pub mod swap;
pub mod ui;
pub mod utils;

pub use app::{App, AppEvent, AppState};
pub use crate::core::{AppError, Result};
