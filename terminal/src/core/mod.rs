//! # Core Abstractions
//!
//! Error types, configuration and service traits used throughout the swap terminal.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`config`]**: Environment-driven settings (`SwapConfig`)
//! - **[`service`]**: Service traits for dependency injection (`PriceFeed`)
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use swap_terminal::core::service::PriceFeed;
//!
//! // In production: the HTTP client
//! let feed: Arc<dyn PriceFeed> = Arc::new(PriceClient::new(&config)?);
//!
//! // In tests: an in-memory feed
//! let feed: Arc<dyn PriceFeed> = Arc::new(StaticPriceFeed::new(records));
//! ```

pub mod config;
pub mod error;
pub mod service;

pub use config::SwapConfig;
pub use error::{AppError, Result};
pub use service::PriceFeed;
