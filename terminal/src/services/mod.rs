//! # Services Module
//!
//! External collaborators of the swap form.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! ├── prices.rs   - HTTP price feed client (implements core::service::PriceFeed)
//! └── icons.rs    - Currency code → icon URL resolver
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    Swap Terminal                        │
//! │                                                         │
//! │  ┌──────────────────┐       ┌──────────────────┐       │
//! │  │  PriceClient     │       │  IconResolver    │       │
//! │  │  (prices.rs)     │       │  (icons.rs)      │       │
//! │  └────────┬─────────┘       └────────┬─────────┘       │
//! └───────────┼──────────────────────────┼─────────────────┘
//!             │ HTTP/JSON (once)         │ URL only, egui loads the image
//!             ▼                          ▼
//! ┌─────────────────────┐    ┌─────────────────────────────┐
//! │  prices.json        │    │  token-icons/{CODE}.svg     │
//! └─────────────────────┘    └─────────────────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Feed failures are returned as [`crate::core::AppError::Feed`]. The caller
//! logs them and moves the submit status to `Error`; there is no retry.

pub mod icons;
pub mod prices;

pub use icons::IconResolver;
pub use prices::PriceClient;
