//! # Data Transfer Objects (DTOs)
//!
//! Wire types consumed by the swap terminal.
//!
//! ## Module Organization
//!
//! - [`market`] - Price feed records
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json`:
//!
//! - **Field naming**: snake_case (default serde behavior, matches the feed)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Missing fields**: Tolerated with `#[serde(default)]`, the feed is not strict
//!
//! ## Example Feed Payload
//!
//! ```text
//! GET /prices.json
//!
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! [
//!   { "currency": "USDC", "date": "2023-08-29T07:10:30.000Z", "price": 0.9899 },
//!   { "currency": "ETH",  "date": "2023-08-29T07:10:52.000Z", "price": 1645.93 }
//! ]
//! ```

pub mod market;

pub use market::*;
