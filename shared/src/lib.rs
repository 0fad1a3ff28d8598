//! # Shared Data Transfer Objects Library
//!
//! Contract between the price feed and any front end of the swap form.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::market`]**: Price feed records
//! - **[`utils`]**: Shared display helpers
//!   - **[`utils::format_fixed`]**: Fixed-point formatting for amounts
//!   - **[`utils::format_rate_info`]**: "1 FROM ≈ RATE TO" line
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::dto::market::PriceRecord;
//!
//! let records: Vec<PriceRecord> = reqwest::get("https://interview.switcheo.com/prices.json")
//!     .await?
//!     .json()
//!     .await?;
//! let priced = records.iter().filter(|r| r.is_priced()).count();
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
