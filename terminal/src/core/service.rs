//! # Service Traits
//!
//! Seams for the external collaborators so tests can run without the network.

use async_trait::async_trait;
use shared::dto::market::PriceRecord;

use crate::core::error::Result;

/// Source of the token/price list.
///
/// The production implementation is [`crate::services::prices::PriceClient`];
/// tests substitute an in-memory feed.
#[async_trait]
pub trait PriceFeed: Send + Sync {
    /// Fetch the raw price records, unfiltered.
    async fn fetch_prices(&self) -> Result<Vec<PriceRecord>>;
}
