//! # Price Feed Client
//!
//! Fetches the static price list over HTTP.

use async_trait::async_trait;
use reqwest::Client;
use shared::dto::market::PriceRecord;

use crate::core::config::SwapConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::PriceFeed;

/// HTTP client for the price feed.
pub struct PriceClient {
    client: Client,
    url: String,
}

impl PriceClient {
    /// Create a client with the configured request timeout.
    pub fn new(config: &SwapConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.fetch_timeout)
            .build()
            .map_err(|e| AppError::Feed(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: config.price_feed_url.clone(),
        })
    }
}

#[async_trait]
impl PriceFeed for PriceClient {
    #[tracing::instrument(skip(self), fields(url = %self.url))]
    async fn fetch_prices(&self) -> Result<Vec<PriceRecord>> {
        let start = std::time::Instant::now();
        tracing::debug!("Fetching prices");

        let response = self.client.get(&self.url).send().await.map_err(|e| {
            tracing::error!(error = %e, "Price fetch network error");
            AppError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                duration_ms = start.elapsed().as_millis(),
                "Price fetch failed"
            );
            return Err(AppError::Feed(format!("Failed to fetch prices: {}", status)));
        }

        let body = response.text().await?;
        let records: Vec<PriceRecord> = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, body_len = body.len(), "Price response parse error");
            AppError::from(e)
        })?;

        tracing::debug!(
            duration_ms = start.elapsed().as_millis(),
            record_count = records.len(),
            "Prices fetched successfully"
        );
        Ok(records)
    }
}

/// In-memory feed for tests.
#[cfg(test)]
pub(crate) struct StaticPriceFeed {
    outcome: std::result::Result<Vec<PriceRecord>, String>,
}

#[cfg(test)]
impl StaticPriceFeed {
    pub(crate) fn new(records: Vec<PriceRecord>) -> Self {
        Self { outcome: Ok(records) }
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl PriceFeed for StaticPriceFeed {
    async fn fetch_prices(&self) -> Result<Vec<PriceRecord>> {
        self.outcome.clone().map_err(AppError::Feed)
    }
}
