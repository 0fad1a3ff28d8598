//! # Swap Configuration
//!
//! Runtime settings read from the environment (and an optional `.env` file).
//!
//! | Variable                  | Default                                                          |
//! |---------------------------|------------------------------------------------------------------|
//! | `SWAP_PRICE_FEED_URL`     | `https://interview.switcheo.com/prices.json`                     |
//! | `SWAP_ICON_BASE_URL`      | `https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens/` |
//! | `SWAP_SETTLE_DELAY_MS`    | `1500`                                                           |
//! | `SWAP_RESET_DELAY_MS`     | `2000`                                                           |
//! | `SWAP_FETCH_TIMEOUT_SECS` | `10`                                                             |
//! | `SWAP_CONFLICT_POLICY`    | `swap` (`swap` or `ignore`)                                      |

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::core::error::{AppError, Result};
use crate::swap::ConflictPolicy;

pub const DEFAULT_PRICE_FEED_URL: &str = "https://interview.switcheo.com/prices.json";
pub const DEFAULT_ICON_BASE_URL: &str =
    "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens/";

#[derive(Clone, Debug)]
pub struct SwapConfig {
    pub price_feed_url: String,
    pub icon_base_url: String,
    /// Time spent in `Loading` before the simulated swap settles.
    pub settle_delay: Duration,
    /// Time spent in `Success` before the form resets.
    pub reset_delay: Duration,
    pub fetch_timeout: Duration,
    pub conflict_policy: ConflictPolicy,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            price_feed_url: DEFAULT_PRICE_FEED_URL.to_string(),
            icon_base_url: DEFAULT_ICON_BASE_URL.to_string(),
            settle_delay: Duration::from_millis(1500),
            reset_delay: Duration::from_millis(2000),
            fetch_timeout: Duration::from_secs(10),
            conflict_policy: ConflictPolicy::default(),
        }
    }
}

impl SwapConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let price_feed_url =
            env::var("SWAP_PRICE_FEED_URL").unwrap_or(defaults.price_feed_url);
        let icon_base_url = env::var("SWAP_ICON_BASE_URL").unwrap_or(defaults.icon_base_url);

        let settle_delay = Duration::from_millis(parse_var(
            "SWAP_SETTLE_DELAY_MS",
            defaults.settle_delay.as_millis() as u64,
        )?);
        let reset_delay = Duration::from_millis(parse_var(
            "SWAP_RESET_DELAY_MS",
            defaults.reset_delay.as_millis() as u64,
        )?);
        let fetch_timeout = Duration::from_secs(parse_var(
            "SWAP_FETCH_TIMEOUT_SECS",
            defaults.fetch_timeout.as_secs(),
        )?);

        let conflict_policy = match env::var("SWAP_CONFLICT_POLICY") {
            Ok(raw) => raw.parse()?,
            Err(_) => defaults.conflict_policy,
        };

        Ok(Self {
            price_feed_url,
            icon_base_url,
            settle_delay,
            reset_delay,
            fetch_timeout,
            conflict_policy,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.price_feed_url.trim().is_empty() {
            return Err(AppError::Config("SWAP_PRICE_FEED_URL must not be empty".to_string()));
        }

        if self.icon_base_url.trim().is_empty() {
            return Err(AppError::Config("SWAP_ICON_BASE_URL must not be empty".to_string()));
        }

        if self.fetch_timeout.is_zero() {
            return Err(AppError::Config(
                "SWAP_FETCH_TIMEOUT_SECS must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{} must be a valid number, got {:?}", name, raw))),
        Err(_) => Ok(default),
    }
}
