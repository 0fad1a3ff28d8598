//! # Common Error Types
//!
//! Consolidated error handling for the swap terminal.
//!
//! ## Error Categories
//!
//! - **Feed**: Price feed communication errors (network, HTTP status, JSON decoding)
//! - **Config**: Invalid environment configuration
//! - **State**: Rejected state-machine transitions and broken form invariants
//! - **Validation**: Form input that cannot be submitted
//!
//! ## Usage Pattern
//!
//! ```rust
//! use swap_terminal::core::error::{AppError, Result};
//!
//! fn parse_delay(raw: &str) -> Result<u64> {
//!     raw.parse()
//!         .map_err(|_| AppError::Config(format!("invalid delay: {}", raw)))
//! }
//!
//! assert!(parse_delay("1500").is_ok());
//! assert!(parse_delay("soon").is_err());
//! ```

use thiserror::Error;

use crate::swap::ValidationError;

/// Application-wide error type.
///
/// # Example
///
/// ```rust
/// use swap_terminal::core::error::AppError;
///
/// let feed_err = AppError::Feed("Connection timeout".to_string());
/// let state_err = AppError::State("cannot settle from Idle".to_string());
///
/// assert_eq!(feed_err.to_string(), "Price feed error: Connection timeout");
/// assert_eq!(state_err.to_string(), "State error: cannot settle from Idle");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Price feed request failed or returned an unusable payload.
    #[error("Price feed error: {0}")]
    Feed(String),

    /// Environment configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid state transition or broken form invariant.
    #[error("State error: {0}")]
    State(String),

    /// The form input does not allow a submission.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Feed(format!("Request timed out: {}", err))
        } else {
            AppError::Feed(format!("Network error: {}", err))
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Feed(format!("Failed to parse response: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_converts() {
        let err: AppError = ValidationError::InsufficientBalance.into();
        assert_eq!(err.to_string(), "Validation error: Insufficient balance");
    }

    #[test]
    fn test_json_error_maps_to_feed() {
        let parse = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err = AppError::from(parse);
        assert!(matches!(err, AppError::Feed(_)));
        assert!(err.to_string().starts_with("Price feed error: Failed to parse response"));
    }
}
