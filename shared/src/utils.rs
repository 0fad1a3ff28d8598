//! # Shared Utility Functions
//!
//! Display formatting used by the swap form.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_fixed, format_rate_info};
//!
//! assert_eq!(format_fixed(1.5, 6), "1.500000");
//! assert_eq!(format_rate_info("ETH", "USDC", 1650.0), "1 ETH ≈ 1650.000000 USDC");
//! ```

/// Format a number with a fixed count of decimals.
///
/// Non-finite values render as an empty string so they never reach an input field.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_fixed;
///
/// assert_eq!(format_fixed(2.0 / 3.0, 6), "0.666667");
/// assert_eq!(format_fixed(f64::NAN, 6), "");
/// ```
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return String::new();
    }
    format!("{:.*}", decimals, value)
}

/// Balance as shown next to an input ("Balance: 10.50").
pub fn format_balance(value: f64) -> String {
    format_fixed(value, 2)
}

/// Exchange rate line shown under the receive input.
///
/// Returns an empty string when the rate is not positive.
pub fn format_rate_info(from: &str, to: &str, rate: f64) -> String {
    if !(rate.is_finite() && rate > 0.0) {
        return String::new();
    }
    format!("1 {} ≈ {} {}", from, format_fixed(rate, 6), to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fixed_rounds() {
        assert_eq!(format_fixed(0.1234567, 6), "0.123457");
        assert_eq!(format_fixed(10.0, 2), "10.00");
    }

    #[test]
    fn test_format_balance() {
        assert_eq!(format_balance(10.5), "10.50");
        assert_eq!(format_balance(0.0), "0.00");
    }

    #[test]
    fn test_rate_info_hidden_when_not_positive() {
        assert_eq!(format_rate_info("ETH", "USDC", 0.0), "");
        assert_eq!(format_rate_info("ETH", "USDC", f64::INFINITY), "");
        assert_eq!(format_rate_info("ETH", "USDC", 2.5), "1 ETH ≈ 2.500000 USDC");
    }
}
