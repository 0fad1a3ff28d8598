//! # Conversion
//!
//! Output amount and exchange rate derived from two feed prices. Both prices
//! are quoted in the same unit, so the ratio is all that matters.

use shared::utils::format_fixed;

use crate::swap::PriceBook;
use crate::utils::validation::{is_blank_or_zero, parse_amount};

/// Decimals shown for the converted amount and the rate.
pub const OUTPUT_DECIMALS: usize = 6;

/// Raw conversion of `from_amount` at the given prices.
///
/// Returns `None` when there is nothing to quote: empty or `"0"` input, an
/// unknown price on either side, or text that is not a number.
pub fn convert(from_amount: &str, from_price: Option<f64>, to_price: Option<f64>) -> Option<f64> {
    if is_blank_or_zero(from_amount) {
        return None;
    }
    let (from_price, to_price) = (from_price?, to_price?);
    let amount = parse_amount(from_amount)?;

    let result = amount * from_price / to_price;
    result.is_finite().then_some(result)
}

/// The "You receive" text: six decimals, or empty when there is no quote.
pub fn converted_amount(book: &PriceBook, from: &str, to: &str, from_amount: &str) -> String {
    convert(from_amount, book.price(from), book.price(to))
        .map(|value| format_fixed(value, OUTPUT_DECIMALS))
        .unwrap_or_default()
}

/// Units of `to` received for one unit of `from`.
pub fn exchange_rate(book: &PriceBook, from: &str, to: &str) -> Option<f64> {
    let rate = book.price(from)? / book.price(to)?;
    rate.is_finite().then_some(rate)
}
