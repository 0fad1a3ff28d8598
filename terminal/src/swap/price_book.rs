//! # Price Book
//!
//! Currency → price lookup built once from the feed, plus the ordered list of
//! selectable tokens.

use std::collections::HashMap;

use shared::dto::market::PriceRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceBook {
    prices: HashMap<String, f64>,
    tokens: Vec<String>,
}

impl PriceBook {
    /// Build from raw feed records.
    ///
    /// Records without a usable price are dropped. When a currency appears more
    /// than once the later price wins, while the token keeps the position of
    /// its first appearance.
    pub fn from_records(records: &[PriceRecord]) -> Self {
        let mut book = Self::default();

        for record in records.iter().filter(|r| r.is_priced()) {
            let Some(price) = record.price else { continue };
            if book.prices.insert(record.currency.clone(), price).is_none() {
                book.tokens.push(record.currency.clone());
            }
        }

        book
    }

    pub fn price(&self, currency: &str) -> Option<f64> {
        self.prices.get(currency).copied()
    }

    /// Selectable tokens in feed order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unpriced(currency: &str) -> PriceRecord {
        PriceRecord {
            currency: currency.to_string(),
            date: None,
            price: None,
        }
    }

    #[test]
    fn test_drops_records_without_price() {
        let book = PriceBook::from_records(&[
            PriceRecord::new("ETH", 1645.9),
            unpriced("LUNA"),
            PriceRecord::new("ZERO", 0.0),
        ]);

        assert_eq!(book.tokens(), &["ETH".to_string()]);
        assert_eq!(book.price("LUNA"), None);
        assert_eq!(book.price("ZERO"), None);
    }

    #[test]
    fn test_duplicate_currency_keeps_first_position_and_last_price() {
        let book = PriceBook::from_records(&[
            PriceRecord::new("USDC", 0.99),
            PriceRecord::new("ETH", 1600.0),
            PriceRecord::new("USDC", 1.0),
        ]);

        assert_eq!(book.tokens(), &["USDC".to_string(), "ETH".to_string()]);
        assert_eq!(book.price("USDC"), Some(1.0));
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_empty_book() {
        let book = PriceBook::default();
        assert!(book.is_empty());
        assert_eq!(book.price("ETH"), None);
    }
}
