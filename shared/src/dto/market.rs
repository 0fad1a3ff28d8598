use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the price feed.
///
/// The feed is a flat JSON array and the same currency may appear several
/// times with different dates. Entries without a usable price are kept on
/// the wire type and filtered by the consumer.
///
/// ```text
/// [
///   { "currency": "BLUR", "date": "2023-08-29T07:10:40.000Z", "price": 0.208 },
///   { "currency": "bNEO", "date": "2023-08-29T07:10:50.000Z", "price": 7.1282679 }
/// ]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceRecord {
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl PriceRecord {
    pub fn new(currency: impl Into<String>, price: f64) -> Self {
        Self {
            currency: currency.into(),
            date: None,
            price: Some(price),
        }
    }

    /// True when the record carries a finite, non-zero price.
    pub fn is_priced(&self) -> bool {
        matches!(self.price, Some(p) if p.is_finite() && p != 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_feed_entry() {
        let json = r#"{"currency":"ETH","date":"2023-08-29T07:10:52.000Z","price":1645.93}"#;
        let record: PriceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.currency, "ETH");
        assert_eq!(record.price, Some(1645.93));
        assert!(record.date.is_some());
        assert!(record.is_priced());
    }

    #[test]
    fn test_missing_or_zero_price_is_not_priced() {
        let missing: PriceRecord = serde_json::from_str(r#"{"currency":"LUNA"}"#).unwrap();
        let null: PriceRecord =
            serde_json::from_str(r#"{"currency":"LUNA","price":null}"#).unwrap();
        assert!(!missing.is_priced());
        assert!(!null.is_priced());
        assert!(!PriceRecord::new("LUNA", 0.0).is_priced());
    }
}
