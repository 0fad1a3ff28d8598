//! # Balances
//!
//! In-memory mock balances and the insufficient-balance check.

use std::collections::HashMap;

use thiserror::Error;

use crate::utils::validation::parse_amount;

/// Starting balances for the simulated account.
pub const MOCK_BALANCES: &[(&str, f64)] = &[
    ("ETH", 10.5),
    ("USDC", 5000.0),
    ("WBTC", 0.2),
    ("USDT", 10000.0),
    ("BNB", 50.0),
    ("MATIC", 2500.0),
    ("AVAX", 300.0),
    ("SOL", 150.0),
    ("ZIL", 50000.0),
];

/// Reasons the form cannot be submitted as typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Insufficient balance")]
    InsufficientBalance,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Balances {
    amounts: HashMap<String, f64>,
}

impl Balances {
    pub fn mock() -> Self {
        Self {
            amounts: MOCK_BALANCES
                .iter()
                .map(|(currency, amount)| (currency.to_string(), *amount))
                .collect(),
        }
    }

    /// Balance of `currency`; unknown currencies hold nothing.
    pub fn of(&self, currency: &str) -> f64 {
        self.amounts.get(currency).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, currency: impl Into<String>, amount: f64) {
        self.amounts.insert(currency.into(), amount);
    }

    /// Check an amount typed for `currency`.
    ///
    /// Text that is not a positive number is not an error here; the submit
    /// button is gated on the amount separately.
    pub fn validate(&self, amount_text: &str, currency: &str) -> Result<(), ValidationError> {
        let amount = match parse_amount(amount_text) {
            Some(amount) if amount > 0.0 => amount,
            _ => return Ok(()),
        };

        if amount > self.of(currency) {
            Err(ValidationError::InsufficientBalance)
        } else {
            Ok(())
        }
    }

    /// Debit `from` and credit `to` for a settled swap.
    pub fn apply_swap(&mut self, from: &str, from_amount: f64, to: &str, to_amount: f64) {
        let debited = self.of(from) - from_amount;
        self.set(from, debited);
        let credited = self.of(to) + to_amount;
        self.set(to, credited);

        tracing::debug!(
            from = %from,
            to = %to,
            from_balance = debited,
            to_balance = credited,
            "Balances updated after simulated swap"
        );
    }
}
