//! # Token Selection
//!
//! The from/to token pair, the picker search filter, and what happens when the
//! user picks the token already sitting on the other side.

use std::fmt;
use std::str::FromStr;

use crate::core::error::{AppError, Result};

/// Side of the form a picker was opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPickerTarget {
    From,
    To,
}

impl TokenPickerTarget {
    pub fn opposite(self) -> Self {
        match self {
            TokenPickerTarget::From => TokenPickerTarget::To,
            TokenPickerTarget::To => TokenPickerTarget::From,
        }
    }
}

/// What to do when the picked token is already selected on the opposite side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    /// Exchange the two sides.
    #[default]
    Swap,
    /// Keep the pair as it was.
    Ignore,
}

impl FromStr for ConflictPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "swap" => Ok(ConflictPolicy::Swap),
            "ignore" => Ok(ConflictPolicy::Ignore),
            other => Err(AppError::Config(format!(
                "SWAP_CONFLICT_POLICY must be 'swap' or 'ignore', got {:?}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The target side now holds the picked token.
    Selected,
    /// The picked token was on the other side; both sides were exchanged.
    Swapped,
    /// Nothing changed.
    Unchanged,
}

/// Tokens selected before the user picks anything.
pub const DEFAULT_FROM_TOKEN: &str = "ETH";
pub const DEFAULT_TO_TOKEN: &str = "USDC";

/// The two selected tokens. `from` and `to` always differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    from: String,
    to: String,
}

impl TokenPair {
    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn get(&self, target: TokenPickerTarget) -> &str {
        match target {
            TokenPickerTarget::From => &self.from,
            TokenPickerTarget::To => &self.to,
        }
    }

    pub fn select(
        &mut self,
        target: TokenPickerTarget,
        token: &str,
        policy: ConflictPolicy,
    ) -> SelectionOutcome {
        if self.get(target) == token {
            return SelectionOutcome::Unchanged;
        }

        if self.get(target.opposite()) == token {
            return match policy {
                ConflictPolicy::Swap => {
                    self.flip();
                    SelectionOutcome::Swapped
                }
                ConflictPolicy::Ignore => SelectionOutcome::Unchanged,
            };
        }

        match target {
            TokenPickerTarget::From => self.from = token.to_string(),
            TokenPickerTarget::To => self.to = token.to_string(),
        }
        SelectionOutcome::Selected
    }

    pub fn flip(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }
}

impl Default for TokenPair {
    fn default() -> Self {
        Self {
            from: DEFAULT_FROM_TOKEN.to_string(),
            to: DEFAULT_TO_TOKEN.to_string(),
        }
    }
}

impl fmt::Display for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.from, self.to)
    }
}

/// Tokens whose code contains `search`, ignoring case, in list order.
pub fn filter_tokens<'a>(tokens: &'a [String], search: &str) -> Vec<&'a str> {
    let needle = search.to_lowercase();
    tokens
        .iter()
        .filter(|token| token.to_lowercase().contains(&needle))
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> TokenPair {
        TokenPair::default()
    }

    #[test]
    fn test_select_sets_target_side() {
        let mut pair = pair();
        assert_eq!(
            pair.select(TokenPickerTarget::To, "WBTC", ConflictPolicy::Swap),
            SelectionOutcome::Selected
        );
        assert_eq!(pair.from(), "ETH");
        assert_eq!(pair.to(), "WBTC");
    }

    #[test]
    fn test_select_opposite_token_swaps() {
        let mut pair = pair();
        assert_eq!(
            pair.select(TokenPickerTarget::From, "USDC", ConflictPolicy::Swap),
            SelectionOutcome::Swapped
        );
        assert_eq!(pair.from(), "USDC");
        assert_eq!(pair.to(), "ETH");
    }

    #[test]
    fn test_select_opposite_token_ignored() {
        let mut pair = pair();
        assert_eq!(
            pair.select(TokenPickerTarget::To, "ETH", ConflictPolicy::Ignore),
            SelectionOutcome::Unchanged
        );
        assert_eq!(pair, TokenPair::default());
    }

    #[test]
    fn test_select_same_token_is_noop() {
        let mut pair = pair();
        assert_eq!(
            pair.select(TokenPickerTarget::From, "ETH", ConflictPolicy::Swap),
            SelectionOutcome::Unchanged
        );
        assert_eq!(pair.from(), "ETH");
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let tokens: Vec<String> = ["ETH", "USDC", "bNEO", "WETH", "USD"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert_eq!(filter_tokens(&tokens, "eth"), vec!["ETH", "WETH"]);
        assert_eq!(filter_tokens(&tokens, "Neo"), vec!["bNEO"]);
        assert_eq!(filter_tokens(&tokens, "usd"), vec!["USDC", "USD"]);
        assert_eq!(filter_tokens(&tokens, "").len(), 5);
        assert!(filter_tokens(&tokens, "xyz").is_empty());
    }

    #[test]
    fn test_conflict_policy_parse() {
        assert_eq!("Swap".parse::<ConflictPolicy>().unwrap(), ConflictPolicy::Swap);
        assert_eq!(" ignore ".parse::<ConflictPolicy>().unwrap(), ConflictPolicy::Ignore);
        assert!("merge".parse::<ConflictPolicy>().is_err());
    }
}
