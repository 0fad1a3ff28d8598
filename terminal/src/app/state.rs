//! # Application State Types
//!
//! The swap form, the token picker, the loaded prices and the simulated
//! balances, plus the derived values the UI shows.

use crate::core::config::SwapConfig;
use crate::swap::{
    conversion, filter_tokens, Balances, ConflictPolicy, PriceBook, SubmitStatus, TokenPair,
    TokenPickerTarget, ValidationError,
};
use crate::utils::validation::is_blank_or_zero;

/// The two inputs and their derived values.
#[derive(Debug, Clone, Default)]
pub struct SwapForm {
    pub pair: TokenPair,
    /// "You send" text, exactly as typed
    pub from_amount: String,
    /// "You receive" text, derived; empty when there is no quote
    pub to_amount: String,
    /// Balance check result for `from_amount`
    pub error: Option<ValidationError>,
}

/// Token picker popup state
#[derive(Debug, Clone)]
pub struct TokenPickerState {
    pub open: bool,
    pub target: TokenPickerTarget,
    pub search: String,
}

impl Default for TokenPickerState {
    fn default() -> Self {
        Self {
            open: false,
            target: TokenPickerTarget::From,
            search: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// Global application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Prices from the feed (empty until loaded)
    pub prices: PriceBook,
    /// True once the feed answered successfully
    pub prices_loaded: bool,
    pub balances: Balances,
    pub form: SwapForm,
    pub picker: TokenPickerState,
    pub submit_status: SubmitStatus,
    pub conflict_policy: ConflictPolicy,
    /// Toasts waiting to be shown by the UI (level, message)
    pub pending_notifications: Vec<(NotificationLevel, String)>,
}

impl AppState {
    pub fn new(config: &SwapConfig) -> Self {
        Self {
            prices: PriceBook::default(),
            prices_loaded: false,
            balances: Balances::mock(),
            form: SwapForm::default(),
            picker: TokenPickerState::default(),
            submit_status: SubmitStatus::Idle,
            conflict_policy: config.conflict_policy,
            pending_notifications: Vec::new(),
        }
    }

    /// Refresh the converted amount and the balance check.
    ///
    /// Must run after any change to the amount, the pair, the prices or the balances.
    pub fn recompute(&mut self) {
        self.form.to_amount = conversion::converted_amount(
            &self.prices,
            self.form.pair.from(),
            self.form.pair.to(),
            &self.form.from_amount,
        );
        self.form.error = self
            .balances
            .validate(&self.form.from_amount, self.form.pair.from())
            .err();
    }

    pub fn exchange_rate(&self) -> Option<f64> {
        conversion::exchange_rate(&self.prices, self.form.pair.from(), self.form.pair.to())
    }

    /// "1 ETH ≈ 1650.000000 USDC", or empty without a positive rate.
    pub fn rate_info(&self) -> String {
        shared::utils::format_rate_info(
            self.form.pair.from(),
            self.form.pair.to(),
            self.exchange_rate().unwrap_or(0.0),
        )
    }

    pub fn from_balance(&self) -> f64 {
        self.balances.of(self.form.pair.from())
    }

    pub fn to_balance(&self) -> f64 {
        self.balances.of(self.form.pair.to())
    }

    /// Whether the submit button is enabled.
    ///
    /// Also requires a quote, so a settled swap always credits a real amount.
    pub fn can_submit(&self) -> bool {
        self.form.error.is_none()
            && !is_blank_or_zero(&self.form.from_amount)
            && !self.form.to_amount.is_empty()
            && self.submit_status.is_idle()
    }

    /// Tokens shown by the picker for the current search.
    pub fn filtered_tokens(&self) -> Vec<&str> {
        filter_tokens(self.prices.tokens(), &self.picker.search)
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.pending_notifications.push((level, message.into()));
    }
}
