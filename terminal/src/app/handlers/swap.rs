//! # Swap Handlers
//!
//! Handlers for the form: amount edits, token picker, flip and submit.
//! Every handler leaves the derived values recomputed.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::app::events::SwapTicket;
use crate::app::state::AppState;
use crate::core::error::{AppError, Result};
use crate::swap::{SelectionOutcome, SubmitEvent, TokenPickerTarget};
use crate::utils::validation::{is_blank_or_zero, parse_amount, validate_amount_input};

/// Apply an edit of the "You send" field.
///
/// Returns `false` when the text was rejected and the field kept its value.
pub(crate) fn handle_amount_change(state: Arc<RwLock<AppState>>, text: String) -> bool {
    let validation = validate_amount_input(&text);
    if !validation.is_valid {
        tracing::trace!(input = %text, reason = ?validation.error, "Amount edit rejected");
        return false;
    }

    let mut state = state.write();
    state.form.from_amount = text;
    state.recompute();
    true
}

/// Open token picker popup
pub(crate) fn open_token_picker(state: Arc<RwLock<AppState>>, target: TokenPickerTarget) {
    let mut state = state.write();
    state.picker.open = true;
    state.picker.target = target;
    state.picker.search.clear();
}

pub(crate) fn close_token_picker(state: Arc<RwLock<AppState>>) {
    state.write().picker.open = false;
}

pub(crate) fn handle_search_change(state: Arc<RwLock<AppState>>, search: String) {
    state.write().picker.search = search;
}

/// Handle token selection from picker. The picker closes whatever the outcome.
pub(crate) fn handle_token_select(state: Arc<RwLock<AppState>>, token: &str) -> SelectionOutcome {
    let mut state = state.write();
    let target = state.picker.target;
    let policy = state.conflict_policy;

    let outcome = state.form.pair.select(target, token, policy);
    state.picker.open = false;
    if outcome != SelectionOutcome::Unchanged {
        state.recompute();
    }

    tracing::info!(
        target = ?target,
        token = %token,
        outcome = ?outcome,
        pair = %state.form.pair,
        "Token selected"
    );
    outcome
}

/// Exchange the two tokens and carry the received amount over to the send side.
pub(crate) fn handle_flip(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.form.pair.flip();
    state.form.from_amount = std::mem::take(&mut state.form.to_amount);
    state.recompute();
}

/// Validate the form and move the status to `Loading`.
///
/// Returns the amounts to settle; the caller schedules the timers.
pub(crate) fn handle_submit(state: Arc<RwLock<AppState>>) -> Result<SwapTicket> {
    let mut state = state.write();

    if let Some(err) = state.form.error {
        return Err(AppError::Validation(err));
    }
    if is_blank_or_zero(&state.form.from_amount) {
        return Err(AppError::State("nothing to swap".to_string()));
    }

    let from_amount = parse_amount(&state.form.from_amount)
        .ok_or_else(|| AppError::State(format!("unparseable amount {:?}", state.form.from_amount)))?;
    let to_amount = parse_amount(&state.form.to_amount)
        .ok_or_else(|| AppError::State("no quote for the selected pair".to_string()))?;

    state.submit_status = state.submit_status.transition(SubmitEvent::Begin)?;

    Ok(SwapTicket {
        from: state.form.pair.from().to_string(),
        to: state.form.pair.to().to_string(),
        from_amount,
        to_amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SwapConfig;
    use crate::swap::{ConflictPolicy, PriceBook, SubmitStatus, ValidationError};
    use shared::dto::market::PriceRecord;

    fn state() -> Arc<RwLock<AppState>> {
        let mut state = AppState::new(&SwapConfig::default());
        state.prices = PriceBook::from_records(&[
            PriceRecord::new("ETH", 1600.0),
            PriceRecord::new("USDC", 1.0),
            PriceRecord::new("WBTC", 32000.0),
        ]);
        state.prices_loaded = true;
        Arc::new(RwLock::new(state))
    }

    #[test]
    fn test_amount_change_accepts_and_rejects() {
        let state = state();
        assert!(handle_amount_change(state.clone(), "1.5".to_string()));
        assert_eq!(state.read().form.to_amount, "2400.000000");

        assert!(!handle_amount_change(state.clone(), "-2".to_string()));
        assert!(!handle_amount_change(state.clone(), "abc".to_string()));
        assert_eq!(state.read().form.from_amount, "1.5");

        assert!(handle_amount_change(state.clone(), String::new()));
        assert_eq!(state.read().form.to_amount, "");
    }

    #[test]
    fn test_open_picker_clears_search() {
        let state = state();
        handle_search_change(state.clone(), "btc".to_string());
        open_token_picker(state.clone(), TokenPickerTarget::To);

        let state = state.read();
        assert!(state.picker.open);
        assert_eq!(state.picker.target, TokenPickerTarget::To);
        assert!(state.picker.search.is_empty());
    }

    #[test]
    fn test_search_filters_picker_list() {
        let state = state();
        open_token_picker(state.clone(), TokenPickerTarget::To);
        handle_search_change(state.clone(), "bt".to_string());
        assert_eq!(state.read().filtered_tokens(), vec!["WBTC"]);
    }

    #[test]
    fn test_token_select_recomputes_and_closes() {
        let state = state();
        handle_amount_change(state.clone(), "2".to_string());
        open_token_picker(state.clone(), TokenPickerTarget::To);

        let outcome = handle_token_select(state.clone(), "WBTC");
        assert_eq!(outcome, SelectionOutcome::Selected);

        let state = state.read();
        assert!(!state.picker.open);
        assert_eq!(state.form.pair.to(), "WBTC");
        assert_eq!(state.form.to_amount, "0.100000");
    }

    #[test]
    fn test_token_select_conflict_swaps_by_default() {
        let state = state();
        open_token_picker(state.clone(), TokenPickerTarget::From);
        assert_eq!(handle_token_select(state.clone(), "USDC"), SelectionOutcome::Swapped);

        let state = state.read();
        assert_eq!(state.form.pair.from(), "USDC");
        assert_eq!(state.form.pair.to(), "ETH");
    }

    #[test]
    fn test_token_select_conflict_ignored_when_configured() {
        let state = state();
        state.write().conflict_policy = ConflictPolicy::Ignore;
        open_token_picker(state.clone(), TokenPickerTarget::To);
        assert_eq!(handle_token_select(state.clone(), "ETH"), SelectionOutcome::Unchanged);

        let state = state.read();
        assert!(!state.picker.open);
        assert_eq!(state.form.pair.from(), "ETH");
        assert_eq!(state.form.pair.to(), "USDC");
    }

    #[test]
    fn test_flip_moves_received_amount() {
        let state = state();
        handle_amount_change(state.clone(), "2".to_string());
        handle_flip(state.clone());

        let state = state.read();
        assert_eq!(state.form.pair.from(), "USDC");
        assert_eq!(state.form.pair.to(), "ETH");
        assert_eq!(state.form.from_amount, "3200.000000");
        assert_eq!(state.form.to_amount, "2.000000");
        assert_eq!(state.form.error, None);
    }

    #[test]
    fn test_flip_without_quote_clears_amount_and_error() {
        let state = state();
        handle_amount_change(state.clone(), "11".to_string());
        // SOL has no price, so nothing is received
        open_token_picker(state.clone(), TokenPickerTarget::To);
        handle_token_select(state.clone(), "SOL");
        {
            let state = state.read();
            assert!(state.form.to_amount.is_empty());
            assert_eq!(state.form.error, Some(ValidationError::InsufficientBalance));
        }

        handle_flip(state.clone());

        let state = state.read();
        assert_eq!(state.form.pair.from(), "SOL");
        assert_eq!(state.form.pair.to(), "ETH");
        assert!(state.form.from_amount.is_empty());
        assert!(state.form.to_amount.is_empty());
        assert_eq!(state.form.error, None);
        assert!(!state.can_submit());
    }

    #[test]
    fn test_submit_moves_to_loading() {
        let state = state();
        handle_amount_change(state.clone(), "2".to_string());

        let ticket = handle_submit(state.clone()).unwrap();
        assert_eq!(
            ticket,
            SwapTicket {
                from: "ETH".to_string(),
                to: "USDC".to_string(),
                from_amount: 2.0,
                to_amount: 3200.0,
            }
        );
        assert_eq!(state.read().submit_status, SubmitStatus::Loading);

        // A second click while loading is refused
        assert!(matches!(handle_submit(state.clone()), Err(AppError::State(_))));
    }

    #[test]
    fn test_submit_refused_on_insufficient_balance() {
        let state = state();
        handle_amount_change(state.clone(), "100".to_string());

        match handle_submit(state.clone()) {
            Err(AppError::Validation(ValidationError::InsufficientBalance)) => {}
            other => panic!("expected insufficient balance, got {:?}", other),
        }
        assert_eq!(state.read().submit_status, SubmitStatus::Idle);
    }

    #[test]
    fn test_submit_refused_without_amount() {
        let state = state();
        assert!(handle_submit(state.clone()).is_err());
        handle_amount_change(state.clone(), "0".to_string());
        assert!(handle_submit(state.clone()).is_err());
        assert_eq!(state.read().submit_status, SubmitStatus::Idle);
    }
}
