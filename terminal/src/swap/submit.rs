//! # Submit State Machine
//!
//! ```text
//!            Begin             Settle              Reset
//!   Idle ───────────▶ Loading ────────▶ Success ─────────▶ Idle
//!     │
//!     └── FetchFailed ──▶ Error   (terminal, from any state)
//! ```
//!
//! Timed transitions (`Settle`, `Reset`) are driven by background timers in
//! [`crate::app`]; this module only decides which transitions are legal.

use crate::core::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitEvent {
    /// User confirmed a valid form.
    Begin,
    /// Simulated swap finished.
    Settle,
    /// Success banner elapsed.
    Reset,
    /// The price list could not be loaded.
    FetchFailed,
}

impl SubmitStatus {
    pub fn transition(self, event: SubmitEvent) -> Result<SubmitStatus> {
        use SubmitEvent::*;
        use SubmitStatus::*;

        match (self, event) {
            (_, FetchFailed) => Ok(Error),
            (Idle, Begin) => Ok(Loading),
            (Loading, Settle) => Ok(Success),
            (Success, Reset) => Ok(Idle),
            (status, event) => Err(AppError::State(format!(
                "cannot apply {:?} while {:?}",
                event, status
            ))),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, SubmitStatus::Idle)
    }

    /// Submit button caption. `Loading` renders a spinner instead of text.
    pub fn label(&self) -> &'static str {
        match self {
            SubmitStatus::Idle => "Confirm Swap",
            SubmitStatus::Loading => "",
            SubmitStatus::Success => "Swap Successful!",
            SubmitStatus::Error => "Error fetching prices",
        }
    }
}
