//! # Swap Form Logic
//!
//! Everything the form derives from its inputs, with no UI or I/O:
//!
//! - **[`price_book`]**: currency → price map and selectable token list
//! - **[`conversion`]**: output amount and exchange rate
//! - **[`balance`]**: mock balances and the insufficient-balance check
//! - **[`submit`]**: idle → loading → success/error state machine
//! - **[`selector`]**: token pair, picker search, duplicate handling

pub mod balance;
pub mod conversion;
pub mod price_book;
pub mod selector;
pub mod submit;

pub use balance::{Balances, ValidationError, MOCK_BALANCES};
pub use conversion::{convert, converted_amount, exchange_rate};
pub use price_book::PriceBook;
pub use selector::{filter_tokens, ConflictPolicy, SelectionOutcome, TokenPair, TokenPickerTarget};
pub use submit::{SubmitEvent, SubmitStatus};
