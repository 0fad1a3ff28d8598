//! Global Tokio runtime
//!
//! egui drives the main thread, while reqwest and the swap timers need a
//! Tokio context. Enter this runtime once at startup so `tokio::spawn` works
//! from UI callbacks:
//!
//! ```rust,ignore
//! use swap_terminal::utils::runtime::TOKIO_RT;
//!
//! let _guard = TOKIO_RT.enter();
//! app.load_prices();
//! ```

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

/// Process-wide multi-threaded runtime, created on first use.
pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for background tasks")
});
