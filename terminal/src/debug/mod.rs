//! # Logging
//!
//! File-based structured logging for the swap terminal.
//!
//! - **File output**: `logs/swap-terminal.log`, rotated daily
//! - **Panic hook**: panics are logged with their location
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `swap_terminal=info,warn`)
//! - `SWAP_LOG_DIR`: Log directory (default `logs`)
//!
//! ```rust,ignore
//! // Initialize at app startup, before anything logs
//! swap_terminal::debug::init();
//! ```

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init as init_logger;

/// Initialize the logging system. Call once at startup.
pub fn init() {
    init_logger();
}
