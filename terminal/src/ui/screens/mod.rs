//! # Screen Modules
//!
//! The application has a single screen, the swap card ([`swap`]).
//!
//! ## Rendering Pattern
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
//!     // - Read from the state snapshot
//!     // - Call app.handle_* methods for actions
//! }
//! ```
//!
//! Screens receive a **cloned state snapshot**, so no lock is held while
//! drawing. User actions call `app.handle_*`, which lock internally.

pub mod swap;
