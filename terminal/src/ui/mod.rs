//! # GUI Rendering Framework
//!
//! Renders the swap screen, the token picker and toasts using **egui widgets**.

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::App;
use crate::ui::widgets::notifications::NotificationManager;

/// Main render function - called every frame by egui
pub fn render(ctx: &egui::Context, app: &mut App, notifications: &mut NotificationManager) {
    // Snapshot the state and take pending toasts; the lock is released before drawing
    let (state, pending) = {
        let mut guard = app.state.write();
        let pending = std::mem::take(&mut guard.pending_notifications);
        (guard.clone(), pending)
    };
    notifications.push_all(pending);

    egui::CentralPanel::default().show(ctx, |ui| {
        screens::swap::render(ui, &state, app);
    });

    if state.picker.open {
        widgets::token_picker::render_token_picker(ctx, &state, app);
    }

    notifications.show(ctx);
}
