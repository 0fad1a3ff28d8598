//! # Notifications Widget
//!
//! Toast notifications using egui-notify for swap results and feed failures.

use egui_notify::Toasts;

use crate::app::NotificationLevel;

/// Notification manager for the application
#[derive(Default)]
pub struct NotificationManager {
    pub toasts: Toasts,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: String) {
        self.toasts.success(message);
    }

    pub fn error(&mut self, message: String) {
        self.toasts.error(message);
    }

    /// Queue notifications posted by the state since the last frame
    pub fn push_all(&mut self, pending: Vec<(NotificationLevel, String)>) {
        for (level, message) in pending {
            match level {
                NotificationLevel::Success => self.success(message),
                NotificationLevel::Error => self.error(message),
            }
        }
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
