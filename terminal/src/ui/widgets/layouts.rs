//! # Layout Components
//!
//! Reusable layout patterns for the swap card and its modal.

use egui::{Color32, CornerRadius, Frame, Margin, Stroke};

/// Render content horizontally centered with a fixed maximum width
pub fn render_centered<F>(ui: &mut egui::Ui, max_width: f32, content: F)
where
    F: FnOnce(&mut egui::Ui),
{
    ui.vertical_centered(|ui| {
        let top = ((ui.available_height() - 480.0) / 2.0).max(16.0);
        ui.add_space(top);
        ui.set_max_width(max_width);
        content(ui);
    });
}

/// Render a rounded panel
pub fn render_panel<F>(ui: &mut egui::Ui, fill: Color32, border: Color32, content: F)
where
    F: FnOnce(&mut egui::Ui),
{
    Frame::new()
        .fill(fill)
        .stroke(Stroke::new(1.0, border))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::same(16))
        .show(ui, content);
}
