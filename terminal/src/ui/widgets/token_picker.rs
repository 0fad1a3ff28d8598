//! # Token Picker Widget
//!
//! Modal popup for choosing the "from" or "to" token, with a search box.

use egui::{RichText, Vec2};

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::icons::{material, size, token_icon, Icons};

/// Render token picker popup
pub fn render_token_picker(ctx: &egui::Context, state: &AppState, app: &mut App) {
    let theme = Theme::default();
    let icons = app.icons().clone();
    let mut open = state.picker.open;
    let mut picked: Option<String> = None;

    egui::Window::new("Select a token")
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
        .default_width(380.0)
        .show(ctx, |ui| {
            let mut search = state.picker.search.clone();
            ui.horizontal(|ui| {
                ui.label(Icons::icon_color(material::SEARCH, size::SMALL, theme.dim));
                let response = ui.add(
                    egui::TextEdit::singleline(&mut search)
                        .hint_text("Search token name...")
                        .desired_width(f32::INFINITY),
                );
                if ui.memory(|m| m.focused().is_none()) {
                    response.request_focus();
                }
                if response.changed() {
                    app.handle_search_change(search.clone());
                }
            });
            ui.add_space(8.0);

            // Filter against the freshly typed text, the snapshot is a frame behind
            let tokens = crate::swap::filter_tokens(state.prices.tokens(), &search);

            egui::ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
                if tokens.is_empty() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(12.0);
                        ui.label(RichText::new("No tokens found.").color(theme.dim));
                    });
                    return;
                }

                for token in tokens {
                    let current = state.form.pair.get(state.picker.target) == token;
                    ui.horizontal(|ui| {
                        token_icon(ui, &icons, token, size::LARGE);
                        if ui
                            .selectable_label(current, RichText::new(token).strong())
                            .clicked()
                        {
                            picked = Some(token.to_string());
                        }
                    });
                }
            });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        open = false;
    }

    if let Some(token) = picked {
        app.handle_token_select(token);
    } else if !open {
        app.close_token_picker();
    }
}
