//! # Swap Screen
//!
//! The swap card: "You send" input, flip button, "You receive" input and the
//! submit button.

use egui::{RichText, Vec2};

use crate::app::{App, AppState};
use crate::swap::{SubmitStatus, TokenPickerTarget};
use crate::ui::theme::Theme;
use crate::ui::widgets::currency_input::{render_currency_input, CurrencyInput};
use crate::ui::widgets::icons::{material, size, Icons};
use crate::ui::widgets::layouts::{render_centered, render_panel};

const CARD_WIDTH: f32 = 440.0;
const SUBMIT_HEIGHT: f32 = 52.0;

/// Render the swap card
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();
    let icons = app.icons().clone();

    render_centered(ui, CARD_WIDTH, |ui| {
        render_panel(ui, theme.colors.card, theme.colors.border, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new("Currency Swap").strong().size(24.0));
            });
            ui.add_space(12.0);

            let send = render_currency_input(
                ui,
                &theme,
                &icons,
                CurrencyInput {
                    label: "You send",
                    amount: &state.form.from_amount,
                    token: state.form.pair.from(),
                    balance: Some(state.from_balance()),
                    read_only: false,
                    error: state.form.error.map(|e| e.to_string()),
                    rate_info: "",
                },
            );
            if let Some(text) = send.amount_changed {
                app.handle_amount_change(text);
            }
            if send.token_clicked {
                app.open_token_picker(TokenPickerTarget::From);
            }

            ui.vertical_centered(|ui| {
                let flip = egui::Button::new(Icons::icon(material::SWAP_VERT, size::MEDIUM))
                    .corner_radius(egui::CornerRadius::same(20));
                if ui.add(flip).on_hover_text("Flip tokens").clicked() {
                    app.handle_flip_click();
                }
            });

            let receive = render_currency_input(
                ui,
                &theme,
                &icons,
                CurrencyInput {
                    label: "You receive",
                    amount: &state.form.to_amount,
                    token: state.form.pair.to(),
                    balance: Some(state.to_balance()),
                    read_only: true,
                    error: None,
                    rate_info: &state.rate_info(),
                },
            );
            if receive.token_clicked {
                app.open_token_picker(TokenPickerTarget::To);
            }

            ui.add_space(12.0);
            render_submit_button(ui, state, app, &theme);
        });

        ui.add_space(8.0);
        render_feed_status(ui, state, &theme);
    });
}

fn render_submit_button(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let enabled = state.can_submit();
    let status = state.submit_status;

    let caption = match status {
        SubmitStatus::Success => format!("{} {}", material::CHECK, status.label()),
        SubmitStatus::Error => format!("{} {}", material::ERROR, status.label()),
        _ => status.label().to_string(),
    };

    let button = egui::Button::new(RichText::new(caption).strong().color(theme.normal))
        .fill(theme.submit_fill(status, enabled))
        .corner_radius(egui::CornerRadius::same(12))
        .min_size(Vec2::new(ui.available_width(), SUBMIT_HEIGHT));

    let response = ui.add_enabled(enabled, button);
    if status == SubmitStatus::Loading {
        ui.put(response.rect, egui::Spinner::new().size(size::MEDIUM));
    }
    if response.clicked() {
        app.handle_submit_click();
    }
}

fn render_feed_status(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    let text = if state.prices_loaded {
        format!("{} tokens priced", state.prices.len())
    } else if state.submit_status == SubmitStatus::Error {
        "Price feed unavailable".to_string()
    } else {
        "Loading prices...".to_string()
    };
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(text).color(theme.dim).small());
    });
}
