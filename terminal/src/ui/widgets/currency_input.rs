//! # Currency Input Widget
//!
//! One side of the swap card: label and balance, amount field, token button,
//! and a footer line that shows either the balance error or the rate.

use egui::{RichText, TextEdit, Vec2};

use crate::services::icons::IconResolver;
use crate::ui::theme::Theme;
use crate::ui::widgets::icons::{material, size, token_icon};
use crate::ui::widgets::layouts::render_panel;

pub struct CurrencyInput<'a> {
    pub label: &'a str,
    pub amount: &'a str,
    pub token: &'a str,
    pub balance: Option<f64>,
    pub read_only: bool,
    pub error: Option<String>,
    pub rate_info: &'a str,
}

/// What the user did with the input this frame
#[derive(Debug, Default)]
pub struct CurrencyInputOutput {
    /// New text, not yet validated
    pub amount_changed: Option<String>,
    pub token_clicked: bool,
}

pub fn render_currency_input(
    ui: &mut egui::Ui,
    theme: &Theme,
    icons: &IconResolver,
    input: CurrencyInput<'_>,
) -> CurrencyInputOutput {
    let mut output = CurrencyInputOutput::default();
    let border = if input.error.is_some() {
        theme.error
    } else {
        theme.colors.border
    };

    render_panel(ui, theme.colors.input, border, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(input.label).color(theme.dim).small());
            if let Some(balance) = input.balance {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!(
                            "Balance: {}",
                            shared::utils::format_balance(balance)
                        ))
                        .color(theme.dim)
                        .small(),
                    );
                });
            }
        });

        ui.horizontal(|ui| {
            let mut text = input.amount.to_string();
            let field_width = (ui.available_width() - 140.0).max(80.0);
            let response = ui.add_sized(
                Vec2::new(field_width, 36.0),
                TextEdit::singleline(&mut text)
                    .hint_text("0.00")
                    .font(egui::TextStyle::Heading)
                    .frame(false)
                    .interactive(!input.read_only),
            );
            if response.changed() && !input.read_only {
                output.amount_changed = Some(text);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let caption = format!("{} {}", input.token, material::EXPAND_MORE);
                let button = egui::Button::new(RichText::new(caption).strong())
                    .corner_radius(egui::CornerRadius::same(16));
                if ui.add(button).clicked() {
                    output.token_clicked = true;
                }
                token_icon(ui, icons, input.token, size::MEDIUM);
            });
        });

        // Footer keeps its height even when empty so the card does not jump
        let footer = match &input.error {
            Some(error) => RichText::new(error.as_str()).color(theme.error),
            None => RichText::new(input.rate_info).color(theme.dim),
        };
        ui.add_sized(Vec2::new(ui.available_width(), 14.0), egui::Label::new(footer.small()));
    });

    output
}
