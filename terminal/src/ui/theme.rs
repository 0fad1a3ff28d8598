//! # GUI Theme
//!
//! Dark theme for the swap card: charcoal panels, blue call to action and
//! green/red status fills.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};

use crate::swap::SubmitStatus;

/// Swap card color palette
#[derive(Debug, Clone)]
pub struct SwapColors {
    /// Window background
    pub background: Color32,
    /// Card and modal fill
    pub card: Color32,
    /// Input box fill
    pub input: Color32,
    /// Token button fill
    pub button: Color32,
    pub button_hover: Color32,
    pub text: Color32,
    /// Labels, balances and rate info
    pub gray_secondary: Color32,
    pub border: Color32,
    /// Call to action (enabled submit)
    pub blue_primary: Color32,
    pub green_success: Color32,
    pub red_error: Color32,
    /// Disabled submit
    pub gray_disabled: Color32,
}

impl Default for SwapColors {
    fn default() -> Self {
        SwapColors {
            background: Color32::from_rgb(18, 18, 18),      // #121212
            card: Color32::from_rgb(30, 30, 30),            // #1E1E1E
            input: Color32::from_rgb(42, 42, 42),           // #2A2A2A
            button: Color32::from_rgb(31, 41, 55),          // gray-800
            button_hover: Color32::from_rgb(55, 65, 81),    // gray-700
            text: Color32::from_rgb(255, 255, 255),
            gray_secondary: Color32::from_rgb(156, 163, 175), // gray-400
            border: Color32::from_rgb(55, 65, 81),
            blue_primary: Color32::from_rgb(37, 99, 235),   // blue-600
            green_success: Color32::from_rgb(22, 163, 74),  // green-600
            red_error: Color32::from_rgb(220, 38, 38),      // red-600
            gray_disabled: Color32::from_rgb(75, 85, 99),   // gray-600
        }
    }
}

/// Application theme
pub struct Theme {
    pub colors: SwapColors,
    pub normal: Color32,
    pub dim: Color32,
    pub error: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = SwapColors::default();
        Theme {
            normal: colors.text,
            dim: colors.gray_secondary,
            error: colors.red_error,
            colors,
        }
    }
}

impl Theme {
    /// Fill of the submit button for a status.
    ///
    /// Success and error override the disabled gray.
    pub fn submit_fill(&self, status: SubmitStatus, enabled: bool) -> Color32 {
        match status {
            SubmitStatus::Success => self.colors.green_success,
            SubmitStatus::Error => self.colors.red_error,
            _ if enabled => self.colors.blue_primary,
            _ => self.colors.gray_disabled,
        }
    }

    pub fn visuals(&self) -> Visuals {
        let colors = &self.colors;
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(colors.text);
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.card;
        visuals.window_stroke = Stroke::new(1.0, colors.border);
        visuals.faint_bg_color = colors.input;
        visuals.extreme_bg_color = colors.input;

        visuals.widgets.noninteractive.bg_fill = colors.card;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.text);

        visuals.widgets.inactive.bg_fill = colors.button;
        visuals.widgets.inactive.weak_bg_fill = colors.button;

        visuals.widgets.hovered.bg_fill = colors.button_hover;
        visuals.widgets.hovered.weak_bg_fill = colors.button_hover;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, colors.border);

        visuals.widgets.active.bg_fill = colors.button_hover;
        visuals.widgets.active.weak_bg_fill = colors.button_hover;

        visuals.selection.bg_fill = colors.blue_primary;
        visuals.selection.stroke = Stroke::new(2.0, colors.blue_primary);
        visuals.hyperlink_color = colors.blue_primary;

        visuals
    }

    /// Apply the theme to an egui context
    ///
    /// Uses `style_mut_of`, which is the safe way to modify styles in egui 0.33.
    pub fn apply(ctx: &Context) {
        let visuals = Theme::default().visuals();

        for theme in [EguiTheme::Dark, EguiTheme::Light] {
            ctx.style_mut_of(theme, |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
                style.spacing.button_padding = egui::Vec2::new(12.0, 6.0);
                style.spacing.window_margin = egui::Margin::same(16);
            });
        }

        tracing::debug!("Applied swap theme");
    }
}
