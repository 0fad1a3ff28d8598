//! # Icons Helper Module
//!
//! Material Symbols glyphs for the swap card, plus token logos loaded by URL.

use egui::{Color32, Response, RichText, SizeHint, Ui, Vec2};

use crate::services::icons::IconResolver;

/// Icon size constants
pub mod size {
    pub const SMALL: f32 = 16.0;
    pub const MEDIUM: f32 = 24.0;
    pub const LARGE: f32 = 32.0;
}

/// Material Symbols codepoints
pub mod material {
    /// Search icon
    pub const SEARCH: &str = "\u{e8b6}"; // search
    /// Swap vertical icon (flip button)
    pub const SWAP_VERT: &str = "\u{e8d5}"; // swap_vert
    /// Dropdown caret
    pub const EXPAND_MORE: &str = "\u{e5cf}"; // expand_more
    pub const CHECK: &str = "\u{e5ca}"; // check
    pub const ERROR: &str = "\u{e000}"; // error
}

pub struct Icons;

impl Icons {
    pub fn icon(icon: &str, size: f32) -> RichText {
        RichText::new(icon).size(size)
    }

    pub fn icon_color(icon: &str, size: f32, color: Color32) -> RichText {
        RichText::new(icon).size(size).color(color)
    }
}

/// Register the Material Symbols font. Call once before the first frame.
pub fn initialize_material_icons(ctx: &egui::Context) {
    egui_material_icons::initialize(ctx);
}

/// Image URI for a token logo, or the placeholder once the logo failed to load.
pub fn token_icon_uri(ctx: &egui::Context, icons: &IconResolver, currency: &str) -> String {
    let uri = icons.icon_url(currency);
    match ctx.try_load_image(&uri, SizeHint::default()) {
        Err(e) => {
            tracing::trace!(currency = %currency, error = %e, "Token icon unavailable");
            icons.fallback_url().to_string()
        }
        Ok(_) => uri,
    }
}

/// Render a square token logo
pub fn token_icon(ui: &mut Ui, icons: &IconResolver, currency: &str, side: f32) -> Response {
    let uri = token_icon_uri(ui.ctx(), icons, currency);
    ui.add(egui::Image::new(uri).fit_to_exact_size(Vec2::splat(side)))
}
