//! # Token Icons
//!
//! Maps currency codes to icon URLs. Icons are SVGs named after the code.

use crate::core::config::SwapConfig;

/// Shown when a token has no icon or the icon fails to load.
pub const FALLBACK_ICON_URL: &str = "https://placehold.co/32x32/2a2a2a/ffffff/png?text=?";

#[derive(Debug, Clone)]
pub struct IconResolver {
    base_url: String,
}

impl IconResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    pub fn from_config(config: &SwapConfig) -> Self {
        Self::new(config.icon_base_url.clone())
    }

    pub fn icon_url(&self, currency: &str) -> String {
        format!("{}{}.svg", self.base_url, currency)
    }

    pub fn fallback_url(&self) -> &'static str {
        FALLBACK_ICON_URL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_url() {
        let icons = IconResolver::from_config(&SwapConfig::default());
        assert_eq!(
            icons.icon_url("ETH"),
            "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens/ETH.svg"
        );
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let icons = IconResolver::new("http://localhost/icons");
        assert_eq!(icons.icon_url("bNEO"), "http://localhost/icons/bNEO.svg");
    }
}
