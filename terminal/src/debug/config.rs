//! Logging configuration from environment variables

use std::path::PathBuf;

pub const DEFAULT_LOG_LEVEL: &str = "swap_terminal=info,warn";
pub const LOG_FILE_NAME: &str = "swap-terminal.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Log level filter (e.g., "swap_terminal=debug,info")
    pub log_level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl LogConfig {
    /// Load configuration from `SWAP_LOG_DIR` and `RUST_LOG`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_dir: std::env::var("SWAP_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }

    /// Path of today's file before rotation suffixes are applied
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LogConfig::default();
        assert_eq!(config.log_file(), PathBuf::from("logs/swap-terminal.log"));
        assert_eq!(config.log_level, "swap_terminal=info,warn");
    }
}
