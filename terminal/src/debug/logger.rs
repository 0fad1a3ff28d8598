//! File-based logging initialization

use std::fs;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::{LogConfig, DEFAULT_LOG_LEVEL, LOG_FILE_NAME};

/// Initialize the logging system
///
/// Daily-rotated log file under [`LogConfig::log_dir`] written through a
/// non-blocking writer, plus a panic hook. Falls back to stderr when the
/// directory cannot be created.
pub fn init() {
    let config = LogConfig::from_env();

    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init();
        setup_panic_hook();
        return;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    if let Err(e) = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
    {
        eprintln!("Warning: Logger already initialized: {}", e);
        return;
    }

    tracing::info!(
        log_file = %config.log_file().display(),
        log_level = %config.log_level,
        "Logging initialized"
    );

    setup_panic_hook();

    // Keep the writer guard alive for the lifetime of the program
    std::mem::forget(guard);
}

/// Log panics with their location before handing over to the default hook
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(
            location = %location,
            message = %message,
            "Application panic"
        );

        default_panic(panic_info);
    }));
}
