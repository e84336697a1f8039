use log::{error, info, warn};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .filter_module("hyouka", log::LevelFilter::Debug)
            .filter_module("diesel", log::LevelFilter::Warn)
            .filter_module("tokio", log::LevelFilter::Warn)
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .init();

        info!("Logging system initialized");
    });
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log database operations, flagging slow ones
    pub fn db_operation(operation: &str, table: &str, duration_ms: Option<u64>) {
        match duration_ms {
            Some(ms) if ms > 250 => {
                warn!("DB {} on {} took {}ms", operation, table, ms)
            }
            Some(ms) => info!("DB {} on {} took {}ms", operation, table, ms),
            None => info!("DB {} on {}", operation, table),
        }
    }

    /// Log an error with surrounding context
    pub fn error_with_context(err: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, err);
    }
}
