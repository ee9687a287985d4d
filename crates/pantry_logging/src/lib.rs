#![deny(missing_docs)]
//! Logging macros for the pantry crates.
//!
//! `pantry_core` logs dropped stale responses and favorite changes,
//! `pantry_engine` logs fetch retries and cache misses, and the binary picks
//! the backend. Everything goes through the `log` facade, so library crates
//! never choose where output lands.

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! pantry_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! pantry_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! pantry_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! pantry_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! pantry_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Installs a stderr logger for test binaries, at debug level so stale-token
/// and retry messages show up in failing test output.
///
/// Later calls, or calls after another logger was installed, do nothing.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

    let config = ConfigBuilder::new()
        .add_filter_ignore_str("hyper")
        .add_filter_ignore_str("reqwest")
        .build();
    let _ = TermLogger::init(
        log::LevelFilter::Debug,
        config,
        TerminalMode::Stderr,
        ColorChoice::Never,
    );
}
