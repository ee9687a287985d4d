//! Logger setup for the `pantry` binary.
//!
//! Rendered screens own stdout, so terminal logging goes to stderr and the
//! default destination is `./pantry.log`.

use std::fs::File;
use std::path::Path;

use clap::ValueEnum;
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILENAME: &str = "./pantry.log";

/// Destination for log output, chosen with `--log`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogDestination {
    /// Write to ./pantry.log in the current directory.
    File,
    /// Write to stderr.
    Terminal,
    /// Write to both.
    Both,
}

/// Installs the global logger. A log file that cannot be created is reported
/// on stderr and skipped.
pub fn initialize(destination: LogDestination, level: LevelFilter) {
    let loggers = build_loggers(destination, level, Path::new(LOG_FILENAME));
    if loggers.is_empty() {
        return;
    }
    let _ = CombinedLogger::init(loggers);
}

fn build_loggers(
    destination: LogDestination,
    level: LevelFilter,
    log_path: &Path,
) -> Vec<Box<dyn SharedLogger>> {
    let config = build_config();
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    if matches!(destination, LogDestination::Terminal | LogDestination::Both) {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    if matches!(destination, LogDestination::File | LogDestination::Both) {
        match File::create(log_path) {
            Ok(file) => loggers.push(WriteLogger::new(level, config, file)),
            Err(err) => {
                eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err)
            }
        }
    }
    loggers
}

/// HTTP client internals are silenced; pantry's own fetch logging covers them.
fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .add_filter_ignore_str("reqwest")
        .add_filter_ignore_str("hyper")
        .build()
}
