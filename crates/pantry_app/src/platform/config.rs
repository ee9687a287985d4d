use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;
use pantry_engine::{FetchSettings, MEALDB_BASE_URL};

use super::logging::LogDestination;

const LETTER_COUNT: usize = 26;

/// Browse TheMealDB recipes from the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "pantry", version, about)]
pub struct Args {
    /// Base URL of the recipe API
    #[arg(long, env = "PANTRY_BASE_URL", default_value = MEALDB_BASE_URL)]
    pub base_url: String,

    /// Directory holding the cached full catalog
    #[arg(long, env = "PANTRY_CACHE_DIR", default_value = "./.pantry_cache")]
    pub cache_dir: PathBuf,

    /// Directory holding the saved favorites
    #[arg(long, env = "PANTRY_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,

    /// Letter lookups in flight while assembling the full catalog
    #[arg(long, default_value_t = 1)]
    pub letter_concurrency: usize,

    /// Retries after a retryable request failure
    #[arg(long, default_value_t = 2)]
    pub max_retries: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub request_timeout_secs: u64,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            base_url: self.base_url.clone(),
            request_timeout: Duration::from_secs(self.request_timeout_secs.max(1)),
            max_retries: self.max_retries,
            letter_concurrency: self.letter_concurrency.clamp(1, LETTER_COUNT),
            ..FetchSettings::default()
        }
    }
}
