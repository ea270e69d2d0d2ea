mod api_config;
mod carousel_config;
mod config;
mod database_config;
mod diagnostics_config;
mod error;
mod log_level;
mod logging_config;
mod search_config;

pub use api_config::ApiConfig;
pub use carousel_config::CarouselConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use diagnostics_config::DiagnosticsConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use search_config::SearchConfig;

pub const CONFIG_DIR_ENV: &str = "DW_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".dw";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

const DEFAULT_DATABASE_FILENAME: &str = "cache.db";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

#[cfg(test)]
mod tests;
