use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, CarouselConfig, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, DiagnosticsConfig, LoggingConfig, SearchConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub search: SearchConfig,
    pub carousel: CarouselConfig,
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for DW_CONFIG_DIR env var, else use ./.dw/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply DW_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: DW_CONFIG_DIR env var > ./.dw/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::directory("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all sections. Call after load() to catch errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.database.validate()?;
        self.logging.validate()?;
        self.search.validate()?;
        self.carousel.validate()?;
        self.diagnostics.validate()?;
        Ok(())
    }

    /// Absolute path of the cache database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Log file path, resolved against the config directory when relative.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            None => Ok(None),
            Some(file) if Path::new(file).is_absolute() => Ok(Some(PathBuf::from(file))),
            Some(file) => Ok(Some(Self::config_dir()?.join(file))),
        }
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (timeout {}s)",
            self.api.base_url, self.api.request_timeout_secs
        );
        info!("  database: {}", self.database.path);
        info!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("-")
        );
        info!(
            "  search: debounce={}ms, limit={}, recurrent={}",
            self.search.debounce_ms, self.search.result_limit, self.search.recurrent_limit
        );
        info!(
            "  carousel: distance={}, velocity={}px/s",
            self.carousel.distance_ratio, self.carousel.velocity_threshold
        );
        info!(
            "  diagnostics: connectivity timeout={}s",
            self.diagnostics.connectivity_timeout_secs
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("DW_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_parse(
            "DW_API_REQUEST_TIMEOUT_SECS",
            &mut self.api.request_timeout_secs,
        );

        // Database
        Self::apply_env_string("DW_DATABASE_PATH", &mut self.database.path);

        // Logging
        Self::apply_env_parse("DW_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("DW_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("DW_LOG_FILE", &mut self.logging.file);

        // Search
        Self::apply_env_parse("DW_SEARCH_DEBOUNCE_MS", &mut self.search.debounce_ms);
        Self::apply_env_parse("DW_SEARCH_RESULT_LIMIT", &mut self.search.result_limit);
        Self::apply_env_parse(
            "DW_SEARCH_RECURRENT_LIMIT",
            &mut self.search.recurrent_limit,
        );

        // Carousel
        Self::apply_env_parse(
            "DW_CAROUSEL_DISTANCE_RATIO",
            &mut self.carousel.distance_ratio,
        );
        Self::apply_env_parse(
            "DW_CAROUSEL_VELOCITY_THRESHOLD",
            &mut self.carousel.velocity_threshold,
        );

        // Diagnostics
        Self::apply_env_parse(
            "DW_DIAGNOSTICS_TIMEOUT_SECS",
            &mut self.diagnostics.connectivity_timeout_secs,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
