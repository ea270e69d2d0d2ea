use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

// Search constraints
pub const MAX_DEBOUNCE_MS: u64 = 5000;
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

pub const MIN_RESULT_LIMIT: u32 = 1;
pub const MAX_RESULT_LIMIT: u32 = 100;
pub const DEFAULT_RESULT_LIMIT: u32 = 20;

pub const MIN_RECURRENT_LIMIT: usize = 1;
pub const MAX_RECURRENT_LIMIT: usize = 50;
pub const DEFAULT_RECURRENT_LIMIT: usize = 10;

/// Contact search tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before a query runs
    pub debounce_ms: u64,
    /// Page size requested from the directory search
    pub result_limit: u32,
    /// Maximum number of recurrent contacts shown
    pub recurrent_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            result_limit: DEFAULT_RESULT_LIMIT,
            recurrent_limit: DEFAULT_RECURRENT_LIMIT,
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(ConfigError::invalid("search", format!(
                "search.debounce_ms must be 0-{}, got {}",
                MAX_DEBOUNCE_MS, self.debounce_ms
            )));
        }

        if self.result_limit < MIN_RESULT_LIMIT || self.result_limit > MAX_RESULT_LIMIT {
            return Err(ConfigError::invalid("search", format!(
                "search.result_limit must be {}-{}, got {}",
                MIN_RESULT_LIMIT, MAX_RESULT_LIMIT, self.result_limit
            )));
        }

        if self.recurrent_limit < MIN_RECURRENT_LIMIT
            || self.recurrent_limit > MAX_RECURRENT_LIMIT
        {
            return Err(ConfigError::invalid("search", format!(
                "search.recurrent_limit must be {}-{}, got {}",
                MIN_RECURRENT_LIMIT, MAX_RECURRENT_LIMIT, self.recurrent_limit
            )));
        }

        Ok(())
    }
}
