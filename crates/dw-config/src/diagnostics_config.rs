use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

pub const MIN_CONNECTIVITY_TIMEOUT_SECS: u64 = 1;
pub const MAX_CONNECTIVITY_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECTIVITY_TIMEOUT_SECS: u64 = 3;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    pub connectivity_timeout_secs: u64,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            connectivity_timeout_secs: DEFAULT_CONNECTIVITY_TIMEOUT_SECS,
        }
    }
}

impl DiagnosticsConfig {
    pub fn connectivity_timeout(&self) -> Duration {
        Duration::from_secs(self.connectivity_timeout_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.connectivity_timeout_secs < MIN_CONNECTIVITY_TIMEOUT_SECS
            || self.connectivity_timeout_secs > MAX_CONNECTIVITY_TIMEOUT_SECS
        {
            return Err(ConfigError::invalid("diagnostics", format!(
                "diagnostics.connectivity_timeout_secs must be {}-{}, got {}",
                MIN_CONNECTIVITY_TIMEOUT_SECS,
                MAX_CONNECTIVITY_TIMEOUT_SECS,
                self.connectivity_timeout_secs
            )));
        }
        Ok(())
    }
}
