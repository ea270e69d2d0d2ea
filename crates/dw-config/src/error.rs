use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    /// A value in one `config.toml` section is out of range or malformed
    #[error("[{section}] {message} {location}")]
    Invalid {
        section: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Config directory unavailable: {message} {location}")]
    Directory {
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn invalid(section: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            section,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn directory(message: impl Into<String>) -> Self {
        Self::Directory {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn api(message: impl Into<String>) -> Self {
        Self::invalid("api", message)
    }

    #[track_caller]
    pub fn database(message: impl Into<String>) -> Self {
        Self::invalid("database", message)
    }

    #[track_caller]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::invalid("logging", message)
    }

    /// Section name for `Invalid`, used by callers that report which block to fix
    pub fn section(&self) -> Option<&'static str> {
        match self {
            Self::Invalid { section, .. } => Some(section),
            _ => None,
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
