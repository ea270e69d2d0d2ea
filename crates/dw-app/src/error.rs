use dw_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] dw_config::ConfigError),

    #[error("Cache store error: {source} {location}")]
    Store {
        source: dw_db::DbError,
        location: ErrorLocation,
    },

    #[error("Remote call failed: {source} {location}")]
    Remote {
        source: dw_api::ApiError,
        location: ErrorLocation,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

impl AppError {
    /// Message for an inline alert
    pub fn user_message(&self) -> String {
        match self {
            AppError::Remote { source, .. } => source.user_message(),
            AppError::Store { .. } => "Local data is unavailable".to_string(),
            AppError::Config(_) | AppError::Logger { .. } => "Configuration problem".to_string(),
        }
    }
}

impl From<dw_db::DbError> for AppError {
    #[track_caller]
    fn from(source: dw_db::DbError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<dw_api::ApiError> for AppError {
    #[track_caller]
    fn from(source: dw_api::ApiError) -> Self {
        Self::Remote {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
