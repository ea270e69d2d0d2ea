use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid currency: {value} {location}")]
    InvalidCurrency {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid action: {value} {location}")]
    InvalidAction {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid onboarding status: {value} {location}")]
    InvalidOnboardingStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid message role: {value} {location}")]
    InvalidMessageRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Missing exchange rate {from} -> {to} {location}")]
    MissingRate {
        from: String,
        to: String,
        location: ErrorLocation,
    },

    #[error("UUID parse error: {source} {location}")]
    Uuid {
        source: uuid::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
