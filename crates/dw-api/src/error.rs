use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors raised by the external collaborators
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (status: {status}, code: {code}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid URL: {message} {location}")]
    Url {
        message: String,
        location: ErrorLocation,
    },

    #[error("Identity provider error: {message} {location}")]
    Identity {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not signed in {location}")]
    Unauthenticated { location: ErrorLocation },
}

impl ApiError {
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ApiError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ApiError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn api_error(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::Api {
            status,
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn url(message: impl Into<String>) -> Self {
        ApiError::Url {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn identity(message: impl Into<String>) -> Self {
        ApiError::Identity {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthenticated() -> Self {
        ApiError::Unauthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Api { status: 404, .. })
    }

    /// Message suitable for an inline alert: the server's own text when it sent one.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Api { message, .. } | ApiError::Identity { message, .. } => message.clone(),
            ApiError::Unauthenticated { .. } => "Your session has expired".to_string(),
            ApiError::Http { .. } => "Could not reach the server".to_string(),
            ApiError::Json { .. } | ApiError::Url { .. } => "Unexpected server response".to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ApiError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ApiError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ApiError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
