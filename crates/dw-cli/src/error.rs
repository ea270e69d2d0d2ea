use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] dw_config::ConfigError),

    #[error(transparent)]
    App(#[from] dw_app::AppError),

    #[error("Cache error: {0}")]
    Store(#[from] dw_db::DbError),

    #[error("Backend error: {0}")]
    Api(#[from] dw_api::ApiError),

    #[error("{message}")]
    Usage { message: String },

    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
