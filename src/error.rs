use thiserror::Error;

#[derive(Error, Debug)]
pub enum PluginError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Inconsistent criteria: {0}")]
    InconsistentCriteria(String),
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },
    #[error("Unknown payment handler: {0}")]
    UnknownHandler(String),
    #[error("Repository error: {0}")]
    RepositoryError(String),
    #[error("Media error: {0}")]
    MediaError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, PluginError>;
