use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum AppError {
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Exchange rates unavailable")]
    RateUnavailable,

    #[error("API key not configured")]
    ApiKeyMissing,

    #[error("Network Error: {0}")]
    Network(String),

    #[error("API endpoint not found")]
    EndpointNotFound,

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Server returned status code {0}")]
    ServerError(u16),

    #[error("Invalid response: {0}")]
    DecodeFailed(String),

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Cache Error: {0}")]
    Cache(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::DecodeFailed(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
