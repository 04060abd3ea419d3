/// Application error types
use resumecheck_client::ApiError;
use resumecheck_storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("API client error: {0}")]
    Api(#[from] ApiError),
}

pub type Result<T> = std::result::Result<T, AppError>;
