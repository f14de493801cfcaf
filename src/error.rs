use thiserror::Error;

#[derive(Debug, Error)]
pub enum BodyTuneError {
    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, BodyTuneError>;
