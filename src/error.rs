use thiserror::Error;

#[derive(Error, Debug)]
pub enum PollError {
    #[error("Failed to read poll snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed poll snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
