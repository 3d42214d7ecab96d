use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid answer record: {0}")]
    InvalidRecord(#[from] serde_json::Error),

    #[error("unhandled value '{value}' for field '{field}'")]
    UnhandledCategory { field: &'static str, value: String },
}
