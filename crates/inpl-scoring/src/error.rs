use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("unknown test: {0}")]
    UnknownTest(String),

    #[error("failed to read normative table: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid normative table (line {line}): {message}")]
    InvalidNorms { line: u64, message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
