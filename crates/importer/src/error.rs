use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImporterError>;

#[derive(Error, Debug)]
pub enum ImporterError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Scoring error: {0}")]
    Scoring(#[from] scoring::ScoringError),

    #[error("No events found in results text")]
    NoEventsFound,

    #[error("Validation error: {0}")]
    ValidationError(String),
}
