use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Invalid time text: '{0}'")]
    InvalidTime(String),

    #[error("Unknown scoring preset: '{0}'")]
    UnknownPreset(String),

    #[error("Invalid scoring configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScoringError>;

impl ScoringError {
    pub fn is_invalid_time(&self) -> bool {
        matches!(self, ScoringError::InvalidTime(_))
    }
}
