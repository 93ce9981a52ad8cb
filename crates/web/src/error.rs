use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use importer::ImporterError;
use scoring::ScoringError;
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Importer(ImporterError),
    Scoring(ScoringError),
    Validation(ValidationErrors),
    BadRequest(String),
    NotFound(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Importer(e) => write!(f, "Import error: {}", e),
            Self::Scoring(e) => write!(f, "Scoring error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::NotFound(what) => write!(f, "Not found: {}", what),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Importer(ImporterError::NoEventsFound) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Importer(ImporterError::ValidationError(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Importer(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Scoring(ScoringError::UnknownPreset(_)) => StatusCode::NOT_FOUND,
            Self::Scoring(_) => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        let body = match &self {
            Self::Importer(ImporterError::NoEventsFound) => {
                json!({ "error": "No results found in the submitted text" })
            }
            Self::Importer(ImporterError::ValidationError(msg)) | Self::BadRequest(msg) => {
                json!({ "error": msg })
            }
            Self::Importer(e) => {
                tracing::error!("Import error: {:?}", e);
                json!({ "error": "An internal error occurred" })
            }
            Self::Scoring(e) => json!({ "error": e.to_string() }),
            Self::Validation(errors) => json!({
                "error": "Validation failed",
                "details": field_messages(errors)
            }),
            Self::NotFound(what) => json!({ "error": format!("{} not found", what) }),
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<ImporterError> for WebError {
    fn from(error: ImporterError) -> Self {
        Self::Importer(error)
    }
}

impl From<ScoringError> for WebError {
    fn from(error: ScoringError) -> Self {
        Self::Scoring(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

/// One `field: message` line per failed check, falling back to the check code.
fn field_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();
    for (field, failures) in errors.field_errors() {
        for failure in failures {
            let reason = match &failure.message {
                Some(message) => message.to_string(),
                None => failure.code.to_string(),
            };
            messages.push(format!("{}: {}", field, reason));
        }
    }
    messages.sort();
    messages
}

pub type WebResult<T> = Result<T, WebError>;
