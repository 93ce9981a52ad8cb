use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use scoring::models::ScoredMeet;
use validator::Validate;

use crate::dto::{CreateMeetRequest, MeetSummaryResponse};
use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/meets",
    request_body = CreateMeetRequest,
    responses(
        (status = 201, description = "Meet parsed and scored", body = MeetSummaryResponse),
        (status = 400, description = "Invalid request"),
        (status = 422, description = "No results could be read from the text")
    ),
    tag = "meets"
)]
pub async fn create_meet(
    State(state): State<AppState>,
    Json(payload): Json<CreateMeetRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let summary = services::create_meet(&state, payload).await?;

    Ok((StatusCode::CREATED, Json(summary)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/meets/current",
    responses(
        (status = 200, description = "Scored events and standings of the current meet", body = ScoredMeet),
        (status = 404, description = "No meet loaded")
    ),
    tag = "meets"
)]
pub async fn get_current_meet(State(state): State<AppState>) -> Result<Response, WebError> {
    let scored = services::current_meet(&state).await?;

    Ok(Json(scored).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/meets/current",
    responses(
        (status = 204, description = "Current meet removed"),
        (status = 404, description = "No meet loaded")
    ),
    tag = "meets"
)]
pub async fn delete_current_meet(State(state): State<AppState>) -> Result<Response, WebError> {
    services::clear_meet(&state).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
