use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use scoring::models::{ClubStanding, SwimmerStanding};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/standings/clubs",
    responses(
        (status = 200, description = "Club standings, highest total first", body = Vec<ClubStanding>),
        (status = 404, description = "No meet loaded")
    ),
    tag = "standings"
)]
pub async fn get_club_standings(State(state): State<AppState>) -> Result<Response, WebError> {
    let standings = services::club_standings(&state).await?;

    Ok(Json(standings).into_response())
}

#[utoipa::path(
    get,
    path = "/api/standings/swimmers",
    responses(
        (status = 200, description = "Swimmer standings, highest total first", body = Vec<SwimmerStanding>),
        (status = 404, description = "No meet loaded")
    ),
    tag = "standings"
)]
pub async fn get_swimmer_standings(State(state): State<AppState>) -> Result<Response, WebError> {
    let standings = services::swimmer_standings(&state).await?;

    Ok(Json(standings).into_response())
}
