use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use scoring::models::ScoringConfig;

use crate::dto::PresetResponse;
use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/config",
    responses(
        (status = 200, description = "Active scoring config", body = ScoringConfig)
    ),
    tag = "config"
)]
pub async fn get_config(State(state): State<AppState>) -> Result<Response, WebError> {
    let config = services::current_config(&state).await;

    Ok(Json(config).into_response())
}

#[utoipa::path(
    put,
    path = "/api/config",
    request_body = ScoringConfig,
    responses(
        (status = 200, description = "Config replaced and current meet rescored", body = ScoringConfig),
        (status = 400, description = "Invalid config")
    ),
    tag = "config"
)]
pub async fn update_config(
    State(state): State<AppState>,
    Json(payload): Json<ScoringConfig>,
) -> Result<Response, WebError> {
    let config = services::replace_config(&state, payload).await?;

    Ok(Json(config).into_response())
}

#[utoipa::path(
    put,
    path = "/api/config/preset/{id}",
    params(
        ("id" = String, Path, description = "Preset id, e.g. clm-regional-2026")
    ),
    responses(
        (status = 200, description = "Preset applied and current meet rescored", body = ScoringConfig),
        (status = 404, description = "Unknown preset")
    ),
    tag = "config"
)]
pub async fn apply_preset(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let config = services::apply_preset(&state, &id).await?;

    Ok(Json(config).into_response())
}

#[utoipa::path(
    get,
    path = "/api/presets",
    responses(
        (status = 200, description = "Built-in scoring presets", body = Vec<PresetResponse>)
    ),
    tag = "config"
)]
pub async fn list_presets(State(state): State<AppState>) -> Result<Response, WebError> {
    let presets = services::list_presets(&state);

    Ok(Json(presets).into_response())
}
