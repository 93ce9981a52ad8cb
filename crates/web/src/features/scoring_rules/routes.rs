use axum::{
    Router,
    routing::{get, put},
};

use super::handlers::{apply_preset, get_config, list_presets, update_config};
use crate::state::AppState;

pub fn config_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_config).put(update_config))
        .route("/preset/:id", put(apply_preset))
}

pub fn preset_routes() -> Router<AppState> {
    Router::new().route("/", get(list_presets))
}
