use axum::{Router, routing::get};

use super::handlers::{get_club_standings, get_swimmer_standings};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/clubs", get(get_club_standings))
        .route("/swimmers", get(get_swimmer_standings))
}
