use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{create_meet, delete_current_meet, get_current_meet};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_meet))
        .route("/current", get(get_current_meet).delete(delete_current_meet))
}
