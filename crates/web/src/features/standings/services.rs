use scoring::models::{ClubStanding, SwimmerStanding};

use crate::error::{WebError, WebResult};
use crate::state::AppState;

pub async fn club_standings(state: &AppState) -> WebResult<Vec<ClubStanding>> {
    let store = state.store.read().await;
    store
        .scored()
        .map(|scored| scored.club_standings.clone())
        .ok_or_else(|| WebError::NotFound("Meet".to_string()))
}

pub async fn swimmer_standings(state: &AppState) -> WebResult<Vec<SwimmerStanding>> {
    let store = state.store.read().await;
    store
        .scored()
        .map(|scored| scored.swimmer_standings.clone())
        .ok_or_else(|| WebError::NotFound("Meet".to_string()))
}
