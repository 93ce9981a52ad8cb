use chrono::Datelike;
use scoring::models::ScoredMeet;

use crate::dto::{CreateMeetRequest, MeetSummaryResponse};
use crate::error::{WebError, WebResult};
use crate::state::{AppState, MeetStore};

fn summary(store: &MeetStore) -> WebResult<MeetSummaryResponse> {
    let (Some(meet), Some(scored)) = (store.meet(), store.scored()) else {
        return Err(WebError::NotFound("Meet".to_string()));
    };

    Ok(MeetSummaryResponse {
        name: scored.name.clone(),
        date: scored.date,
        scoring_config_id: scored.scoring_config_id.clone(),
        reference_year: scored.reference_year,
        event_count: scored.events.len(),
        result_count: meet.result_count(),
        club_count: meet.registry.club_count(),
        swimmer_count: meet.registry.swimmer_count(),
    })
}

/// Parses the submitted text, scores it and makes it the current meet.
pub async fn create_meet(
    state: &AppState,
    request: CreateMeetRequest,
) -> WebResult<MeetSummaryResponse> {
    let CreateMeetRequest {
        name,
        text,
        reference_year,
        date,
    } = request;

    let mut meet = tokio::task::spawn_blocking(move || importer::import_meet(&name, &text))
        .await
        .map_err(|e| WebError::BadRequest(format!("Import task failed: {}", e)))??;
    meet.date = date;

    let reference_year = reference_year.unwrap_or_else(|| chrono::Local::now().year());

    let mut store = state.store.write().await;
    store.load(meet, reference_year);
    summary(&store)
}

pub async fn current_meet(state: &AppState) -> WebResult<ScoredMeet> {
    let store = state.store.read().await;
    store
        .scored()
        .cloned()
        .ok_or_else(|| WebError::NotFound("Meet".to_string()))
}

pub async fn clear_meet(state: &AppState) -> WebResult<()> {
    let mut store = state.store.write().await;
    if store.clear() {
        tracing::info!("Cleared current meet");
        Ok(())
    } else {
        Err(WebError::NotFound("Meet".to_string()))
    }
}
