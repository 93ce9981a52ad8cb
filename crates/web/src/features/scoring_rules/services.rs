use std::collections::HashSet;

use scoring::models::ScoringConfig;

use crate::dto::PresetResponse;
use crate::error::{WebError, WebResult};
use crate::state::AppState;

fn check_config(config: &ScoringConfig) -> WebResult<()> {
    let mut problems = Vec::new();

    if config.id.trim().is_empty() {
        problems.push("id is required".to_string());
    }
    if config.individual_points.is_empty() {
        problems.push("individualPoints must not be empty".to_string());
    }
    if config.relay_points.is_empty() {
        problems.push("relayPoints must not be empty".to_string());
    }

    let scales = std::iter::once(&config.individual_points)
        .chain(std::iter::once(&config.relay_points))
        .chain(config.special_relay_points.values());
    if scales.flatten().any(|points| points.is_sign_negative()) {
        problems.push("point scales must not contain negative values".to_string());
    }

    if config.max_swimmers_per_club_per_event == Some(0) {
        problems.push("maxSwimmersPerClubPerEvent must be at least 1, or null".to_string());
    }

    let mut ids = HashSet::new();
    for category in &config.categories {
        if !ids.insert(category.id.as_str()) {
            problems.push(format!("duplicate category id '{}'", category.id));
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(WebError::BadRequest(format!(
            "Invalid scoring config: {}",
            problems.join("; ")
        )))
    }
}

pub async fn current_config(state: &AppState) -> ScoringConfig {
    state.store.read().await.config().clone()
}

/// Replaces the active config and rescores the loaded meet.
pub async fn replace_config(state: &AppState, config: ScoringConfig) -> WebResult<ScoringConfig> {
    check_config(&config)?;

    let mut store = state.store.write().await;
    store.set_config(config);
    Ok(store.config().clone())
}

pub async fn apply_preset(state: &AppState, preset: &str) -> WebResult<ScoringConfig> {
    let config = state.presets.get_by_name(preset)?;
    tracing::info!("Switching to preset '{}'", config.id);
    replace_config(state, config).await
}

pub fn list_presets(state: &AppState) -> Vec<PresetResponse> {
    state
        .presets
        .list_presets()
        .into_iter()
        .filter_map(|id| state.presets.get(id))
        .map(|config| PresetResponse {
            id: config.id,
            name: config.name,
            description: config.description,
        })
        .collect()
}
