use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::{ClubStanding, Event, SwimmerStanding};
use crate::services::identity::IdentityRegistry;

/// A parsed meet. Scoring never mutates it; every run reads from here.
#[derive(Debug, Clone)]
pub struct Meet {
    pub name: String,
    pub date: Option<NaiveDate>,
    pub events: Vec<Event>,
    pub registry: IdentityRegistry,
}

impl Meet {
    pub fn new(name: impl Into<String>, events: Vec<Event>, registry: IdentityRegistry) -> Self {
        Self {
            name: name.into(),
            date: None,
            events,
            registry,
        }
    }

    pub fn result_count(&self) -> usize {
        self.events.iter().map(|e| e.results.len()).sum()
    }
}

/// Output of one scoring run. Replaced wholesale on every run.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScoredMeet {
    pub name: String,
    pub date: Option<NaiveDate>,
    pub scoring_config_id: String,
    pub reference_year: i32,
    pub events: Vec<Event>,
    pub club_standings: Vec<ClubStanding>,
    pub swimmer_standings: Vec<SwimmerStanding>,
}
