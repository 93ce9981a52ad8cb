use std::sync::Arc;

use scoring::models::{Meet, ScoredMeet, ScoringConfig};
use scoring::{score_meet, PresetRegistry};
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<MeetStore>>,
    pub presets: Arc<PresetRegistry>,
}

impl AppState {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(MeetStore::new(config))),
            presets: Arc::new(PresetRegistry::new()),
        }
    }
}

struct LoadedMeet {
    meet: Meet,
    reference_year: i32,
    scored: ScoredMeet,
}

/// The active scoring config and at most one loaded meet.
///
/// Every change rescores from the parsed meet and swaps the whole scored
/// result in one step.
pub struct MeetStore {
    config: ScoringConfig,
    current: Option<LoadedMeet>,
}

impl MeetStore {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config,
            current: None,
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn scored(&self) -> Option<&ScoredMeet> {
        self.current.as_ref().map(|loaded| &loaded.scored)
    }

    pub fn meet(&self) -> Option<&Meet> {
        self.current.as_ref().map(|loaded| &loaded.meet)
    }

    pub fn load(&mut self, meet: Meet, reference_year: i32) -> &ScoredMeet {
        let scored = score_meet(&meet, &self.config, reference_year);
        let loaded = self.current.insert(LoadedMeet {
            meet,
            reference_year,
            scored,
        });
        &loaded.scored
    }

    pub fn set_config(&mut self, config: ScoringConfig) {
        if let Some(loaded) = self.current.as_mut() {
            loaded.scored = score_meet(&loaded.meet, &config, loaded.reference_year);
            tracing::info!("Rescored '{}' with '{}'", loaded.meet.name, config.id);
        }
        self.config = config;
    }

    /// Returns whether a meet was loaded.
    pub fn clear(&mut self) -> bool {
        self.current.take().is_some()
    }
}
