pub mod error;
pub mod models;
pub mod presets;
pub mod services;

pub use error::{Result, ScoringError};
pub use presets::{PresetId, PresetRegistry};
pub use services::identity::IdentityRegistry;
pub use services::scoring_engine::{score_event, score_meet};
pub use services::standings::{calculate_club_standings, calculate_swimmer_standings};
